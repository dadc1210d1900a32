use crate::config::load_generator;
use std::path::Path;

pub fn dump(path: Option<&Path>) -> anyhow::Result<()> {
    let generator = load_generator(path)?;
    let s = serde_json::to_string_pretty(generator.stages())?;
    println!("{s}");
    Ok(())
}
