use anyhow::Context;
use reqid_core::{Generator, GeneratorConfig};
use std::fs;
use std::path::Path;
use tracing::debug;

pub fn load_config(path: &Path) -> anyhow::Result<GeneratorConfig> {
    let s = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;

    hcl::from_str(&s).with_context(|| format!("invalid configuration file: {}", path.display()))
}

/// The generator described by `path`, or the default preset without one.
pub fn load_generator(path: Option<&Path>) -> anyhow::Result<Generator> {
    let cfg = match path {
        Some(path) => load_config(path)?,
        None => GeneratorConfig::default(),
    };

    let generator = Generator::from_config(&cfg).context("failed to build generator")?;
    debug!(
        config = %path.map(|p| p.display().to_string()).unwrap_or_else(|| "<preset>".into()),
        stages = generator.stages().len(),
        "generator loaded"
    );
    Ok(generator)
}
