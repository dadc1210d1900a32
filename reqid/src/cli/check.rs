use crate::config::load_generator;
use reqid_core::ConfigError;
use reqid_core::stage::registry;
use std::path::Path;
use std::process::ExitCode;

pub fn check(path: &Path, plain: bool) -> ExitCode {
    match check_report(path) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err:#}");
            if let Some(hint) = config_error_hint(&err).filter(|_| !plain) {
                eprintln!();
                eprintln!("{hint}");
            }
            ExitCode::FAILURE
        }
    }
}

/// What `check` prints for a valid config.
pub fn check_report(path: &Path) -> anyhow::Result<Vec<String>> {
    let generator = load_generator(Some(path))?;

    let mut lines = vec![
        "✔ Config loaded successfully".to_string(),
        format!("✔ {} stages", generator.stages().len()),
    ];
    lines.extend(
        generator
            .stages()
            .iter()
            .enumerate()
            .map(|(i, stage)| format!("  {}. {stage}", i + 1)),
    );

    Ok(lines)
}

pub fn config_error_hint(err: &anyhow::Error) -> Option<String> {
    match err.downcast_ref::<ConfigError>()? {
        ConfigError::UnknownNamedStage { .. } => Some(format!(
            "Named stages must be one of the registered names.\n\
             \n\
             Example:\n\
             \n\
             named_stages = [\"{}\"]",
            registry::names().next().unwrap_or_default()
        )),
        ConfigError::EmptyMethod => Some(
            "Method names are matched exactly, e.g. method_restrict = [\"GET\", \"HEAD\"]"
                .to_string(),
        ),
    }
}
