use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    //-------------------------------------------------------------------------
    // Named stages
    //-------------------------------------------------------------------------
    #[error("unknown named stage '{name}' (known: {known})")]
    UnknownNamedStage { name: String, known: String },

    //-------------------------------------------------------------------------
    // Method restriction
    //-------------------------------------------------------------------------
    #[error("method_restrict contains an empty method name")]
    EmptyMethod,
}

impl ConfigError {
    pub fn unknown_named_stage(name: impl Into<String>) -> Self {
        Self::UnknownNamedStage {
            name: name.into(),
            known: crate::stage::registry::names()
                .collect::<Vec<_>>()
                .join(", "),
        }
    }
}
