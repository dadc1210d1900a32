use crate::matcher::WildCardSet;
use crate::stage::registry::TRACKING_QUERY_PARAMS;
use serde::{Deserialize, Serialize};

pub const DEFAULT_METHODS: [&str; 3] = ["GET", "HEAD", "OPTIONS"];

pub const DEFAULT_HEADER_ACCEPT: [&str; 4] = ["Host", "Origin", "Authorization", "Accept-Encoding"];

/// Declarative description of a generator.
///
/// Lowered into stages in a fixed order: method restriction, path restriction,
/// path exception, the header, query and cookie blocks, then named stages.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    //-------------------------------------------------------------------------
    // Eligibility
    //-------------------------------------------------------------------------
    /// Only these methods get an id.
    #[serde(default)]
    pub method_restrict: Option<Vec<String>>,

    /// Only paths matching one of these get an id.
    #[serde(default)]
    pub path_restrict: Option<WildCardSet>,

    /// Paths matching one of these never get an id.
    #[serde(default)]
    pub path_except: Option<WildCardSet>,

    //-------------------------------------------------------------------------
    // Components
    //-------------------------------------------------------------------------
    #[serde(default)]
    pub header: ComponentConfig,

    #[serde(default)]
    pub query: ComponentConfig,

    #[serde(default)]
    pub cookie: ComponentConfig,

    //-------------------------------------------------------------------------
    // Post-processing
    //-------------------------------------------------------------------------
    #[serde(default)]
    pub named_stages: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ComponentConfig {
    /// Whether the component takes part in the hash at all.
    #[serde(default)]
    pub enabled: bool,

    #[serde(default)]
    pub accept: Option<WildCardSet>,

    #[serde(default)]
    pub drop: Option<WildCardSet>,
}

impl ComponentConfig {
    pub fn enabled() -> Self {
        Self {
            enabled: true,
            ..Default::default()
        }
    }

    pub fn accepting<I: IntoIterator<Item = &'static str>>(patterns: I) -> Self {
        Self {
            enabled: true,
            accept: Some(patterns.into_iter().collect()),
            drop: None,
        }
    }

    pub fn dropping<I: IntoIterator<Item = &'static str>>(patterns: I) -> Self {
        Self {
            enabled: true,
            accept: None,
            drop: Some(patterns.into_iter().collect()),
        }
    }
}

impl Default for GeneratorConfig {
    /// Idempotent methods only; host, origin, credentials and encoding headers;
    /// the query without tracking parameters; no cookies.
    fn default() -> Self {
        Self {
            method_restrict: Some(DEFAULT_METHODS.iter().map(|m| m.to_string()).collect()),
            path_restrict: None,
            path_except: None,
            header: ComponentConfig::accepting(DEFAULT_HEADER_ACCEPT),
            query: ComponentConfig::dropping(TRACKING_QUERY_PARAMS),
            cookie: ComponentConfig::default(),
            named_stages: vec!["normalize-accept-encoding".to_string()],
        }
    }
}

impl GeneratorConfig {
    /// A config that includes every request and hashes only method and path.
    pub fn empty() -> Self {
        Self {
            method_restrict: None,
            path_restrict: None,
            path_except: None,
            header: ComponentConfig::default(),
            query: ComponentConfig::default(),
            cookie: ComponentConfig::default(),
            named_stages: Vec::new(),
        }
    }
}
