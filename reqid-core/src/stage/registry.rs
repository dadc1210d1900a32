use crate::request::{Component, NormalizedRequest};
use crate::stage::Stage;
use crate::stage::builtin::normalize_accept_encoding;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use thiserror::Error;

/// Query parameters added by ad and analytics links.
pub const TRACKING_QUERY_PARAMS: [&str; 3] = ["utm_*", "gclid", "fbclid"];

static DROP_TRACKING_QUERY: Lazy<Stage> =
    Lazy::new(|| Stage::drop_list(Component::Query, TRACKING_QUERY_PARAMS));

/// Stages that can be referenced by name from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum NamedStage {
    /// See [`normalize_accept_encoding`].
    NormalizeAcceptEncoding,
    /// Includes the query and drops [`TRACKING_QUERY_PARAMS`].
    DropTrackingQuery,
}

static REGISTRY: &[(&str, NamedStage)] = &[
    (
        "normalize-accept-encoding",
        NamedStage::NormalizeAcceptEncoding,
    ),
    ("drop-tracking-query", NamedStage::DropTrackingQuery),
];

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown named stage '{0}'")]
pub struct UnknownNamedStage(pub String);

impl NamedStage {
    pub fn as_str(&self) -> &'static str {
        REGISTRY
            .iter()
            .find_map(|(name, stage)| (stage == self).then_some(*name))
            .unwrap_or("unregistered")
    }

    pub fn apply(&self, req: NormalizedRequest) -> NormalizedRequest {
        match self {
            NamedStage::NormalizeAcceptEncoding => normalize_accept_encoding(req),
            NamedStage::DropTrackingQuery => DROP_TRACKING_QUERY.apply(req),
        }
    }
}

impl FromStr for NamedStage {
    type Err = UnknownNamedStage;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        REGISTRY
            .iter()
            .find_map(|(name, stage)| (*name == s).then_some(*stage))
            .ok_or_else(|| UnknownNamedStage(s.to_owned()))
    }
}

impl Display for NamedStage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolves a symbolic stage name.
pub fn lookup(name: &str) -> Option<Stage> {
    name.parse().ok().map(Stage::Named)
}

/// Every registered name, in registration order.
pub fn names() -> impl Iterator<Item = &'static str> {
    REGISTRY.iter().map(|(name, _)| *name)
}
