use crate::matcher::{WildCard, WildCardSet};
use crate::request::{Component, MultiMap, NormalizedRequest};
use crate::stage::NamedStage;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// How a filter stage treats the keys of its component.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FilterPolicy {
    /// Keep only keys matching at least one pattern.
    Accept(WildCardSet),
    /// Remove keys matching any pattern.
    Drop(WildCardSet),
    /// Keep every key.
    Enable,
}

impl FilterPolicy {
    pub fn retain(&self, map: &mut MultiMap) {
        match self {
            FilterPolicy::Accept(patterns) => map.retain(|key, _| !patterns.none_match(key)),
            FilterPolicy::Drop(patterns) => map.retain(|key, _| !patterns.any_match(key)),
            FilterPolicy::Enable => {}
        }
    }

    fn canonical_headers(self) -> Self {
        match self {
            FilterPolicy::Accept(patterns) => FilterPolicy::Accept(patterns.canonical_headers()),
            FilterPolicy::Drop(patterns) => FilterPolicy::Drop(patterns.canonical_headers()),
            FilterPolicy::Enable => FilterPolicy::Enable,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FilterPolicy::Accept(_) => "accept",
            FilterPolicy::Drop(_) => "drop",
            FilterPolicy::Enable => "enable",
        }
    }
}

/// One step of the normalization pipeline.
///
/// Stages are plain data; [`Stage::apply`] is the only place their behavior
/// lives.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Excludes the request unless its method is listed.
    MethodRestrict(Vec<String>),
    /// Excludes the request unless its path matches a pattern.
    PathRestrict(WildCardSet),
    /// Excludes the request if its path matches a pattern.
    PathExcept(WildCardSet),
    /// Includes a component in the hash and filters its keys.
    Filter {
        component: Component,
        policy: FilterPolicy,
    },
    Named(NamedStage),
}

impl Stage {
    pub fn method_restrict<I, S>(methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Stage::MethodRestrict(methods.into_iter().map(Into::into).collect())
    }

    pub fn path_restrict<I, W>(patterns: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<WildCard>,
    {
        Stage::PathRestrict(patterns.into_iter().collect())
    }

    pub fn path_except<I, W>(patterns: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<WildCard>,
    {
        Stage::PathExcept(patterns.into_iter().collect())
    }

    pub fn filter(component: Component, policy: FilterPolicy) -> Self {
        Stage::Filter { component, policy }.canonicalize()
    }

    pub fn accept_list<I, W>(component: Component, patterns: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<WildCard>,
    {
        Self::filter(component, FilterPolicy::Accept(patterns.into_iter().collect()))
    }

    pub fn drop_list<I, W>(component: Component, patterns: I) -> Self
    where
        I: IntoIterator<Item = W>,
        W: Into<WildCard>,
    {
        Self::filter(component, FilterPolicy::Drop(patterns.into_iter().collect()))
    }

    pub fn enable(component: Component) -> Self {
        Stage::Filter {
            component,
            policy: FilterPolicy::Enable,
        }
    }

    /// Brings header patterns into canonical header form. Every other stage is
    /// returned as is. Idempotent.
    pub fn canonicalize(self) -> Self {
        match self {
            Stage::Filter {
                component: Component::Header,
                policy,
            } => Stage::Filter {
                component: Component::Header,
                policy: policy.canonical_headers(),
            },
            other => other,
        }
    }

    pub fn apply(&self, mut req: NormalizedRequest) -> NormalizedRequest {
        match self {
            Stage::MethodRestrict(methods) => {
                if !methods.iter().any(|m| m == req.method()) {
                    req.exclude();
                }
            }
            Stage::PathRestrict(patterns) => {
                if patterns.none_match(req.path()) {
                    req.exclude();
                }
            }
            Stage::PathExcept(patterns) => {
                if patterns.any_match(req.path()) {
                    req.exclude();
                }
            }
            Stage::Filter { component, policy } => {
                req.include(*component);
                policy.retain(req.component_mut(*component));
            }
            Stage::Named(named) => return named.apply(req),
        }
        req
    }

    pub fn name(&self) -> &'static str {
        match self {
            Stage::MethodRestrict(_) => "method_restrict",
            Stage::PathRestrict(_) => "path_restrict",
            Stage::PathExcept(_) => "path_except",
            Stage::Filter { .. } => "filter",
            Stage::Named(named) => named.as_str(),
        }
    }
}

impl Display for Stage {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Stage::MethodRestrict(methods) => write!(f, "method_restrict {methods:?}"),
            Stage::PathRestrict(patterns) => write!(f, "path_restrict {patterns}"),
            Stage::PathExcept(patterns) => write!(f, "path_except {patterns}"),
            Stage::Filter { component, policy } => match policy {
                FilterPolicy::Accept(patterns) | FilterPolicy::Drop(patterns) => {
                    write!(f, "{component} {} {patterns}", policy.as_str())
                }
                FilterPolicy::Enable => write!(f, "{component} enable"),
            },
            Stage::Named(named) => write!(f, "named {named}"),
        }
    }
}
