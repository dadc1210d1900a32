use crate::request::canonical_header_key;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A string pattern with three interpretations:
///
/// - `*` matches every input, including the empty string
/// - `prefix*` matches every input starting with `prefix`
/// - anything else matches only itself
///
/// Matching is case-sensitive. An empty pattern matches only the empty string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(transparent)]
pub struct WildCard(String);

impl WildCard {
    pub fn new(pattern: impl Into<String>) -> Self {
        Self(pattern.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn matches(&self, s: &str) -> bool {
        match self.0.strip_suffix('*') {
            Some("") => true,
            Some(prefix) => s.starts_with(prefix),
            None => self.0 == s,
        }
    }
}

impl Display for WildCard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WildCard {
    fn from(s: &str) -> Self {
        WildCard(s.to_owned())
    }
}

impl From<String> for WildCard {
    fn from(s: String) -> Self {
        WildCard(s)
    }
}

/// True if at least one pattern matches `s`. An empty set never matches.
pub fn any_match(patterns: &[WildCard], s: &str) -> bool {
    patterns.iter().any(|p| p.matches(s))
}

/// True if every pattern matches `s`. An empty set always matches.
pub fn all_match(patterns: &[WildCard], s: &str) -> bool {
    patterns.iter().all(|p| p.matches(s))
}

/// True if no pattern matches `s`.
///
/// Accept-lists delete a key when this returns true, so it must stay the exact
/// negation of [`any_match`].
pub fn none_match(patterns: &[WildCard], s: &str) -> bool {
    !any_match(patterns, s)
}

/// An owned list of patterns, the unit stages are configured with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(transparent)]
pub struct WildCardSet(Vec<WildCard>);

impl WildCardSet {
    pub fn new(patterns: Vec<WildCard>) -> Self {
        Self(patterns)
    }

    pub fn any_match(&self, s: &str) -> bool {
        any_match(&self.0, s)
    }

    pub fn all_match(&self, s: &str) -> bool {
        all_match(&self.0, s)
    }

    pub fn none_match(&self, s: &str) -> bool {
        none_match(&self.0, s)
    }

    /// Rewrites every pattern into canonical header form so it can be compared
    /// against canonicalized header keys.
    pub fn canonical_headers(&self) -> Self {
        Self(
            self.0
                .iter()
                .map(|p| WildCard(canonical_header_key(p.as_str())))
                .collect(),
        )
    }

    pub fn patterns(&self) -> &[WildCard] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }
}

impl<W: Into<WildCard>> FromIterator<W> for WildCardSet {
    fn from_iter<I: IntoIterator<Item = W>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl Display for WildCardSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("[")?;
        for (i, p) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{:?}", p.as_str())?;
        }
        f.write_str("]")
    }
}
