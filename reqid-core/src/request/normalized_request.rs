use crate::request::{RawRequest, canonical_header_key};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

/// Key to ordered values. Key iteration order is sorted, value order is
/// insertion order.
pub type MultiMap = BTreeMap<String, Vec<String>>;

pub const DEFAULT_METHOD: &str = "GET";

/// One of the three request parts that can independently take part in the hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Component {
    Header,
    Query,
    Cookie,
}

impl Component {
    pub const ALL: [Component; 3] = [Component::Header, Component::Query, Component::Cookie];

    pub fn as_str(&self) -> &'static str {
        match self {
            Component::Header => "header",
            Component::Query => "query",
            Component::Cookie => "cookie",
        }
    }
}

impl Display for Component {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The projection of an inbound request that stages operate on.
///
/// Owns its maps outright; nothing here aliases the raw request it was built
/// from. Components start out not included, and the request starts out not
/// excluded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedRequest {
    method: String,
    path: String,
    headers: MultiMap,
    query: MultiMap,
    cookies: MultiMap,
    headers_included: bool,
    query_included: bool,
    cookies_included: bool,
    excluded: bool,
}

impl NormalizedRequest {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        let mut method = method.into();
        if method.is_empty() {
            method = DEFAULT_METHOD.to_owned();
        }

        Self {
            method,
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn from_raw<R: RawRequest + ?Sized>(raw: &R) -> Self {
        let mut req = Self::new(raw.method(), raw.path());
        for (name, value) in raw.headers() {
            req.append_header(&name, value);
        }
        for (key, value) in raw.query() {
            req.query.entry(key).or_default().push(value);
        }
        for (name, value) in raw.cookies() {
            req.cookies.entry(name).or_default().push(value);
        }
        req
    }

    pub fn with_header(mut self, name: &str, value: impl Into<String>) -> Self {
        self.append_header(name, value.into());
        self
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.entry(key.into()).or_default().push(value.into());
        self
    }

    pub fn with_cookie(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.cookies
            .entry(name.into())
            .or_default()
            .push(value.into());
        self
    }

    fn append_header(&mut self, name: &str, value: String) {
        self.headers
            .entry(canonical_header_key(name))
            .or_default()
            .push(value);
    }

    pub fn method(&self) -> &str {
        &self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn headers(&self) -> &MultiMap {
        &self.headers
    }

    pub fn query(&self) -> &MultiMap {
        &self.query
    }

    pub fn cookies(&self) -> &MultiMap {
        &self.cookies
    }

    /// Values of a header, looked up by any casing of its name.
    pub fn header_values(&self, name: &str) -> &[String] {
        self.headers
            .get(&canonical_header_key(name))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn headers_mut(&mut self) -> &mut MultiMap {
        &mut self.headers
    }

    pub fn component(&self, component: Component) -> &MultiMap {
        match component {
            Component::Header => &self.headers,
            Component::Query => &self.query,
            Component::Cookie => &self.cookies,
        }
    }

    pub fn component_mut(&mut self, component: Component) -> &mut MultiMap {
        match component {
            Component::Header => &mut self.headers,
            Component::Query => &mut self.query,
            Component::Cookie => &mut self.cookies,
        }
    }

    pub fn is_included(&self, component: Component) -> bool {
        match component {
            Component::Header => self.headers_included,
            Component::Query => self.query_included,
            Component::Cookie => self.cookies_included,
        }
    }

    pub fn include(&mut self, component: Component) {
        match component {
            Component::Header => self.headers_included = true,
            Component::Query => self.query_included = true,
            Component::Cookie => self.cookies_included = true,
        }
    }

    pub fn is_excluded(&self) -> bool {
        self.excluded
    }

    pub fn exclude(&mut self) {
        self.excluded = true;
    }

    /// Empties every component that no stage included, leaving exactly what
    /// the hash covers.
    pub fn retain_included(&mut self) {
        for component in Component::ALL {
            if !self.is_included(component) {
                self.component_mut(component).clear();
            }
        }
    }
}
