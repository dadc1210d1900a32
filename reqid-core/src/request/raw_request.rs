use http::header::COOKIE;
use percent_encoding::percent_decode_str;
use std::borrow::Cow;
use url::form_urlencoded;

/// The transport-facing view of an inbound request.
///
/// Implementations only expose data; they are never handed to stages.
pub trait RawRequest {
    fn method(&self) -> &str;

    /// The URL path, already percent-decoded. Escaping happens once, when the
    /// request is hashed.
    fn path(&self) -> Cow<'_, str>;

    fn headers(&self) -> impl Iterator<Item = (String, String)>;

    fn query(&self) -> impl Iterator<Item = (String, String)>;

    fn cookies(&self) -> impl Iterator<Item = (String, String)>;
}

/// A plain owned request, for hosts that do not use the `http` types.
#[derive(Debug, Clone, Default)]
pub struct RequestParts {
    pub method: String,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub query: Vec<(String, String)>,
    pub cookies: Vec<(String, String)>,
}

impl RequestParts {
    pub fn new(method: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            path: path.into(),
            ..Default::default()
        }
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn with_query(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    pub fn with_cookie(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.cookies.push((name.into(), value.into()));
        self
    }
}

impl RawRequest for RequestParts {
    fn method(&self) -> &str {
        &self.method
    }

    fn path(&self) -> Cow<'_, str> {
        Cow::Borrowed(&self.path)
    }

    fn headers(&self) -> impl Iterator<Item = (String, String)> {
        self.headers.iter().cloned()
    }

    fn query(&self) -> impl Iterator<Item = (String, String)> {
        self.query.iter().cloned()
    }

    fn cookies(&self) -> impl Iterator<Item = (String, String)> {
        self.cookies.iter().cloned()
    }
}

impl<B> RawRequest for http::Request<B> {
    fn method(&self) -> &str {
        http::Request::method(self).as_str()
    }

    /// Invalid UTF-8 after decoding is replaced rather than rejected.
    fn path(&self) -> Cow<'_, str> {
        percent_decode_str(self.uri().path()).decode_utf8_lossy()
    }

    fn headers(&self) -> impl Iterator<Item = (String, String)> {
        http::Request::headers(self).iter().map(|(name, value)| {
            (
                name.as_str().to_owned(),
                String::from_utf8_lossy(value.as_bytes()).into_owned(),
            )
        })
    }

    fn query(&self) -> impl Iterator<Item = (String, String)> {
        let raw = self.uri().query().unwrap_or("");
        form_urlencoded::parse(raw.as_bytes()).into_owned()
    }

    fn cookies(&self) -> impl Iterator<Item = (String, String)> {
        http::Request::headers(self)
            .get_all(COOKIE)
            .iter()
            .flat_map(|value| parse_cookie_header(&String::from_utf8_lossy(value.as_bytes())))
    }
}

/// Splits a `Cookie` header value into `(name, value)` pairs.
///
/// Pairs without `=` or with an empty name are skipped. Values lose one level
/// of surrounding double quotes.
pub fn parse_cookie_header(header: &str) -> Vec<(String, String)> {
    header
        .split(';')
        .filter_map(|part| {
            let (name, value) = part.trim().split_once('=')?;
            let name = name.trim();
            if name.is_empty() {
                return None;
            }

            let value = value.trim();
            let value = value
                .strip_prefix('"')
                .and_then(|v| v.strip_suffix('"'))
                .unwrap_or(value);

            Some((name.to_owned(), value.to_owned()))
        })
        .collect()
}
