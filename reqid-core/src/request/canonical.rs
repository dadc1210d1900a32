use crate::request::{Component, MultiMap, NormalizedRequest, RequestId};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use sha2::Digest;
use url::form_urlencoded;

/// Bytes left alone when escaping a path as a single URL path segment:
/// unreserved characters plus `$ & + : = @`. Everything else, `/` included,
/// is percent-encoded.
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'$')
    .remove(b'&')
    .remove(b'+')
    .remove(b':')
    .remove(b'=')
    .remove(b'@');

pub fn escape_path(path: &str) -> String {
    utf8_percent_encode(path, PATH_SEGMENT).to_string()
}

/// Form-encodes a multimap as `key=value&key=value`, keys sorted and each
/// key's values sorted, so insertion order never reaches the digest.
pub fn encode_multimap(map: &MultiMap) -> String {
    let mut serializer = form_urlencoded::Serializer::new(String::new());
    for (key, values) in map {
        let mut values: Vec<&String> = values.iter().collect();
        values.sort();
        for value in values {
            serializer.append_pair(key, value);
        }
    }
    serializer.finish()
}

/// The exact text fed to the hasher for `req`.
///
/// Components that are not included encode as the empty string, the same as an
/// included component with no keys left.
pub fn canonical_form(req: &NormalizedRequest) -> String {
    let encode = |component: Component| {
        if req.is_included(component) {
            encode_multimap(req.component(component))
        } else {
            String::new()
        }
    };

    format!(
        "method:{}\npath:{}\nheader:{}\nquery:{}\ncookie:{}\n",
        req.method(),
        escape_path(req.path()),
        encode(Component::Header),
        encode(Component::Query),
        encode(Component::Cookie),
    )
}

/// Hashes the canonical form with a fresh `D`.
pub fn hash_request<D: Digest>(req: &NormalizedRequest) -> RequestId {
    let mut hasher = D::new();
    hasher.update(canonical_form(req).as_bytes());
    RequestId::from(hasher.finalize().as_slice())
}
