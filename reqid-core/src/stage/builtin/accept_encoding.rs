use crate::request::{ACCEPT_ENCODING, NormalizedRequest};

/// Collapses `Accept-Encoding` to the single value `gzip` when any value
/// mentions gzip, and removes the header otherwise.
///
/// Only touches the header map; whether headers are hashed at all is left to
/// the header stages.
pub fn normalize_accept_encoding(mut req: NormalizedRequest) -> NormalizedRequest {
    let accepts_gzip = req
        .header_values(ACCEPT_ENCODING)
        .iter()
        .any(|v| v.contains("gzip"));

    let headers = req.headers_mut();
    if accepts_gzip {
        headers.insert(ACCEPT_ENCODING.to_owned(), vec!["gzip".to_owned()]);
    } else {
        headers.remove(ACCEPT_ENCODING);
    }
    req
}
