/// Header name under which Accept-Encoding values are stored once canonicalized.
pub const ACCEPT_ENCODING: &str = "Accept-Encoding";

/// Returns the canonical MIME form of a header name: the first letter and every
/// letter following a hyphen are upper-cased, the rest lower-cased.
///
/// Names containing bytes that are not valid in an HTTP token are returned
/// unchanged, so a malformed name never aliases a well-formed one.
pub fn canonical_header_key(name: &str) -> String {
    if !name.bytes().all(is_token_byte) {
        return name.to_owned();
    }

    let mut upper = true;
    name.chars()
        .map(|c| {
            let out = if upper {
                c.to_ascii_uppercase()
            } else {
                c.to_ascii_lowercase()
            };
            upper = c == '-';
            out
        })
        .collect()
}

// RFC 9110 section 5.6.2
fn is_token_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(
            b,
            b'!' | b'#'
                | b'$'
                | b'%'
                | b'&'
                | b'\''
                | b'*'
                | b'+'
                | b'-'
                | b'.'
                | b'^'
                | b'_'
                | b'`'
                | b'|'
                | b'~'
        )
}
