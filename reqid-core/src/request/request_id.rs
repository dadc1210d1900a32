use sha2::Digest;
use std::fmt::{Debug, Display, Formatter, LowerHex};

/// Opaque digest identifying the canonical content of a request.
///
/// Identical requests under an identical generator configuration produce
/// identical ids. The bytes carry no other structure.
#[derive(Clone, Default, Eq, Hash, PartialEq)]
pub struct RequestId(Box<[u8]>);

impl RequestId {
    /// The id returned for requests that are not eligible for identification:
    /// the digest width of `D`, all zero.
    pub fn zero<D: Digest>() -> Self {
        RequestId(vec![0u8; <D as Digest>::output_size()].into_boxed_slice())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|b| *b == 0)
    }

    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl From<&[u8]> for RequestId {
    fn from(bytes: &[u8]) -> Self {
        RequestId(bytes.into())
    }
}

impl From<Vec<u8>> for RequestId {
    fn from(bytes: Vec<u8>) -> Self {
        RequestId(bytes.into_boxed_slice())
    }
}

impl AsRef<[u8]> for RequestId {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Display for RequestId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl LowerHex for RequestId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl Debug for RequestId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "RequestId({})", self.to_hex())
    }
}
