mod wildcard;

pub use wildcard::*;
