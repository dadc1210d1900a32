mod accept_encoding;

pub use accept_encoding::*;
