mod error;
mod lower;
#[cfg(test)]
mod tests;
mod types;

pub use error::*;
pub use types::*;
