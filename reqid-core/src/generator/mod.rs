#[allow(clippy::module_inception)]
mod generator;

pub use generator::*;
