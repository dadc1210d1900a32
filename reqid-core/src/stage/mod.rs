pub mod builtin;
mod pipeline;
pub mod registry;
#[allow(clippy::module_inception)]
mod stage;
#[cfg(test)]
mod tests;

pub use crate::request::Component;
pub use pipeline::StagePipeline;
pub use registry::{NamedStage, UnknownNamedStage, lookup};
pub use stage::*;
