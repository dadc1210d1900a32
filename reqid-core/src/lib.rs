pub mod conf;
pub mod generator;
pub mod matcher;
pub mod request;
pub mod stage;

pub use conf::{ComponentConfig, ConfigError, GeneratorConfig};
pub use generator::{Generator, GeneratorBuilder};
pub use matcher::{WildCard, WildCardSet};
pub use request::{NormalizedRequest, RawRequest, RequestId, RequestParts};
pub use stage::{Component, FilterPolicy, NamedStage, Stage};
