mod request;
pub mod tracing;

pub use request::{get, request};
pub use tracing::{CapturedEvent, CapturedEvents, capture_events};
