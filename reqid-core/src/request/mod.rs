mod canonical;
mod headers;
mod normalized_request;
mod raw_request;
mod request_id;

pub use canonical::*;
pub use headers::*;
pub use normalized_request::*;
pub use raw_request::*;
pub use request_id::*;
