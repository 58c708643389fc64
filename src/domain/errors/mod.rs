//! Domain error types.

mod request_error;

pub use request_error::RequestError;
