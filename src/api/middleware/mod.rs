//! HTTP middleware for cross-cutting concerns.
//!
//! - `error_handler` - Maps application errors onto HTTP responses
//! - `logging` - Request/response logging with timing
//! - `request_id` - Request ID generation and propagation

pub mod error_handler;
pub mod logging;
pub mod request_id;

pub use error_handler::{error_to_code, error_to_status_code};
pub use logging::logging_middleware;
pub use request_id::{REQUEST_ID_HEADER, RequestId, request_id_middleware};
