//! Data Transfer Objects for API requests and responses.
//!
//! DTOs are organized by domain:
//! - `content` - Content-related request/response DTOs
//! - `error` - Common error response DTOs

mod content;
mod error;

pub use content::{ContentRequest, ContentResponse, SearchParams};
pub use error::ErrorResponse;
