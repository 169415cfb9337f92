//! HTTP API layer.
//!
//! - `doc` - OpenAPI document and tags
//! - `dto` - Request/response data transfer objects
//! - `handlers` - Request handlers grouped by domain
//! - `middleware` - Cross-cutting request middleware
//! - `routes` - Router assembly

pub mod doc;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;

pub use routes::create_router;
