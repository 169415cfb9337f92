//! HTTP request handlers organized by domain.
//!
//! - `contents` - Content catalog CRUD, search and genre management
//! - `health` - Health check and probe endpoints

pub mod contents;
pub mod health;
