//! Service layer for business logic operations.
//!
//! Services encapsulate the cache-aside protocol and coordinate between
//! the store and cache capabilities and the HTTP handlers.

mod content_service;
pub mod genres;

pub use content_service::ContentService;

use std::sync::Arc;

use crate::cache::ContentCache;
use crate::store::ContentStore;

/// Aggregates all services for convenient access.
///
/// This struct is designed to be used as Axum application state.
/// Cloning is cheap since the capabilities are shared through `Arc`.
#[derive(Clone)]
pub struct Services {
    pub contents: ContentService,
}

impl Services {
    /// Creates a new Services instance over the injected capabilities.
    pub fn new(store: Arc<dyn ContentStore>, cache: Arc<dyn ContentCache>) -> Self {
        Self {
            contents: ContentService::new(store, cache),
        }
    }
}
