//! Application state for Axum web framework.
//!
//! Contains shared services and resources that are accessible
//! across all request handlers.

use std::sync::Arc;

use crate::cache::ContentCache;
use crate::services::Services;
use crate::store::ContentStore;

/// Application state containing all shared services and resources.
///
/// This struct is designed to be used with Axum's State extractor.
/// Cloning is cheap since the capabilities are shared through `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// All business logic services
    pub services: Services,
    /// Direct access to the backing store, used by health probes
    pub store: Arc<dyn ContentStore>,
    /// Direct access to the cache, used by health probes
    pub cache: Arc<dyn ContentCache>,
}

impl AppState {
    /// Creates a new AppState over the injected store and cache.
    ///
    /// Initializes all services from the provided capabilities.
    ///
    /// # Example
    /// ```ignore
    /// let store: Arc<dyn ContentStore> = Arc::new(MemoryStore::default());
    /// let cache: Arc<dyn ContentCache> = Arc::new(MemoryCache::new());
    /// let state = AppState::new(store, cache);
    /// ```
    pub fn new(store: Arc<dyn ContentStore>, cache: Arc<dyn ContentCache>) -> Self {
        let services = Services::new(store.clone(), cache.clone());
        Self {
            services,
            store,
            cache,
        }
    }
}
