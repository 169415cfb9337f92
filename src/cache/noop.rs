//! NoOp cache implementation.
//!
//! Used when caching is disabled. All operations are no-ops; every read
//! misses and falls through to the store.

use async_trait::async_trait;
use uuid::Uuid;

use crate::cache::{CacheError, ContentCache};
use crate::models::Content;

/// A no-operation cache that doesn't store anything.
///
/// Used when `cache.enabled = false` in configuration.
pub struct NoOpCache;

impl NoOpCache {
    pub fn new() -> Self {
        Self
    }
}

impl Default for NoOpCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentCache for NoOpCache {
    async fn get(&self, _id: Uuid) -> Result<Option<Content>, CacheError> {
        Ok(None)
    }

    async fn set(&self, _id: Uuid, _content: Content) -> Result<(), CacheError> {
        Ok(())
    }

    async fn remove(&self, _id: Uuid) -> Result<(), CacheError> {
        Ok(())
    }
}
