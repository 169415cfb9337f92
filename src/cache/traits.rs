//! ContentCache trait definition.

use async_trait::async_trait;
use uuid::Uuid;

use crate::cache::CacheError;
use crate::models::Content;

/// Trait for the in-process content cache.
///
/// The cache holds a transient, disposable copy of store records. A host
/// may evict any entry at any time; the read path tolerates that because a
/// miss always falls through to the store. Single-key operations must be
/// atomic; `set` is a last-write-wins upsert.
#[async_trait]
pub trait ContentCache: Send + Sync {
    /// Get a record from the cache.
    async fn get(&self, id: Uuid) -> Result<Option<Content>, CacheError>;

    /// Upsert a record into the cache.
    async fn set(&self, id: Uuid, content: Content) -> Result<(), CacheError>;

    /// Remove a record from the cache.
    async fn remove(&self, id: Uuid) -> Result<(), CacheError>;
}
