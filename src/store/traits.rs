//! ContentStore trait definition.

use async_trait::async_trait;
use uuid::Uuid;

use crate::models::{Content, ContentFields};
use crate::store::StoreError;

/// Trait for the durable content store.
///
/// The store is the authoritative copy of every record; the cache is a
/// disposable mirror rebuilt from it on demand. Implementations are
/// expected to be slow relative to the cache and to enforce their own
/// timeouts. Single-key operations must be atomic.
#[async_trait]
pub trait ContentStore: Send + Sync {
    /// Fetch a single record by id.
    async fn get(&self, id: Uuid) -> Result<Option<Content>, StoreError>;

    /// Fetch every record in the catalog.
    async fn list(&self) -> Result<Vec<Content>, StoreError>;

    /// Create a record, assigning a fresh unique id.
    async fn create(&self, fields: ContentFields) -> Result<Content, StoreError>;

    /// Replace every field of an existing record. Returns `None` when the
    /// id does not exist.
    async fn update(&self, id: Uuid, fields: ContentFields)
    -> Result<Option<Content>, StoreError>;

    /// Delete a record, returning its id, or `None` when absent.
    async fn delete(&self, id: Uuid) -> Result<Option<Uuid>, StoreError>;
}
