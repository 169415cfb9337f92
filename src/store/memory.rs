//! In-memory reference store with configurable artificial latency.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config::settings::StoreConfig;
use crate::models::{Content, ContentFields};
use crate::store::{ContentStore, StoreError};

/// Reference store keeping the catalog in process memory.
///
/// Every operation sleeps for the configured latency before touching the
/// map, standing in for a remote database so the cache actually earns its
/// keep during manual testing.
pub struct MemoryStore {
    records: RwLock<HashMap<Uuid, Content>>,
    latency: Duration,
}

impl MemoryStore {
    pub fn new(config: &StoreConfig) -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            latency: Duration::from_millis(config.latency_ms),
        }
    }

    async fn simulate_latency(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
            latency: Duration::ZERO,
        }
    }
}

#[async_trait]
impl ContentStore for MemoryStore {
    async fn get(&self, id: Uuid) -> Result<Option<Content>, StoreError> {
        self.simulate_latency().await;
        let records = self.records.read().await;
        Ok(records.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Content>, StoreError> {
        self.simulate_latency().await;
        let records = self.records.read().await;
        Ok(records.values().cloned().collect())
    }

    async fn create(&self, fields: ContentFields) -> Result<Content, StoreError> {
        self.simulate_latency().await;
        let content = fields.into_content(Uuid::new_v4());
        let mut records = self.records.write().await;
        records.insert(content.id, content.clone());
        Ok(content)
    }

    async fn update(
        &self,
        id: Uuid,
        fields: ContentFields,
    ) -> Result<Option<Content>, StoreError> {
        self.simulate_latency().await;
        let mut records = self.records.write().await;
        if !records.contains_key(&id) {
            return Ok(None);
        }
        let content = fields.into_content(id);
        records.insert(id, content.clone());
        Ok(Some(content))
    }

    async fn delete(&self, id: Uuid) -> Result<Option<Uuid>, StoreError> {
        self.simulate_latency().await;
        let mut records = self.records.write().await;
        Ok(records.remove(&id).map(|removed| removed.id))
    }
}
