//! Memory cache implementation backed by a concurrent map.

use async_trait::async_trait;
use dashmap::DashMap;
use uuid::Uuid;

use crate::cache::{CacheError, ContentCache};
use crate::models::Content;

/// In-memory cache with no expiry and no size bound.
///
/// Eviction, if any, is the host's concern; the consistency protocol only
/// assumes atomic single-key get/set/remove.
pub struct MemoryCache {
    entries: DashMap<Uuid, Content>,
}

impl MemoryCache {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }
}

impl Default for MemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ContentCache for MemoryCache {
    async fn get(&self, id: Uuid) -> Result<Option<Content>, CacheError> {
        Ok(self.entries.get(&id).map(|entry| entry.value().clone()))
    }

    async fn set(&self, id: Uuid, content: Content) -> Result<(), CacheError> {
        self.entries.insert(id, content);
        Ok(())
    }

    async fn remove(&self, id: Uuid) -> Result<(), CacheError> {
        self.entries.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use super::*;
    use crate::models::ContentFields;

    fn sample(id: Uuid, title: &str) -> Content {
        let now = Timestamp::now();
        ContentFields {
            title: title.to_string(),
            sub_title: String::new(),
            description: String::new(),
            image_url: String::new(),
            duration: 60,
            start_time: now,
            end_time: now,
            genre_list: vec![],
        }
        .into_content(id)
    }

    #[tokio::test]
    async fn get_misses_on_unknown_id() {
        let cache = MemoryCache::new();
        assert!(cache.get(Uuid::new_v4()).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn set_is_last_write_wins() {
        let cache = MemoryCache::new();
        let id = Uuid::new_v4();

        cache.set(id, sample(id, "first")).await.unwrap();
        cache.set(id, sample(id, "second")).await.unwrap();

        assert_eq!(cache.get(id).await.unwrap().unwrap().title, "second");
    }

    #[tokio::test]
    async fn remove_drops_the_entry() {
        let cache = MemoryCache::new();
        let id = Uuid::new_v4();

        cache.set(id, sample(id, "a")).await.unwrap();
        cache.remove(id).await.unwrap();

        assert!(cache.get(id).await.unwrap().is_none());
    }
}
