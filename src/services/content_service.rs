//! Content service implementing the cache-aside consistency protocol.
//!
//! Every operation coordinates the authoritative store with the
//! disposable cache: reads consult the cache first and warm it from the
//! store on a miss, writes go to the store first and mirror into the
//! cache on success, and deletes clear the cache before touching the
//! store. Failed store or cache calls are never retried here; retry
//! policy, if any, belongs to the capability implementations.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use crate::cache::ContentCache;
use crate::error::{AppError, AppResult};
use crate::models::{Content, ContentFields};
use crate::services::genres;
use crate::store::ContentStore;

/// Service orchestrating the store and cache for content operations.
///
/// Both capabilities are shared by reference, so cloning is cheap. There
/// is no cross-operation transaction and no per-id locking: concurrent
/// writes to the same id interleave and the last store write wins. A get
/// racing a delete between its cache-removal and store-removal can
/// briefly repopulate a stale cache entry; that window is accepted in
/// exchange for lock-free reads, and the entry is overwritten or evicted
/// by the next write.
#[derive(Clone)]
pub struct ContentService {
    store: Arc<dyn ContentStore>,
    cache: Arc<dyn ContentCache>,
}

impl ContentService {
    /// Creates a new ContentService over the given capabilities.
    pub fn new(store: Arc<dyn ContentStore>, cache: Arc<dyn ContentCache>) -> Self {
        Self { store, cache }
    }

    /// Lists the whole catalog from the store, warming the cache with
    /// every entry so subsequent point reads are cheap.
    ///
    /// An empty catalog is a valid, empty result.
    pub async fn list(&self) -> AppResult<Vec<Content>> {
        let contents = self.store.list().await.map_err(store_err("list contents"))?;

        for content in &contents {
            self.cache
                .set(content.id, content.clone())
                .await
                .map_err(cache_err("warm content"))?;
        }

        info!(count = contents.len(), "Contents listed");
        Ok(contents)
    }

    /// Filters the catalog by optional title substring (case-sensitive)
    /// and exact, as-stored genre membership. Filters compose with AND.
    ///
    /// Surviving entries warm the cache. An empty result is not an error.
    pub async fn search(
        &self,
        title: Option<&str>,
        genre: Option<&str>,
    ) -> AppResult<Vec<Content>> {
        let mut contents = self
            .store
            .list()
            .await
            .map_err(store_err("search contents"))?;

        if let Some(title) = title.filter(|t| !t.is_empty()) {
            contents.retain(|content| content.title.contains(title));
        }
        if let Some(genre) = genre.filter(|g| !g.is_empty()) {
            contents.retain(|content| content.genre_list.iter().any(|g| g == genre));
        }

        for content in &contents {
            self.cache
                .set(content.id, content.clone())
                .await
                .map_err(cache_err("warm content"))?;
        }

        info!(count = contents.len(), "Contents searched");
        Ok(contents)
    }

    /// Fetches one record, cache first.
    ///
    /// A cache hit returns immediately without touching the store. On a
    /// miss the store is the fallback; a store hit warms the cache, a
    /// store miss is NotFound and is never cached.
    pub async fn get(&self, id: Uuid) -> AppResult<Content> {
        if let Some(content) = self.cache.get(id).await.map_err(cache_err("get content"))? {
            info!(%id, "Content served from cache");
            return Ok(content);
        }

        let Some(content) = self.store.get(id).await.map_err(store_err("get content"))? else {
            info!(%id, "Content not found");
            return Err(AppError::NotFound { id });
        };

        self.cache
            .set(id, content.clone())
            .await
            .map_err(cache_err("warm content"))?;

        info!(%id, "Content served from store");
        Ok(content)
    }

    /// Creates a record; the store assigns the id. Writes through to the
    /// cache on success.
    pub async fn create(&self, fields: ContentFields) -> AppResult<Content> {
        let content = self
            .store
            .create(fields)
            .await
            .map_err(store_err("create content"))?;

        self.cache
            .set(content.id, content.clone())
            .await
            .map_err(cache_err("cache created content"))?;

        info!(id = %content.id, "Content created");
        Ok(content)
    }

    /// Replaces every field of an existing record.
    ///
    /// The store is the authority: the update never merges through the
    /// cache's current value. On success the cache is overwritten; when
    /// the id is unknown the cache is left untouched.
    pub async fn update(&self, id: Uuid, fields: ContentFields) -> AppResult<Content> {
        let Some(content) = self
            .store
            .update(id, fields)
            .await
            .map_err(store_err("update content"))?
        else {
            info!(%id, "Content not found for update");
            return Err(AppError::NotFound { id });
        };

        self.cache
            .set(id, content.clone())
            .await
            .map_err(cache_err("cache updated content"))?;

        info!(%id, "Content updated");
        Ok(content)
    }

    /// Deletes a record, returning its id.
    ///
    /// The cache entry is removed before the store delete so a concurrent
    /// reader cannot keep serving a value the store is about to discard.
    /// A store miss surfaces NotFound regardless of whether a cache entry
    /// existed.
    pub async fn delete(&self, id: Uuid) -> AppResult<Uuid> {
        self.cache
            .remove(id)
            .await
            .map_err(cache_err("evict content"))?;

        let Some(deleted) = self
            .store
            .delete(id)
            .await
            .map_err(store_err("delete content"))?
        else {
            info!(%id, "Content not found for delete");
            return Err(AppError::NotFound { id });
        };

        info!(%id, "Content deleted");
        Ok(deleted)
    }

    /// Appends genres to a record, rejecting the whole batch when any tag
    /// is already present (case-insensitively).
    ///
    /// The rejection lists every offending name so the caller can fix the
    /// request in one round trip; nothing is partially applied. Additions
    /// keep their input order and land after the existing tags.
    pub async fn add_genres(&self, id: Uuid, incoming: Vec<String>) -> AppResult<Content> {
        let content = self.resolve(id).await?;

        let (additions, duplicates) = genres::partition(&content.genre_list, &incoming);
        if !duplicates.is_empty() {
            warn!(%id, duplicates = ?duplicates, "Rejected duplicate genres");
            return Err(AppError::DuplicateGenres { genres: duplicates });
        }

        let mut merged = content.genre_list.clone();
        merged.extend(additions);

        let updated = self
            .update(id, content.fields_with_genres(merged))
            .await?;

        info!(%id, "Genres added");
        Ok(updated)
    }

    /// Removes every case-insensitive match of the requested tags.
    ///
    /// When nothing matches, the operation fails with NoGenresRemoved:
    /// having nothing to do is a caller mistake here, not a silent
    /// success. Surviving tags keep their relative order.
    pub async fn remove_genres(&self, id: Uuid, requested: Vec<String>) -> AppResult<Content> {
        let content = self.resolve(id).await?;

        let (remaining, matched) = genres::remove_matches(&content.genre_list, &requested);
        if matched.is_empty() {
            warn!(%id, "No genres to remove");
            return Err(AppError::NoGenresRemoved);
        }

        let updated = self
            .update(id, content.fields_with_genres(remaining))
            .await?;

        info!(%id, "Genres removed");
        Ok(updated)
    }

    /// Resolves the base record for a genre mutation: cache first, store
    /// fallback, same as `get` but without warming the cache (the write
    /// path refreshes it right after).
    async fn resolve(&self, id: Uuid) -> AppResult<Content> {
        if let Some(content) = self.cache.get(id).await.map_err(cache_err("get content"))? {
            return Ok(content);
        }

        self.store
            .get(id)
            .await
            .map_err(store_err("get content"))?
            .ok_or(AppError::NotFound { id })
    }
}

fn store_err(operation: &str) -> impl FnOnce(crate::store::StoreError) -> AppError + '_ {
    move |source| AppError::Store {
        operation: operation.to_string(),
        source,
    }
}

fn cache_err(operation: &str) -> impl FnOnce(crate::cache::CacheError) -> AppError + '_ {
    move |source| AppError::Cache {
        operation: operation.to_string(),
        source,
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use jiff::Timestamp;

    use super::*;
    use crate::cache::MemoryCache;
    use crate::store::{MemoryStore, StoreError};

    /// Store wrapper counting point reads so tests can prove the cache
    /// was (or was not) consulted.
    struct CountingStore {
        inner: MemoryStore,
        gets: AtomicUsize,
        lists: AtomicUsize,
    }

    impl CountingStore {
        fn new() -> Self {
            Self {
                inner: MemoryStore::default(),
                gets: AtomicUsize::new(0),
                lists: AtomicUsize::new(0),
            }
        }

        fn get_count(&self) -> usize {
            self.gets.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ContentStore for CountingStore {
        async fn get(&self, id: Uuid) -> Result<Option<Content>, StoreError> {
            self.gets.fetch_add(1, Ordering::SeqCst);
            self.inner.get(id).await
        }

        async fn list(&self) -> Result<Vec<Content>, StoreError> {
            self.lists.fetch_add(1, Ordering::SeqCst);
            self.inner.list().await
        }

        async fn create(&self, fields: ContentFields) -> Result<Content, StoreError> {
            self.inner.create(fields).await
        }

        async fn update(
            &self,
            id: Uuid,
            fields: ContentFields,
        ) -> Result<Option<Content>, StoreError> {
            self.inner.update(id, fields).await
        }

        async fn delete(&self, id: Uuid) -> Result<Option<Uuid>, StoreError> {
            self.inner.delete(id).await
        }
    }

    /// Store whose every call fails, for exercising failure propagation.
    struct FailingStore;

    #[async_trait]
    impl ContentStore for FailingStore {
        async fn get(&self, _id: Uuid) -> Result<Option<Content>, StoreError> {
            Err(StoreError::Connection("store is down".to_string()))
        }

        async fn list(&self) -> Result<Vec<Content>, StoreError> {
            Err(StoreError::Connection("store is down".to_string()))
        }

        async fn create(&self, _fields: ContentFields) -> Result<Content, StoreError> {
            Err(StoreError::Connection("store is down".to_string()))
        }

        async fn update(
            &self,
            _id: Uuid,
            _fields: ContentFields,
        ) -> Result<Option<Content>, StoreError> {
            Err(StoreError::Connection("store is down".to_string()))
        }

        async fn delete(&self, _id: Uuid) -> Result<Option<Uuid>, StoreError> {
            Err(StoreError::Connection("store is down".to_string()))
        }
    }

    fn fields(title: &str, genres: &[&str]) -> ContentFields {
        let now = Timestamp::now();
        ContentFields {
            title: title.to_string(),
            sub_title: format!("{title} subtitle"),
            description: format!("{title} description"),
            image_url: "sample-image-url".to_string(),
            duration: 60,
            start_time: now,
            end_time: now,
            genre_list: genres.iter().map(|g| g.to_string()).collect(),
        }
    }

    fn service_with_counting() -> (ContentService, Arc<CountingStore>, Arc<MemoryCache>) {
        let store = Arc::new(CountingStore::new());
        let cache = Arc::new(MemoryCache::new());
        let service = ContentService::new(store.clone(), cache.clone());
        (service, store, cache)
    }

    #[tokio::test]
    async fn get_after_create_is_a_cache_hit() {
        let (service, store, _) = service_with_counting();

        let created = service
            .create(fields("Sample Content 1", &["Genre1"]))
            .await
            .unwrap();

        let fetched = service.get(created.id).await.unwrap();

        assert_eq!(fetched, created);
        assert_eq!(store.get_count(), 0, "cache hit must not touch the store");
    }

    #[tokio::test]
    async fn get_miss_falls_through_and_warms_the_cache() {
        let (service, store, cache) = service_with_counting();
        let created = service.create(fields("a", &[])).await.unwrap();
        cache.remove(created.id).await.unwrap();

        let fetched = service.get(created.id).await.unwrap();
        assert_eq!(fetched, created);
        assert_eq!(store.get_count(), 1);

        // Warmed: a second get stays off the store.
        service.get(created.id).await.unwrap();
        assert_eq!(store.get_count(), 1);
    }

    #[tokio::test]
    async fn get_unknown_id_is_not_found_and_not_cached() {
        let (service, store, cache) = service_with_counting();
        let id = Uuid::new_v4();

        assert!(matches!(
            service.get(id).await,
            Err(AppError::NotFound { id: missing }) if missing == id
        ));
        assert!(cache.get(id).await.unwrap().is_none());
        assert_eq!(store.get_count(), 1);
    }

    #[tokio::test]
    async fn list_warms_the_cache_for_every_entry() {
        let (service, store, _) = service_with_counting();
        let a = service.create(fields("a", &[])).await.unwrap();
        let b = service.create(fields("b", &[])).await.unwrap();

        let listed = service.list().await.unwrap();
        assert_eq!(listed.len(), 2);

        service.get(a.id).await.unwrap();
        service.get(b.id).await.unwrap();
        assert_eq!(store.get_count(), 0);
    }

    #[tokio::test]
    async fn list_of_empty_catalog_is_ok_and_empty() {
        let (service, _, _) = service_with_counting();
        assert!(service.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn search_composes_title_and_genre_filters() {
        let (service, _, _) = service_with_counting();
        service
            .create(fields("Sample Content 1", &["Genre1", "Genre2"]))
            .await
            .unwrap();
        service
            .create(fields("Sample Content 2", &["Genre3", "Genre4"]))
            .await
            .unwrap();

        let hits = service
            .search(Some("Sample Content 1"), Some("Genre1"))
            .await
            .unwrap();

        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Sample Content 1");
        assert!(hits[0].genre_list.contains(&"Genre1".to_string()));
    }

    #[tokio::test]
    async fn search_title_filter_is_case_sensitive_substring() {
        let (service, _, _) = service_with_counting();
        service.create(fields("Sample Content", &[])).await.unwrap();

        assert_eq!(service.search(Some("Content"), None).await.unwrap().len(), 1);
        assert!(service.search(Some("content"), None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn search_genre_filter_is_exact_as_stored() {
        let (service, _, _) = service_with_counting();
        service.create(fields("a", &["Genre1"])).await.unwrap();

        assert_eq!(service.search(None, Some("Genre1")).await.unwrap().len(), 1);
        assert!(service.search(None, Some("genre1")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn search_with_no_match_is_an_empty_ok() {
        let (service, _, _) = service_with_counting();
        service.create(fields("a", &[])).await.unwrap();

        assert!(service.search(Some("zzz"), None).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_writes_through_to_the_cache() {
        let (service, _, cache) = service_with_counting();
        let created = service.create(fields("before", &[])).await.unwrap();

        let updated = service
            .update(created.id, fields("after", &[]))
            .await
            .unwrap();

        assert_eq!(updated.title, "after");
        let cached = cache.get(created.id).await.unwrap().unwrap();
        assert_eq!(cached, updated);
    }

    #[tokio::test]
    async fn update_unknown_id_leaves_the_cache_untouched() {
        let (service, _, cache) = service_with_counting();
        let id = Uuid::new_v4();

        assert!(matches!(
            service.update(id, fields("x", &[])).await,
            Err(AppError::NotFound { .. })
        ));
        assert!(cache.get(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn delete_clears_the_cache_and_subsequent_get_misses() {
        let (service, _, cache) = service_with_counting();
        let created = service.create(fields("a", &[])).await.unwrap();

        let deleted = service.delete(created.id).await.unwrap();

        assert_eq!(deleted, created.id);
        assert!(cache.get(created.id).await.unwrap().is_none());
        assert!(matches!(
            service.get(created.id).await,
            Err(AppError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn delete_unknown_id_is_not_found_even_with_a_cache_entry() {
        let (service, _, cache) = service_with_counting();
        let id = Uuid::new_v4();
        let orphan = fields("orphan", &[]).into_content(id);
        cache.set(id, orphan).await.unwrap();

        assert!(matches!(
            service.delete(id).await,
            Err(AppError::NotFound { .. })
        ));
        // The stale entry was still evicted before the store was asked.
        assert!(cache.get(id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn add_genres_rejects_the_whole_batch_on_any_duplicate() {
        let (service, _, _) = service_with_counting();
        let created = service
            .create(fields("Sample Content 1", &["Genre1", "Genre2"]))
            .await
            .unwrap();

        let result = service
            .add_genres(created.id, vec!["Genre1".to_string(), "Genre3".to_string()])
            .await;

        match result {
            Err(AppError::DuplicateGenres { genres }) => {
                assert_eq!(genres, vec!["Genre1".to_string()]);
            }
            other => panic!("expected DuplicateGenres, got {other:?}"),
        }

        // Nothing partially applied: stored genres are unchanged.
        let current = service.get(created.id).await.unwrap();
        assert_eq!(
            current.genre_list,
            vec!["Genre1".to_string(), "Genre2".to_string()]
        );
    }

    #[tokio::test]
    async fn add_genres_appends_novel_tags_in_input_order() {
        let (service, store, cache) = service_with_counting();
        let created = service
            .create(fields("a", &["Genre1", "Genre2"]))
            .await
            .unwrap();

        let updated = service
            .add_genres(created.id, vec!["Genre3".to_string(), "Genre4".to_string()])
            .await
            .unwrap();

        let expected = vec![
            "Genre1".to_string(),
            "Genre2".to_string(),
            "Genre3".to_string(),
            "Genre4".to_string(),
        ];
        assert_eq!(updated.genre_list, expected);

        // The merged list is visible from both cache and store.
        assert_eq!(
            cache.get(created.id).await.unwrap().unwrap().genre_list,
            expected
        );
        assert_eq!(
            store.inner.get(created.id).await.unwrap().unwrap().genre_list,
            expected
        );
    }

    #[tokio::test]
    async fn add_genres_unknown_id_is_not_found() {
        let (service, _, _) = service_with_counting();

        assert!(matches!(
            service
                .add_genres(Uuid::new_v4(), vec!["Genre1".to_string()])
                .await,
            Err(AppError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn remove_genres_with_no_match_fails_and_changes_nothing() {
        let (service, _, _) = service_with_counting();
        let created = service.create(fields("a", &["Genre1"])).await.unwrap();

        assert!(matches!(
            service
                .remove_genres(created.id, vec!["Genre9".to_string()])
                .await,
            Err(AppError::NoGenresRemoved)
        ));

        let current = service.get(created.id).await.unwrap();
        assert_eq!(current.genre_list, vec!["Genre1".to_string()]);
    }

    #[tokio::test]
    async fn remove_genres_drops_only_matches_preserving_order() {
        let (service, _, _) = service_with_counting();
        let created = service
            .create(fields("a", &["Genre1", "Genre2", "Genre3"]))
            .await
            .unwrap();

        let updated = service
            .remove_genres(created.id, vec!["genre2".to_string(), "Genre9".to_string()])
            .await
            .unwrap();

        assert_eq!(
            updated.genre_list,
            vec!["Genre1".to_string(), "Genre3".to_string()]
        );
    }

    #[tokio::test]
    async fn genre_round_trip_scenario() {
        let (service, _, _) = service_with_counting();
        let created = service
            .create(fields("Sample Content 1", &["Genre1", "Genre2"]))
            .await
            .unwrap();

        // Mixed batch: rejected wholesale, duplicates reported exactly.
        let rejection = service
            .add_genres(created.id, vec!["Genre1".to_string(), "Genre3".to_string()])
            .await;
        match rejection {
            Err(AppError::DuplicateGenres { genres }) => {
                assert_eq!(genres, vec!["Genre1".to_string()]);
            }
            other => panic!("expected DuplicateGenres, got {other:?}"),
        }
        assert_eq!(
            service.get(created.id).await.unwrap().genre_list,
            vec!["Genre1".to_string(), "Genre2".to_string()]
        );

        // All-novel batch succeeds.
        let updated = service
            .add_genres(created.id, vec!["Genre3".to_string()])
            .await
            .unwrap();
        assert_eq!(
            updated.genre_list,
            vec![
                "Genre1".to_string(),
                "Genre2".to_string(),
                "Genre3".to_string()
            ]
        );

        // Lowercase removal matches case-insensitively.
        let reduced = service
            .remove_genres(created.id, vec!["genre1".to_string()])
            .await
            .unwrap();
        assert_eq!(
            reduced.genre_list,
            vec!["Genre2".to_string(), "Genre3".to_string()]
        );
    }

    #[tokio::test]
    async fn store_failures_surface_as_store_errors() {
        let service = ContentService::new(Arc::new(FailingStore), Arc::new(MemoryCache::new()));

        assert!(matches!(service.list().await, Err(AppError::Store { .. })));
        assert!(matches!(
            service.create(fields("a", &[])).await,
            Err(AppError::Store { .. })
        ));
        assert!(matches!(
            service.get(Uuid::new_v4()).await,
            Err(AppError::Store { .. })
        ));
        assert!(matches!(
            service.delete(Uuid::new_v4()).await,
            Err(AppError::Store { .. })
        ));
    }

    #[tokio::test]
    async fn genre_mutations_resolve_through_the_cache_first() {
        // A record only present in the cache can still anchor a genre
        // mutation; the store is consulted for the update itself.
        let (service, store, cache) = service_with_counting();
        let created = service.create(fields("a", &["Genre1"])).await.unwrap();

        service
            .add_genres(created.id, vec!["Genre2".to_string()])
            .await
            .unwrap();

        assert_eq!(store.get_count(), 0, "base record must come from cache");
        assert_eq!(
            cache.get(created.id).await.unwrap().unwrap().genre_list,
            vec!["Genre1".to_string(), "Genre2".to_string()]
        );
    }
}
