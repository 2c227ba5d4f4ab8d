//! Caching wrapper around the API client.

use items_api::types::{Item, ItemDraft, Page};
use items_api::{Client, PageQuery};

use crate::cache::PageCache;
use crate::error::ItemsError;
use crate::validation;

/// API client wrapper that adds an in-memory page cache.
///
/// Cache hits bypass the network entirely, which is what makes selecting
/// an already-fetched page free. A successful create clears the cache:
/// that is the invalidation signal the creation side sends, and the only
/// coupling between it and the listing presenters.
pub struct CachedClient {
    inner: Client,
    cache: PageCache,
}

impl CachedClient {
    /// Creates a cached client using the default items server URL.
    pub fn new(cache: PageCache) -> Self {
        Self {
            inner: Client::new(),
            cache,
        }
    }

    /// Wraps an already-configured API client (custom base URL or
    /// response shape).
    pub fn with_client(inner: Client, cache: PageCache) -> Self {
        Self { inner, cache }
    }

    /// Fetches one page of items, serving cached results when available.
    pub async fn get_page(&self, page: i64, limit: i64) -> Result<Page<Item>, ItemsError> {
        let page = validation::validate_page(page)?;
        let limit = validation::validate_limit(limit)?;
        let cache_key = format!("items:p{}:l{}", page, limit);

        if let Some(cached) = self.cache.get(&cache_key) {
            let resp: Page<Item> = serde_json::from_str(&cached)?;
            return Ok(resp);
        }

        let query = PageQuery::default().with_page(page).with_limit(limit);
        let resp = self.inner.get_items(&query).await?;
        if let Ok(json) = serde_json::to_string(&resp) {
            self.cache.set(cache_key, json);
        }
        Ok(resp)
    }

    /// Creates an item and invalidates all cached pages so the new
    /// record is visible on the next fetch.
    pub async fn create_item(&self, draft: &ItemDraft) -> Result<Item, ItemsError> {
        let item = self.inner.create_item(draft).await?;
        self.cache.clear();
        Ok(item)
    }

    /// Removes all entries from the cache.
    pub fn clear_cache(&self) {
        self.cache.clear();
    }
}
