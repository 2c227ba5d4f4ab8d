//! In-memory TTL cache for fetched pages, backed by `DashMap`.

use dashmap::DashMap;
use std::time::{Duration, Instant};

/// A single cached value with its expiration time.
struct CacheEntry {
    value: String,
    expires_at: Instant,
}

/// Page cache with time-to-live expiration.
///
/// Entries are stored as serialized JSON strings. Expired entries are
/// lazily evicted on the next `get` call for that key. Instances are
/// owned and passed explicitly: presenters that must not share cached
/// results get their own `PageCache`. `clear` is the invalidation
/// primitive used after a successful create.
pub struct PageCache {
    store: DashMap<String, CacheEntry>,
    ttl: Duration,
}

impl PageCache {
    /// Creates a new cache with the given time-to-live for entries.
    pub fn new(ttl: Duration) -> Self {
        Self {
            store: DashMap::new(),
            ttl,
        }
    }

    /// Returns the cached value for `key`, or `None` if missing or expired.
    pub fn get(&self, key: &str) -> Option<String> {
        let entry = self.store.get(key)?;
        if Instant::now() > entry.expires_at {
            drop(entry);
            self.store.remove(key);
            return None;
        }
        Some(entry.value.clone())
    }

    /// Inserts or overwrites a cache entry. The entry expires after the configured TTL.
    pub fn set(&self, key: String, value: String) {
        self.store.insert(
            key,
            CacheEntry {
                value,
                expires_at: Instant::now() + self.ttl,
            },
        );
    }

    /// Removes all entries, forcing the next read of every page to refetch.
    pub fn clear(&self) {
        self.store.clear();
    }
}
