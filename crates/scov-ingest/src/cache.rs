//! Content-addressed scenario cache using moka
//!
//! Parsed scenario lists are stored by the hash of the artifact text and the
//! parser that produced them, so re-analysing unchanged text is free.

use crate::artifact::ContentHash;
use moka::future::Cache;
use scov_core::Scenario;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// Cache key: artifact content plus the format it was parsed as
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CacheKey {
    hash: ContentHash,
    format: &'static str,
}

impl CacheKey {
    /// Create key for content parsed with the named format
    #[inline]
    #[must_use]
    pub fn new(hash: ContentHash, format: &'static str) -> Self {
        Self { hash, format }
    }

    /// Get content hash
    #[inline]
    #[must_use]
    pub fn hash(&self) -> &ContentHash {
        &self.hash
    }

    /// Get format name
    #[inline]
    #[must_use]
    pub fn format(&self) -> &'static str {
        self.format
    }
}

/// Shared cache of parsed scenario lists
#[derive(Debug, Clone)]
pub struct ScenarioCache {
    inner: Cache<CacheKey, Arc<Vec<Scenario>>>,
}

impl ScenarioCache {
    /// Create new cache with max capacity
    #[inline]
    #[must_use]
    pub fn new(max_capacity: u64) -> Self {
        Self {
            inner: Cache::new(max_capacity),
        }
    }

    /// Create cache with time-based expiration
    #[inline]
    #[must_use]
    pub fn with_ttl(max_capacity: u64, ttl: Duration) -> Self {
        Self {
            inner: Cache::builder()
                .max_capacity(max_capacity)
                .time_to_live(ttl)
                .build(),
        }
    }

    /// Insert scenario list
    #[inline]
    pub async fn insert(&self, key: CacheKey, scenarios: Arc<Vec<Scenario>>) {
        self.inner.insert(key, scenarios).await;
    }

    /// Get scenario list
    #[inline]
    pub async fn get(&self, key: &CacheKey) -> Option<Arc<Vec<Scenario>>> {
        self.inner.get(key).await
    }

    /// Get cached list or compute and insert it
    ///
    /// Failed computations are not cached.
    pub async fn try_get_or_insert_with<E, F, Fut>(
        &self,
        key: CacheKey,
        f: F,
    ) -> Result<Arc<Vec<Scenario>>, E>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<Vec<Scenario>, E>>,
    {
        if let Some(cached) = self.get(&key).await {
            tracing::debug!(hash = %key.hash().short(), format = key.format(), "scenario cache hit");
            return Ok(cached);
        }

        let scenarios = Arc::new(f().await?);
        self.insert(key, Arc::clone(&scenarios)).await;

        Ok(scenarios)
    }

    /// Invalidate cache entry
    #[inline]
    pub async fn invalidate(&self, key: &CacheKey) {
        self.inner.invalidate(key).await;
    }

    /// Invalidate all entries
    #[inline]
    pub fn invalidate_all(&self) {
        self.inner.invalidate_all();
    }

    /// Get approximate entry count
    #[inline]
    #[must_use]
    pub fn entry_count(&self) -> u64 {
        self.inner.entry_count()
    }
}

impl Default for ScenarioCache {
    /// Create cache with default capacity (1,024 entries)
    fn default() -> Self {
        Self::new(1024)
    }
}
