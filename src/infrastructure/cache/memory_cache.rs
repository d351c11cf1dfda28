//! In-process cache implementation.

use super::service::{CacheResult, CacheService};
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::debug;

/// Per-process cache backed by a hash map.
///
/// The single-host counterpart to [`super::RedisCache`]: entries live only
/// as long as the process and expire lazily on read. Suitable when the
/// engine is embedded in one host process, and for exercising cache
/// behavior in tests without a Redis instance.
pub struct MemoryCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    default_ttl: Duration,
}

struct CacheEntry {
    value: String,
    expires_at: Instant,
}

impl MemoryCache {
    /// Creates an empty cache with a default entry TTL.
    pub fn new(default_ttl_seconds: u64) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            default_ttl: Duration::from_secs(default_ttl_seconds),
        }
    }

    /// Number of live (unexpired) entries. Primarily for tests.
    pub async fn len(&self) -> usize {
        let now = Instant::now();
        self.entries
            .read()
            .await
            .values()
            .filter(|entry| entry.expires_at > now)
            .count()
    }

    /// Returns true when no live entries remain.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl CacheService for MemoryCache {
    async fn get_value(&self, key: &str) -> CacheResult<Option<String>> {
        let entries = self.entries.read().await;
        match entries.get(key) {
            Some(entry) if entry.expires_at > Instant::now() => {
                debug!("Cache HIT: {}", key);
                Ok(Some(entry.value.clone()))
            }
            _ => {
                debug!("Cache MISS: {}", key);
                Ok(None)
            }
        }
    }

    async fn set_value(&self, key: &str, value: &str, ttl: Option<usize>) -> CacheResult<()> {
        let ttl = ttl
            .map(|secs| Duration::from_secs(secs as u64))
            .unwrap_or(self.default_ttl);

        self.entries.write().await.insert(
            key.to_string(),
            CacheEntry {
                value: value.to_string(),
                expires_at: Instant::now() + ttl,
            },
        );
        Ok(())
    }

    async fn invalidate(&self, key: &str) -> CacheResult<()> {
        self.entries.write().await.remove(key);
        Ok(())
    }

    async fn flush_namespace(&self) -> CacheResult<()> {
        self.entries.write().await.clear();
        Ok(())
    }

    async fn health_check(&self) -> bool {
        true
    }
}
