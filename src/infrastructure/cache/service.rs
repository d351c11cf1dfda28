//! Cache service trait and error types.

use async_trait::async_trait;
use std::fmt;

/// Errors that can occur during cache operations.
#[derive(Debug)]
pub enum CacheError {
    ConnectionError(String),
    OperationError(String),
}

impl fmt::Display for CacheError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::ConnectionError(e) => write!(f, "Cache connection error: {}", e),
            Self::OperationError(e) => write!(f, "Cache operation error: {}", e),
        }
    }
}

impl std::error::Error for CacheError {}

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Trait for caching computed fee results and loaded settings.
///
/// Implementations must be thread-safe and handle errors gracefully without
/// disrupting checkout (cache failures degrade to recomputing the fee or
/// re-reading the settings store).
///
/// # Implementations
///
/// - [`crate::infrastructure::cache::RedisCache`] - Redis-backed cache with TTL support
/// - [`crate::infrastructure::cache::NullCache`] - No-op implementation for disabled caching
#[async_trait]
pub trait CacheService: Send + Sync {
    /// Retrieves a cached value by key.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(value))` on cache hit
    /// - `Ok(None)` on cache miss or error (fail-open behavior)
    ///
    /// # Errors
    ///
    /// Should not return errors in production implementations. Errors are
    /// logged and treated as cache misses.
    async fn get_value(&self, key: &str) -> CacheResult<Option<String>>;

    /// Stores a value in cache with optional TTL.
    ///
    /// # Arguments
    ///
    /// - `key` - The cache key (namespaced by the caller)
    /// - `value` - Serialized payload to cache
    /// - `ttl_seconds` - Optional TTL in seconds (implementation-specific default if None)
    ///
    /// # Errors
    ///
    /// Should not propagate errors to callers. Implementations should log
    /// errors and return `Ok(())` to avoid disrupting the request flow.
    async fn set_value(&self, key: &str, value: &str, ttl_seconds: Option<usize>)
    -> CacheResult<()>;

    /// Removes a single cached entry.
    ///
    /// Used when settings are saved and the cached configuration goes stale.
    ///
    /// # Errors
    ///
    /// Should not propagate errors to callers.
    async fn invalidate(&self, key: &str) -> CacheResult<()>;

    /// Removes every entry under the crate's namespace.
    ///
    /// Invoked when the cart changes, since any cached fee result may be
    /// stale afterwards.
    ///
    /// # Errors
    ///
    /// Should not propagate errors to callers.
    async fn flush_namespace(&self) -> CacheResult<()>;

    /// Checks if the cache backend is healthy.
    async fn health_check(&self) -> bool;
}
