//! Handling fee application service.

use std::sync::Arc;

use rust_decimal::Decimal;
use tracing::{debug, error, warn};

use crate::domain::calculator::compute_handling_fee;
use crate::domain::entities::FeeConfiguration;
use crate::domain::repositories::{CartProvider, SettingsRepository};
use crate::error::FeeError;
use crate::infrastructure::cache::CacheService;
use crate::utils::cache_key::{OPTIONS_CACHE_KEY, fee_cache_key};

/// Service the host's shipping-rate hook calls on every rate calculation.
///
/// Wraps the pure calculator with snapshot retrieval and a fail-open result
/// cache. The public entry point never fails: this sits in a
/// revenue-critical checkout path, so any internal error is logged and the
/// unmodified cost is returned.
pub struct FeeService<S: SettingsRepository, C: CartProvider> {
    settings_repository: Arc<S>,
    cart_provider: Arc<C>,
    cache: Arc<dyn CacheService>,
    /// TTL for cached fee results, seconds.
    result_ttl: usize,
    /// TTL for the cached configuration, seconds.
    options_ttl: usize,
}

impl<S: SettingsRepository, C: CartProvider> FeeService<S, C> {
    /// Creates a new fee service.
    ///
    /// `result_ttl_seconds` bounds how long a computed fee may be served
    /// from cache; `options_ttl_seconds` does the same for the loaded
    /// configuration. Both come from [`crate::config::Config`] in a wired
    /// deployment.
    pub fn new(
        settings_repository: Arc<S>,
        cart_provider: Arc<C>,
        cache: Arc<dyn CacheService>,
        result_ttl_seconds: u64,
        options_ttl_seconds: u64,
    ) -> Self {
        Self {
            settings_repository,
            cart_provider,
            cache,
            result_ttl: result_ttl_seconds as usize,
            options_ttl: options_ttl_seconds as usize,
        }
    }

    /// Applies handling fees to a shipping cost.
    ///
    /// # Arguments
    ///
    /// - `cost` - The base shipping cost to adjust
    /// - `method_id` - The shipping method's identifier, used only for
    ///   result cache keying; an empty id is treated as `default`
    ///
    /// This never fails and never panics. Any error while materializing the
    /// cart or configuration is logged and `cost` is returned unchanged.
    pub async fn apply_handling_fees(&self, cost: Decimal, method_id: &str) -> Decimal {
        match self.try_apply(cost, method_id).await {
            Ok(adjusted) => adjusted,
            Err(e) => {
                error!("Handling fee calculation failed, passing cost through: {}", e);
                cost
            }
        }
    }

    async fn try_apply(&self, cost: Decimal, method_id: &str) -> Result<Decimal, FeeError> {
        let items = self.cart_provider.line_items().await?;
        if items.is_empty() {
            return Ok(cost);
        }

        let cache_key = fee_cache_key(&items, method_id);
        if let Ok(Some(cached)) = self.cache.get_value(&cache_key).await {
            match cached.parse::<Decimal>() {
                Ok(adjusted) => return Ok(adjusted),
                Err(e) => warn!("Discarding unreadable cached fee {}: {}", cache_key, e),
            }
        }

        let config = self.configuration().await?;
        if config.is_empty() {
            return Ok(cost);
        }

        let adjusted = compute_handling_fee(cost, &items, &config);

        // Only cache when the cost was actually modified.
        if adjusted != cost {
            debug!("Applied handling fees: {} -> {}", cost, adjusted);
            let _ = self
                .cache
                .set_value(&cache_key, &adjusted.to_string(), Some(self.result_ttl))
                .await;
        }

        Ok(adjusted)
    }

    /// Loads the fee configuration, serving it from cache when possible.
    ///
    /// A missing stored configuration is the empty configuration. Cache
    /// failures fall through to the settings repository.
    ///
    /// # Errors
    ///
    /// Returns [`FeeError::Storage`] when the settings repository fails.
    pub async fn configuration(&self) -> Result<FeeConfiguration, FeeError> {
        if let Ok(Some(raw)) = self.cache.get_value(OPTIONS_CACHE_KEY).await {
            match serde_json::from_str(&raw) {
                Ok(config) => return Ok(config),
                Err(e) => warn!("Discarding unreadable cached settings: {}", e),
            }
        }

        let config = self
            .settings_repository
            .load()
            .await?
            .unwrap_or_default();

        if let Ok(serialized) = serde_json::to_string(&config) {
            let _ = self
                .cache
                .set_value(OPTIONS_CACHE_KEY, &serialized, Some(self.options_ttl))
                .await;
        }

        Ok(config)
    }

    /// Drops every cached fee result and the cached configuration.
    ///
    /// The host should call this whenever the cart changes, since any cached
    /// result may be stale afterwards.
    pub async fn invalidate_cached_fees(&self) {
        if let Err(e) = self.cache.flush_namespace().await {
            warn!("Failed to flush handling fee cache: {}", e);
        }
    }
}
