//! Admin settings sanitization and persistence service.

use std::collections::{BTreeMap, HashMap, HashSet};
use std::sync::Arc;

use serde_json::json;
use tracing::{debug, warn};
use validator::Validate;

use crate::application::dto::{SettingsInput, is_valid_slug};
use crate::domain::entities::{ClassFeeConfig, FeeConfiguration, ShippingClass};
use crate::domain::repositories::{SettingsRepository, ShippingClassRepository};
use crate::error::FeeError;
use crate::infrastructure::cache::CacheService;
use crate::utils::cache_key::{OPTIONS_CACHE_KEY, SHIPPING_CLASSES_CACHE_KEY};
use crate::utils::rate::parse_rate;

/// TTL for the cached shipping class directory, seconds.
const DIRECTORY_CACHE_TTL: usize = 3600;

/// Service behind the admin settings screen.
///
/// Turns raw form submissions into sanitized [`FeeConfiguration`]s, persists
/// them, and keeps the cached configuration coherent. Unlike the checkout
/// path, admin operations are allowed to fail loudly: a validation error is
/// meaningful to the administrator.
pub struct SettingsService<S: SettingsRepository, K: ShippingClassRepository> {
    settings_repository: Arc<S>,
    class_repository: Arc<K>,
    cache: Arc<dyn CacheService>,
}

impl<S: SettingsRepository, K: ShippingClassRepository> SettingsService<S, K> {
    /// Creates a new settings service.
    pub fn new(
        settings_repository: Arc<S>,
        class_repository: Arc<K>,
        cache: Arc<dyn CacheService>,
    ) -> Self {
        Self {
            settings_repository,
            class_repository,
            cache,
        }
    }

    /// Validates, sanitizes, and persists a settings submission.
    ///
    /// # Sanitization
    ///
    /// - Selected slugs are kept only when well-formed and present in the
    ///   host's shipping class directory; duplicates collapse.
    /// - Per-class settings survive only for selected slugs.
    /// - Rates are rebuilt as a contiguous `1..=tier_count` table; missing,
    ///   non-numeric, and negative entries become zero, anything beyond
    ///   `tier_count` is dropped.
    ///
    /// # Errors
    ///
    /// Returns [`FeeError::Validation`] when the submission violates the
    /// admin UI contract (e.g. more than 10 tiers), and passes through
    /// repository errors.
    pub async fn save_settings(&self, input: SettingsInput) -> Result<FeeConfiguration, FeeError> {
        input.validate().map_err(|e| {
            FeeError::validation("Invalid settings submission", json!({ "errors": e.to_string() }))
        })?;
        for (slug, class_input) in &input.class_settings {
            class_input.validate().map_err(|e| {
                FeeError::validation(
                    "Invalid class settings",
                    json!({ "class": slug, "errors": e.to_string() }),
                )
            })?;
        }

        let known_slugs: HashSet<String> = self
            .class_repository
            .all()
            .await?
            .into_iter()
            .map(|class| class.slug)
            .collect();

        let sanitized = sanitize_settings(&input, &known_slugs);
        self.settings_repository.save(&sanitized).await?;
        debug!(
            "Saved handling fee settings for {} classes",
            sanitized.selected_classes.len()
        );

        // The cached configuration is stale now.
        if let Err(e) = self.cache.invalidate(OPTIONS_CACHE_KEY).await {
            warn!("Failed to invalidate cached settings: {}", e);
        }

        Ok(sanitized)
    }

    /// Returns the currently stored configuration.
    ///
    /// A store with nothing saved yet yields the empty configuration.
    ///
    /// # Errors
    ///
    /// Returns [`FeeError::Storage`] on store errors.
    pub async fn current_settings(&self) -> Result<FeeConfiguration, FeeError> {
        Ok(self.settings_repository.load().await?.unwrap_or_default())
    }

    /// Returns the stored settings for one class.
    ///
    /// # Errors
    ///
    /// Returns [`FeeError::NotFound`] when the class is not selected or has
    /// no stored settings; [`FeeError::Storage`] on store errors.
    pub async fn class_config(&self, slug: &str) -> Result<ClassFeeConfig, FeeError> {
        let config = self.current_settings().await?;
        config.settings_for(slug).cloned().ok_or_else(|| {
            FeeError::not_found(
                "No handling fee settings for shipping class",
                json!({ "class": slug }),
            )
        })
    }

    /// Lists the host's shipping classes, serving from cache when possible.
    ///
    /// The directory rarely changes, so it is cached for an hour; cache
    /// failures fall through to the directory itself.
    ///
    /// # Errors
    ///
    /// Returns [`FeeError::Internal`] when the directory cannot be read.
    pub async fn shipping_classes(&self) -> Result<Vec<ShippingClass>, FeeError> {
        if let Ok(Some(raw)) = self.cache.get_value(SHIPPING_CLASSES_CACHE_KEY).await {
            match serde_json::from_str(&raw) {
                Ok(classes) => return Ok(classes),
                Err(e) => warn!("Discarding unreadable cached class directory: {}", e),
            }
        }

        let classes = self.class_repository.all().await?;

        if let Ok(serialized) = serde_json::to_string(&classes) {
            let _ = self
                .cache
                .set_value(
                    SHIPPING_CLASSES_CACHE_KEY,
                    &serialized,
                    Some(DIRECTORY_CACHE_TTL),
                )
                .await;
        }

        Ok(classes)
    }
}

/// Builds a sanitized configuration from validated raw input.
///
/// Pure; all trust decisions happen here so that everything downstream can
/// assume a well-formed [`FeeConfiguration`].
fn sanitize_settings(input: &SettingsInput, known_slugs: &HashSet<String>) -> FeeConfiguration {
    let mut selected_classes: Vec<String> = Vec::new();
    for raw_slug in &input.shipping_classes {
        let slug = raw_slug.trim();
        if !is_valid_slug(slug) || !known_slugs.contains(slug) {
            continue;
        }
        if !selected_classes.iter().any(|s| s == slug) {
            selected_classes.push(slug.to_string());
        }
    }

    let mut class_settings = HashMap::new();
    for (slug, raw) in &input.class_settings {
        if !selected_classes.iter().any(|s| s == slug) {
            continue;
        }

        let tier_rates: BTreeMap<u32, rust_decimal::Decimal> = (1..=raw.tier_count)
            .map(|tier| {
                let rate = raw
                    .rates
                    .get(&tier)
                    .map(|value| parse_rate(value))
                    .unwrap_or_default();
                (tier, rate)
            })
            .collect();

        class_settings.insert(
            slug.clone(),
            ClassFeeConfig {
                apply_with_others: raw.apply_with_others,
                tier_count: raw.tier_count,
                tier_rates,
            },
        );
    }

    FeeConfiguration {
        selected_classes,
        class_settings,
    }
}
