//! Repository trait for persisted fee settings.

use crate::domain::entities::FeeConfiguration;
use crate::error::FeeError;
use async_trait::async_trait;

/// Access to the administrator-configured fee settings.
///
/// Settings live in a host-owned key-value store; this trait abstracts that
/// store so the engine only ever sees typed, already-sanitized
/// [`FeeConfiguration`] snapshots.
///
/// # Implementations
///
/// - [`crate::infrastructure::stores::MemorySettingsRepository`] - in-process store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    /// Loads the stored configuration.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(config))` when settings have been saved
    /// - `Ok(None)` when nothing is stored yet (callers fall back to
    ///   [`FeeConfiguration::default`])
    ///
    /// # Errors
    ///
    /// Returns [`FeeError::Storage`] on store errors.
    async fn load(&self) -> Result<Option<FeeConfiguration>, FeeError>;

    /// Persists a sanitized configuration, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`FeeError::Storage`] on store errors.
    async fn save(&self, config: &FeeConfiguration) -> Result<(), FeeError>;
}
