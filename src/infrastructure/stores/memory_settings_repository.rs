//! In-memory implementation of the settings repository.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::FeeConfiguration;
use crate::domain::repositories::SettingsRepository;
use crate::error::FeeError;

/// In-process settings store.
///
/// Stands in for the host platform's key-value options store when the engine
/// is embedded directly or exercised in tests. Holds a single configuration
/// record behind an async read-write lock.
pub struct MemorySettingsRepository {
    stored: RwLock<Option<FeeConfiguration>>,
}

impl MemorySettingsRepository {
    /// Creates an empty store (no configuration saved yet).
    pub fn new() -> Self {
        Self {
            stored: RwLock::new(None),
        }
    }

    /// Creates a store pre-seeded with a configuration.
    pub fn with_configuration(config: FeeConfiguration) -> Self {
        Self {
            stored: RwLock::new(Some(config)),
        }
    }
}

impl Default for MemorySettingsRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SettingsRepository for MemorySettingsRepository {
    async fn load(&self) -> Result<Option<FeeConfiguration>, FeeError> {
        Ok(self.stored.read().await.clone())
    }

    async fn save(&self, config: &FeeConfiguration) -> Result<(), FeeError> {
        *self.stored.write().await = Some(config.clone());
        Ok(())
    }
}
