//! Repository trait for the host platform's shipping class terms.

use crate::domain::entities::ShippingClass;
use crate::error::FeeError;
use async_trait::async_trait;

/// Read access to the shipping classes defined in the host platform.
///
/// Settings sanitization validates submitted slugs against this directory so
/// that only real classes can carry handling fees.
///
/// # Implementations
///
/// - [`crate::infrastructure::stores::StaticShippingClassRepository`] - fixed in-process list
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShippingClassRepository: Send + Sync {
    /// Lists every shipping class the host knows about.
    ///
    /// # Errors
    ///
    /// Returns [`FeeError::Internal`] when the directory cannot be read.
    async fn all(&self) -> Result<Vec<ShippingClass>, FeeError>;
}
