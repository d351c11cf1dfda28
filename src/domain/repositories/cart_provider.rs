//! Provider trait for live cart snapshots.

use crate::domain::entities::CartLineItem;
use crate::error::FeeError;
use async_trait::async_trait;

/// Supplies a snapshot of the current shopping cart.
///
/// The host platform owns the cart; the engine only ever reads a consistent,
/// already-materialized snapshot with each line resolved to its shipping
/// class slug.
///
/// # Implementations
///
/// - Host-platform adapters (out of scope for this crate)
/// - `tests/common` ships a fixed-cart implementation for integration tests
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CartProvider: Send + Sync {
    /// Returns the cart's line items. May be empty.
    ///
    /// # Errors
    ///
    /// Returns [`FeeError::Internal`] when the cart cannot be materialized.
    async fn line_items(&self) -> Result<Vec<CartLineItem>, FeeError>;
}
