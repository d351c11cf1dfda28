//! Fixed-list implementation of the shipping class directory.

use async_trait::async_trait;

use crate::domain::entities::ShippingClass;
use crate::domain::repositories::ShippingClassRepository;
use crate::error::FeeError;

/// Shipping class directory backed by a fixed list.
///
/// Useful when the host's class taxonomy is known at wiring time, and for
/// tests. The list is immutable after construction.
pub struct StaticShippingClassRepository {
    classes: Vec<ShippingClass>,
}

impl StaticShippingClassRepository {
    /// Creates a directory from a fixed list of classes.
    pub fn new(classes: Vec<ShippingClass>) -> Self {
        Self { classes }
    }
}

#[async_trait]
impl ShippingClassRepository for StaticShippingClassRepository {
    async fn all(&self) -> Result<Vec<ShippingClass>, FeeError> {
        Ok(self.classes.clone())
    }
}
