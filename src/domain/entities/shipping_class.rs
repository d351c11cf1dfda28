//! Shipping class term entity.

use serde::{Deserialize, Serialize};

/// A shipping class known to the host platform.
///
/// Used by settings sanitization to reject slugs that do not correspond to a
/// real class, and by admin plumbing to present selectable classes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShippingClass {
    pub slug: String,
    pub name: String,
}

impl ShippingClass {
    /// Creates a new shipping class term.
    pub fn new(slug: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            slug: slug.into(),
            name: name.into(),
        }
    }
}
