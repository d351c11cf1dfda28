//! Cart line item entity representing one line of the host cart.

use serde::{Deserialize, Serialize};

/// A single line in the shopping cart, resolved to its shipping class.
///
/// Snapshots are produced by the host platform via
/// [`crate::domain::repositories::CartProvider`]; the engine never mutates
/// them. `quantity` is signed so that malformed host data can be represented
/// and ignored instead of rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLineItem {
    pub product_id: u64,
    pub shipping_class: Option<String>,
    pub quantity: i64,
}

impl CartLineItem {
    /// Creates a new cart line item.
    pub fn new(product_id: u64, shipping_class: Option<String>, quantity: i64) -> Self {
        Self {
            product_id,
            shipping_class,
            quantity,
        }
    }

    /// Returns the shipping class slug, if the product has one.
    pub fn class_slug(&self) -> Option<&str> {
        self.shipping_class.as_deref()
    }

    /// Returns true if the line can contribute units to a fee aggregate.
    ///
    /// Lines without a shipping class or with a non-positive quantity are
    /// treated as contributing zero.
    pub fn is_countable(&self) -> bool {
        self.shipping_class.is_some() && self.quantity > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_line_item_creation() {
        let item = CartLineItem::new(7, Some("fragile".to_string()), 3);

        assert_eq!(item.product_id, 7);
        assert_eq!(item.class_slug(), Some("fragile"));
        assert_eq!(item.quantity, 3);
        assert!(item.is_countable());
    }

    #[test]
    fn test_line_item_without_class_is_not_countable() {
        let item = CartLineItem::new(7, None, 3);
        assert!(item.class_slug().is_none());
        assert!(!item.is_countable());
    }

    #[test]
    fn test_line_item_with_non_positive_quantity_is_not_countable() {
        assert!(!CartLineItem::new(1, Some("bulky".to_string()), 0).is_countable());
        assert!(!CartLineItem::new(1, Some("bulky".to_string()), -4).is_countable());
    }
}
