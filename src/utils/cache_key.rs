//! Cache key derivation for computed fee results.

use crate::domain::entities::CartLineItem;
use sha2::{Digest, Sha256};

/// Namespace shared by every key this crate stores.
pub const CACHE_NAMESPACE: &str = "handling_fees";

/// Key under which the loaded [`crate::domain::entities::FeeConfiguration`]
/// is cached.
pub const OPTIONS_CACHE_KEY: &str = "handling_fees:options";

/// Key under which the shipping class directory is cached.
pub const SHIPPING_CLASSES_CACHE_KEY: &str = "handling_fees:shipping_classes";

/// Returns a stable digest of the cart's contents.
///
/// Two carts with the same lines in the same order hash identically;
/// any change to a product, class, or quantity produces a new hash.
pub fn cart_hash(items: &[CartLineItem]) -> String {
    let mut hasher = Sha256::new();
    for item in items {
        hasher.update(item.product_id.to_be_bytes());
        hasher.update(item.shipping_class.as_deref().unwrap_or("").as_bytes());
        hasher.update([0u8]);
        hasher.update(item.quantity.to_be_bytes());
    }
    hex::encode(hasher.finalize())
}

/// Builds the cache key for a computed fee result.
///
/// Keyed by cart contents plus the shipping method id, mirroring the shape
/// `handling_fees:fee:{cart_hash}:{method_id}`. An empty method id falls
/// back to `default`.
pub fn fee_cache_key(items: &[CartLineItem], method_id: &str) -> String {
    let method = if method_id.is_empty() {
        "default"
    } else {
        method_id
    };
    format!("{}:fee:{}:{}", CACHE_NAMESPACE, cart_hash(items), method)
}
