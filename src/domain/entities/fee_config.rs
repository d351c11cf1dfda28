//! Handling fee configuration entities.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Per-class fee settings: whether the fee stacks with other classes and the
/// quantity-tier rate table.
///
/// Tier indices are 1-based. The sanitizer produces a contiguous
/// `1..=tier_count` table, but consumers must tolerate any shape: a missing
/// tier simply contributes nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ClassFeeConfig {
    /// When false, the fee only applies to carts where this is the sole
    /// configured class with units present.
    pub apply_with_others: bool,
    /// Number of quantity tiers. The top tier is an "N or more" ceiling.
    pub tier_count: u32,
    /// Fee amount per tier index.
    pub tier_rates: BTreeMap<u32, Decimal>,
}

impl ClassFeeConfig {
    /// Creates a config from an ordered list of tier rates.
    ///
    /// `rates[0]` becomes tier 1, `rates[1]` tier 2, and so on.
    pub fn from_rates(apply_with_others: bool, rates: Vec<Decimal>) -> Self {
        let tier_rates: BTreeMap<u32, Decimal> = rates
            .into_iter()
            .enumerate()
            .map(|(i, rate)| (i as u32 + 1, rate))
            .collect();
        Self {
            apply_with_others,
            tier_count: tier_rates.len() as u32,
            tier_rates,
        }
    }

    /// Returns the configured rate for a tier index, if any.
    pub fn rate_for(&self, tier: u32) -> Option<Decimal> {
        self.tier_rates.get(&tier).copied()
    }

    /// Returns true if at least one tier is configured.
    pub fn has_tiers(&self) -> bool {
        self.tier_count > 0
    }
}

/// The full administrator-configured fee setup.
///
/// Stored as JSON in the host key-value store and cached between
/// calculations. [`Default`] is the empty configuration, which yields no
/// fees for any cart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FeeConfiguration {
    /// Shipping class slugs that participate in handling fees at all.
    pub selected_classes: Vec<String>,
    /// Per-class settings, keyed by slug. Entries for unselected classes are
    /// ignored by the calculator.
    pub class_settings: HashMap<String, ClassFeeConfig>,
}

impl FeeConfiguration {
    /// Returns true when no class can possibly produce a fee.
    pub fn is_empty(&self) -> bool {
        self.selected_classes.is_empty() || self.class_settings.is_empty()
    }

    /// Returns true if the slug participates in handling fees.
    pub fn is_selected(&self, slug: &str) -> bool {
        self.selected_classes.iter().any(|s| s == slug)
    }

    /// Returns the settings for a selected class.
    ///
    /// Entries present in `class_settings` but not in `selected_classes`
    /// are deliberately invisible here.
    pub fn settings_for(&self, slug: &str) -> Option<&ClassFeeConfig> {
        if !self.is_selected(slug) {
            return None;
        }
        self.class_settings.get(slug)
    }
}
