//! Pure handling fee calculation.
//!
//! This is the revenue-critical core of the crate: given a cart snapshot and
//! a fee configuration, compute the adjusted shipping cost. The computation
//! is total and side-effect free; malformed lines or configuration entries
//! contribute nothing instead of failing, so a checkout can never be blocked
//! from here.

use crate::domain::entities::{CartLineItem, FeeConfiguration};
use rust_decimal::Decimal;
use std::collections::BTreeMap;

/// Sums countable cart quantities per selected shipping class.
///
/// Lines without a class, with a non-positive quantity, or whose class is
/// not selected in `config` are skipped. Classes with no surviving lines are
/// absent from the result rather than zero-valued, which makes the map's
/// size the number of concurrent fee classes in the cart.
pub fn aggregate_class_quantities<'a>(
    items: &'a [CartLineItem],
    config: &FeeConfiguration,
) -> BTreeMap<&'a str, i64> {
    let mut counts: BTreeMap<&str, i64> = BTreeMap::new();

    for item in items {
        if !item.is_countable() {
            continue;
        }
        let Some(slug) = item.class_slug() else {
            continue;
        };
        if !config.is_selected(slug) {
            continue;
        }
        *counts.entry(slug).or_insert(0) += item.quantity;
    }

    counts
}

/// Computes the shipping cost adjusted by all applicable handling fees.
///
/// For each selected class with units in the cart, the fee for tier
/// `min(quantity, tier_count)` is added to `cost`. Quantities beyond the
/// highest tier collapse into it. A class whose `apply_with_others` flag is
/// false contributes only when it is the sole fee class present; classes the
/// configuration does not select are invisible to that exclusivity count.
///
/// Never mutates its inputs and never panics; any missing or out-of-range
/// piece of configuration simply contributes nothing.
pub fn compute_handling_fee(
    cost: Decimal,
    items: &[CartLineItem],
    config: &FeeConfiguration,
) -> Decimal {
    if config.is_empty() {
        return cost;
    }

    let counts = aggregate_class_quantities(items, config);
    if counts.is_empty() {
        return cost;
    }

    let concurrent_classes = counts.len();
    let mut total = cost;

    for (slug, quantity) in &counts {
        let Some(settings) = config.settings_for(slug) else {
            continue;
        };
        if !settings.has_tiers() {
            continue;
        }
        if !settings.apply_with_others && concurrent_classes > 1 {
            continue;
        }

        // quantity >= 1 and tier_count >= 1 here, so tier >= 1.
        let tier = (*quantity).min(i64::from(settings.tier_count)) as u32;
        if let Some(rate) = settings.rate_for(tier)
            && !rate.is_sign_negative()
        {
            total += rate;
        }
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::ClassFeeConfig;
    use std::collections::HashMap;

    fn d(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    fn item(class: &str, quantity: i64) -> CartLineItem {
        CartLineItem::new(1, Some(class.to_string()), quantity)
    }

    fn config_with(classes: Vec<(&str, ClassFeeConfig)>) -> FeeConfiguration {
        FeeConfiguration {
            selected_classes: classes.iter().map(|(slug, _)| slug.to_string()).collect(),
            class_settings: classes
                .into_iter()
                .map(|(slug, settings)| (slug.to_string(), settings))
                .collect(),
        }
    }

    #[test]
    fn test_zero_config_identity() {
        let items = vec![item("fragile", 2), item("bulky", 1)];
        let config = FeeConfiguration::default();

        assert_eq!(compute_handling_fee(d("10.00"), &items, &config), d("10.00"));
    }

    #[test]
    fn test_empty_cart_identity() {
        let config = config_with(vec![(
            "fragile",
            ClassFeeConfig::from_rates(true, vec![d("3.00")]),
        )]);

        assert_eq!(compute_handling_fee(d("4.20"), &[], &config), d("4.20"));
    }

    #[test]
    fn test_end_to_end_example() {
        // cost $10.00, 2x fragile, tiers {1: 3.00, 2: 5.00} -> $15.00
        let items = vec![item("fragile", 2)];
        let config = config_with(vec![(
            "fragile",
            ClassFeeConfig::from_rates(true, vec![d("3.00"), d("5.00")]),
        )]);

        assert_eq!(compute_handling_fee(d("10.00"), &items, &config), d("15.00"));
    }

    #[test]
    fn test_tier_saturation() {
        let config = config_with(vec![(
            "fragile",
            ClassFeeConfig::from_rates(true, vec![d("1.00"), d("2.00"), d("5.00")]),
        )]);

        for quantity in [3, 4, 100] {
            let items = vec![item("fragile", quantity)];
            assert_eq!(
                compute_handling_fee(d("0.00"), &items, &config),
                d("5.00"),
                "quantity {quantity} must saturate at the top tier"
            );
        }
    }

    #[test]
    fn test_saturation_ignores_rate_ordering() {
        // Non-monotonic rates are a valid admin configuration; saturation
        // still picks the top tier.
        let config = config_with(vec![(
            "fragile",
            ClassFeeConfig::from_rates(true, vec![d("9.00"), d("0.50")]),
        )]);

        let items = vec![item("fragile", 7)];
        assert_eq!(compute_handling_fee(d("0.00"), &items, &config), d("0.50"));
    }

    #[test]
    fn test_aggregation_before_tier_lookup() {
        // 2 + 3 units of the same class aggregate to 5 before the lookup.
        let config = config_with(vec![(
            "fragile",
            ClassFeeConfig::from_rates(
                true,
                vec![d("1.00"), d("1.00"), d("1.00"), d("1.00"), d("8.00")],
            ),
        )]);

        let items = vec![item("fragile", 2), item("fragile", 3)];
        assert_eq!(compute_handling_fee(d("0.00"), &items, &config), d("8.00"));
    }

    #[test]
    fn test_exclusive_class_suppressed_by_other_fee_class() {
        let config = config_with(vec![
            ("a", ClassFeeConfig::from_rates(false, vec![d("2.00")])),
            ("b", ClassFeeConfig::from_rates(true, vec![d("0.00")])),
        ]);

        // 1xA + 1xB: two concurrent fee classes, A is excluded, B adds 0.
        let items = vec![item("a", 1), item("b", 1)];
        assert_eq!(compute_handling_fee(d("10.00"), &items, &config), d("10.00"));

        // 1xA alone: fee applies.
        let items = vec![item("a", 1)];
        assert_eq!(compute_handling_fee(d("10.00"), &items, &config), d("12.00"));
    }

    #[test]
    fn test_exclusivity_ignores_unconfigured_classes() {
        // A class the configuration does not select is invisible to the
        // exclusivity count.
        let config = config_with(vec![(
            "a",
            ClassFeeConfig::from_rates(false, vec![d("2.00")]),
        )]);

        let items = vec![item("a", 1), item("unrelated", 5)];
        assert_eq!(compute_handling_fee(d("10.00"), &items, &config), d("12.00"));
    }

    #[test]
    fn test_unselected_settings_never_contribute() {
        // Defense in depth: settings present but class not selected.
        let config = FeeConfiguration {
            selected_classes: vec![],
            class_settings: HashMap::from([(
                "fragile".to_string(),
                ClassFeeConfig::from_rates(true, vec![d("3.00")]),
            )]),
        };

        let items = vec![item("fragile", 1)];
        assert_eq!(compute_handling_fee(d("10.00"), &items, &config), d("10.00"));
    }

    #[test]
    fn test_selected_class_without_settings_is_skipped() {
        let config = FeeConfiguration {
            selected_classes: vec!["fragile".to_string()],
            class_settings: HashMap::from([(
                "other".to_string(),
                ClassFeeConfig::from_rates(true, vec![d("3.00")]),
            )]),
        };

        let items = vec![item("fragile", 1)];
        assert_eq!(compute_handling_fee(d("10.00"), &items, &config), d("10.00"));
    }

    #[test]
    fn test_zero_tier_count_is_skipped() {
        let config = config_with(vec![("fragile", ClassFeeConfig::from_rates(true, vec![]))]);

        let items = vec![item("fragile", 4)];
        assert_eq!(compute_handling_fee(d("10.00"), &items, &config), d("10.00"));
    }

    #[test]
    fn test_malformed_lines_contribute_nothing() {
        let config = config_with(vec![(
            "fragile",
            ClassFeeConfig::from_rates(true, vec![d("3.00"), d("5.00")]),
        )]);

        let items = vec![
            CartLineItem::new(1, None, 4),
            item("fragile", -2),
            item("fragile", 0),
            item("fragile", 1),
        ];

        // Only the single valid unit counts: tier 1.
        assert_eq!(compute_handling_fee(d("0.00"), &items, &config), d("3.00"));
    }

    #[test]
    fn test_negative_rate_contributes_nothing() {
        let config = config_with(vec![(
            "fragile",
            ClassFeeConfig::from_rates(true, vec![d("-3.00")]),
        )]);

        let items = vec![item("fragile", 1)];
        assert_eq!(compute_handling_fee(d("10.00"), &items, &config), d("10.00"));
    }

    #[test]
    fn test_multiple_stacking_classes_sum() {
        let config = config_with(vec![
            ("a", ClassFeeConfig::from_rates(true, vec![d("1.50")])),
            ("b", ClassFeeConfig::from_rates(true, vec![d("2.25"), d("4.00")])),
        ]);

        let items = vec![item("a", 3), item("b", 2)];
        // a saturates at tier 1 (1.50), b hits tier 2 (4.00).
        assert_eq!(compute_handling_fee(d("10.00"), &items, &config), d("15.50"));
    }

    #[test]
    fn test_idempotence() {
        let config = config_with(vec![(
            "fragile",
            ClassFeeConfig::from_rates(true, vec![d("3.00"), d("5.00")]),
        )]);
        let items = vec![item("fragile", 2)];

        let first = compute_handling_fee(d("10.00"), &items, &config);
        let second = compute_handling_fee(d("10.00"), &items, &config);
        assert_eq!(first, second);
    }

    #[test]
    fn test_aggregate_omits_empty_classes() {
        let config = config_with(vec![
            ("a", ClassFeeConfig::from_rates(true, vec![d("1.00")])),
            ("b", ClassFeeConfig::from_rates(true, vec![d("1.00")])),
        ]);

        let items = vec![item("a", 2)];
        let counts = aggregate_class_quantities(&items, &config);

        assert_eq!(counts.len(), 1);
        assert_eq!(counts.get("a"), Some(&2));
        assert!(!counts.contains_key("b"));
    }
}
