//! DTOs for raw admin settings submissions.

use regex::Regex;
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::LazyLock;
use validator::Validate;

/// Compiled regex for shipping class slug validation.
static SLUG_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[a-z0-9_-]+$").unwrap());

/// Returns true if `slug` is a well-formed shipping class slug.
pub fn is_valid_slug(slug: &str) -> bool {
    !slug.is_empty() && SLUG_REGEX.is_match(slug)
}

/// A full settings submission from the admin UI, before sanitization.
///
/// Everything here is untrusted: slugs may not exist, rates arrive as form
/// strings, and per-class entries may reference unselected classes.
/// [`crate::application::services::SettingsService::save_settings`] turns
/// this into a sanitized
/// [`crate::domain::entities::FeeConfiguration`].
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SettingsInput {
    /// Slugs the administrator ticked as fee-carrying classes.
    #[validate(length(max = 100))]
    pub shipping_classes: Vec<String>,

    /// Raw per-class settings, keyed by slug.
    pub class_settings: HashMap<String, ClassSettingsInput>,
}

/// Raw per-class settings as submitted by the admin form.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct ClassSettingsInput {
    /// Whether the class fee stacks with other classes' fees.
    #[serde(default)]
    pub apply_with_others: bool,

    /// Number of quantity tiers. The admin UI offers at most 10.
    #[validate(range(min = 0, max = 10))]
    pub tier_count: u32,

    /// Tier index -> rate, as entered in the form.
    #[serde(default)]
    pub rates: HashMap<u32, String>,
}
