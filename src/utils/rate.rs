//! Defensive parsing for administrator-entered fee rates.

use rust_decimal::Decimal;

/// Parses a raw rate value from an admin form.
///
/// Fee rates sit in a revenue-critical path, so parsing never fails:
/// non-numeric input and negative amounts both become zero.
pub fn parse_rate(raw: &str) -> Decimal {
    raw.trim()
        .parse::<Decimal>()
        .ok()
        .filter(|rate| !rate.is_sign_negative())
        .unwrap_or(Decimal::ZERO)
}
