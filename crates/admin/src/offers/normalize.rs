//! Discount parsing, clamping and canonicalization.
//!
//! The dialogs let an admin edit a discount either as a percentage or as
//! a fixed currency amount. The platform only ever stores a percentage,
//! so the fixed representation is converted exactly once, at the
//! submission boundary. While editing, values are clamped so a discount
//! can never invalidate the price it discounts.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Currency/percentage precision, in decimal places.
const MONEY_DP: u32 = 2;

/// The discount representation the admin is editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiscountType {
    /// Percent off, stored as-is.
    Percentage,
    /// Fixed currency amount off, converted to a percentage on save.
    Fixed,
}

impl DiscountType {
    /// Parse a discount type from a URL/form parameter string.
    #[must_use]
    pub fn from_str_param(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "percentage" | "percent" => Some(Self::Percentage),
            "fixed" | "amount" => Some(Self::Fixed),
            _ => None,
        }
    }
}

/// Strictly parse a numeric input, tolerating a comma decimal separator.
///
/// Returns `None` for anything that is not a number. Used by the field
/// validators; the lenient [`parse_amount`] is used for normalization.
#[must_use]
pub fn parse_decimal(raw: &str) -> Option<Decimal> {
    raw.trim().replace(',', ".").parse().ok()
}

/// Leniently parse a numeric input.
///
/// An empty string or a lone decimal separator is a legitimate
/// intermediate state of a field being typed, so both parse to zero
/// rather than erroring. Anything else unparseable also collapses to
/// zero and is caught by the clamp.
#[must_use]
pub fn parse_amount(raw: &str) -> Decimal {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "." || trimmed == "," {
        return Decimal::ZERO;
    }
    parse_decimal(trimmed).unwrap_or(Decimal::ZERO)
}

/// Clamp and round a raw discount input.
///
/// - Percentage: clamped to the closed interval [1, 100].
/// - Fixed: lower bound 1; upper bound `reference_price - 1` when a
///   positive reference price is known, otherwise unbounded above (no
///   reference resolved yet).
///
/// The result is rounded to 2 decimal places.
#[must_use]
pub fn normalize(
    discount_type: DiscountType,
    raw: &str,
    reference_price: Option<Decimal>,
) -> Decimal {
    let value = parse_amount(raw);
    let clamped = match discount_type {
        DiscountType::Percentage => value.clamp(Decimal::ONE, Decimal::ONE_HUNDRED),
        DiscountType::Fixed => {
            let floored = value.max(Decimal::ONE);
            match reference_price {
                Some(price) if price > Decimal::ZERO => floored.min(price - Decimal::ONE),
                _ => floored,
            }
        }
    };
    clamped.round_dp(MONEY_DP)
}

/// Convert a fixed discount into the canonical percentage.
///
/// Returns `None` when the reference price is unknown or non-positive -
/// the conversion is undefined and the submission must be blocked rather
/// than sent as NaN or infinity.
#[must_use]
pub fn percentage_from_fixed(fixed: Decimal, reference_price: Decimal) -> Option<Decimal> {
    if reference_price <= Decimal::ZERO {
        return None;
    }
    Some((fixed / reference_price * Decimal::ONE_HUNDRED).round_dp(MONEY_DP))
}

/// Convert a stored percentage back into a fixed amount.
///
/// Used when hydrating an edit dialog into fixed display mode.
#[must_use]
pub fn fixed_from_percentage(percentage: Decimal, reference_price: Decimal) -> Option<Decimal> {
    if reference_price <= Decimal::ZERO {
        return None;
    }
    Some((percentage / Decimal::ONE_HUNDRED * reference_price).round_dp(MONEY_DP))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn dec(s: &str) -> Decimal {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_amount_intermediate_states() {
        assert_eq!(parse_amount(""), Decimal::ZERO);
        assert_eq!(parse_amount("."), Decimal::ZERO);
        assert_eq!(parse_amount(","), Decimal::ZERO);
        assert_eq!(parse_amount("12,5"), dec("12.5"));
        assert_eq!(parse_amount("garbage"), Decimal::ZERO);
    }

    #[test]
    fn test_percentage_clamp_is_total() {
        // Out-of-range and garbage inputs all land inside [1, 100]
        for raw in ["150", "-4", "0", "", "NaN", "1e99", "abc", "100.001"] {
            let v = normalize(DiscountType::Percentage, raw, None);
            assert!(v >= Decimal::ONE && v <= Decimal::ONE_HUNDRED, "{raw} -> {v}");
        }
    }

    #[test]
    fn test_percentage_overflow_clamps_to_hundred() {
        assert_eq!(normalize(DiscountType::Percentage, "150", None), dec("100"));
    }

    #[test]
    fn test_fixed_bounded_by_reference_price() {
        assert_eq!(
            normalize(DiscountType::Fixed, "500", Some(dec("200"))),
            dec("199")
        );
        // Any input stays under price - 1
        for raw in ["5000", "199.5", "200"] {
            let v = normalize(DiscountType::Fixed, raw, Some(dec("200")));
            assert!(v <= dec("199"), "{raw} -> {v}");
        }
    }

    #[test]
    fn test_fixed_unbounded_without_reference() {
        assert_eq!(normalize(DiscountType::Fixed, "500", None), dec("500"));
        assert_eq!(
            normalize(DiscountType::Fixed, "500", Some(Decimal::ZERO)),
            dec("500")
        );
    }

    #[test]
    fn test_fixed_lower_bound() {
        assert_eq!(
            normalize(DiscountType::Fixed, "0", Some(dec("200"))),
            Decimal::ONE
        );
        assert_eq!(
            normalize(DiscountType::Fixed, "-20", Some(dec("200"))),
            Decimal::ONE
        );
    }

    #[test]
    fn test_rounding_precision() {
        assert_eq!(
            normalize(DiscountType::Percentage, "33.333", None),
            dec("33.33")
        );
    }

    #[test]
    fn test_canonical_conversion() {
        assert_eq!(
            percentage_from_fixed(dec("50"), dec("200")),
            Some(dec("25.00"))
        );
        assert_eq!(percentage_from_fixed(dec("50"), Decimal::ZERO), None);
        assert_eq!(percentage_from_fixed(dec("50"), dec("-1")), None);
    }

    #[test]
    fn test_canonicalization_round_trip() {
        let price = dec("80");
        for pct in ["25", "12.5", "99"] {
            let pct = dec(pct);
            let fixed = fixed_from_percentage(pct, price).unwrap();
            let back = percentage_from_fixed(fixed, price).unwrap();
            assert!((back - pct).abs() <= dec("0.01"), "{pct} -> {fixed} -> {back}");
        }
    }
}
