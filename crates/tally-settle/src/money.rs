//! Decimal formatting and tolerances.

use rust_decimal::prelude::*;

/// The largest difference two totals may have and still agree.
pub fn tolerance(digits: u32) -> f64 {
    1.0 / 10f64.powi(digits as i32)
}

/// Format an amount with exactly `digits` decimals, rounding half to even.
///
/// The amount is first read as its shortest decimal representation, so
/// `2.675` rounds to `2.68` even though the nearest `f64` lies just below it.
/// Values that are not finite, or too large for a 96-bit decimal (about
/// `7.9e28`), format as `"NaN"`.
///
/// ```
/// use tally_settle::format_amount;
///
/// assert_eq!(format_amount(60.0, 2), "60.00");
/// assert_eq!(format_amount(0.125, 2), "0.12");
/// assert_eq!(format_amount(0.375, 2), "0.38");
/// ```
pub fn format_amount(value: f64, digits: u32) -> String {
    match round_amount(value, digits) {
        Some(rounded) => rounded.to_string(),
        None => "NaN".to_string(),
    }
}

/// Whether an amount fits the decimal range used for formatting and totals.
pub fn is_representable(value: f64) -> bool {
    to_decimal(value).is_some()
}

/// Whether two totals agree once both are rounded to `digits` decimals.
///
/// Rounded totals may differ by at most one unit of the last decimal.
/// Anything outside the decimal range never agrees.
pub(crate) fn amounts_agree(lhs: f64, rhs: f64, digits: u32) -> bool {
    let digits = digits.min(MAX_DIGITS);
    match (round_amount(lhs, digits), round_amount(rhs, digits)) {
        (Some(lhs), Some(rhs)) => (lhs - rhs).abs() <= Decimal::new(1, digits),
        _ => false,
    }
}

const MAX_DIGITS: u32 = 28;

fn round_amount(value: f64, digits: u32) -> Option<Decimal> {
    let mut rounded = to_decimal(value)?
        .round_dp_with_strategy(digits, RoundingStrategy::MidpointNearestEven);
    rounded.rescale(digits);
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    Some(rounded)
}

fn to_decimal(value: f64) -> Option<Decimal> {
    if !value.is_finite() {
        return None;
    }
    Decimal::from_str(&value.to_string())
        .ok()
        .or_else(|| Decimal::from_f64_retain(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pads_to_digits() {
        assert_eq!(format_amount(60.0, 2), "60.00");
        assert_eq!(format_amount(12.5, 3), "12.500");
        assert_eq!(format_amount(1500.0, 0), "1500");
    }

    #[test]
    fn test_half_to_even() {
        assert_eq!(format_amount(0.125, 2), "0.12");
        assert_eq!(format_amount(0.135, 2), "0.14");
        assert_eq!(format_amount(2.5, 0), "2");
        assert_eq!(format_amount(3.5, 0), "4");
        assert_eq!(format_amount(1234.5, 0), "1234");
        assert_eq!(format_amount(-2.5, 0), "-2");
    }

    #[test]
    fn test_thirds() {
        assert_eq!(format_amount(100.0 / 3.0, 2), "33.33");
        assert_eq!(format_amount(200.0 / 3.0, 2), "66.67");
    }

    #[test]
    fn test_negative_zero() {
        assert_eq!(format_amount(-0.0, 2), "0.00");
        assert_eq!(format_amount(-0.001, 2), "0.00");
    }

    #[test]
    fn test_not_finite() {
        assert_eq!(format_amount(f64::NAN, 2), "NaN");
        assert_eq!(format_amount(f64::INFINITY, 2), "NaN");
    }

    #[test]
    fn test_out_of_range() {
        assert!(is_representable(1e20));
        assert!(!is_representable(1e30));
        assert_eq!(format_amount(1e30, 2), "NaN");
    }

    #[test]
    fn test_agree_within_one_unit() {
        assert!(amounts_agree(33.33 * 3.0, 100.0, 2));
        assert!(amounts_agree(100.01, 100.0, 2));
        assert!(amounts_agree(29.995 + 60.0, 90.0, 2));
        assert!(!amounts_agree(99.98, 100.0, 2));
        assert!(!amounts_agree(80.0, 90.0, 2));
        assert!(amounts_agree(1501.0, 1500.0, 0));
        assert!(!amounts_agree(1502.0, 1500.0, 0));
    }

    #[test]
    fn test_agree_rejects_not_finite() {
        assert!(!amounts_agree(f64::NAN, 100.0, 2));
        assert!(!amounts_agree(100.0, f64::INFINITY, 2));
        assert!(!amounts_agree(1e30, 1e30, 2));
    }

    #[test]
    fn test_tolerance() {
        assert_eq!(tolerance(2), 0.01);
        assert_eq!(tolerance(0), 1.0);
    }
}
