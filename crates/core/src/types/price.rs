//! Price display helpers.
//!
//! Prices are carried as [`Decimal`] amounts in Korean won throughout the
//! marketplace. Persisted cart lines serialize them as JSON numbers; see
//! [`crate::models::CartItem`].

use rust_decimal::Decimal;

/// Suffix appended to every rendered won amount.
const WON_SUFFIX: &str = "원";

/// Format an amount for display in Korean won.
///
/// Thousands are grouped with commas and a zero fraction is dropped.
///
/// ```
/// use rust_decimal::Decimal;
/// use tradewear_core::format_won;
///
/// assert_eq!(format_won(Decimal::new(1_250_000, 0)), "1,250,000원");
/// assert_eq!(format_won(Decimal::new(99_950, 2)), "999.5원");
/// ```
#[must_use]
pub fn format_won(amount: Decimal) -> String {
    let normalized = amount.normalize();
    let text = normalized.abs().to_string();
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let mut out = String::with_capacity(text.len() + text.len() / 3 + WON_SUFFIX.len() + 1);
    if normalized.is_sign_negative() && !normalized.is_zero() {
        out.push('-');
    }
    out.push_str(&group_thousands(whole));
    if !fraction.is_empty() {
        out.push('.');
        out.push_str(fraction);
    }
    out.push_str(WON_SUFFIX);
    out
}

fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_small_amount() {
        assert_eq!(format_won(Decimal::new(500, 0)), "500원");
    }

    #[test]
    fn test_format_groups_thousands() {
        assert_eq!(format_won(Decimal::new(12_000, 0)), "12,000원");
        assert_eq!(format_won(Decimal::new(123_456_789, 0)), "123,456,789원");
    }

    #[test]
    fn test_format_drops_zero_fraction() {
        assert_eq!(format_won(Decimal::new(1_200_000, 2)), "12,000원");
    }

    #[test]
    fn test_format_negative() {
        assert_eq!(format_won(Decimal::new(-3_500, 0)), "-3,500원");
    }

    #[test]
    fn test_format_zero() {
        assert_eq!(format_won(Decimal::ZERO), "0원");
    }
}
