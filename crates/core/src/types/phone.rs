//! Phone number display formatting.

/// Digit count of a Korean mobile number (`010` prefix plus eight digits).
const MOBILE_DIGITS: usize = 11;

/// Format a phone number for display.
///
/// Non-digit characters are stripped; an 11-digit result is rendered in
/// `3-4-4` groups. Anything else is returned unchanged.
///
/// ```
/// use tradewear_core::format_phone_number;
///
/// assert_eq!(format_phone_number("01012345678"), "010-1234-5678");
/// assert_eq!(format_phone_number("02-555-0100"), "02-555-0100");
/// ```
#[must_use]
pub fn format_phone_number(phone: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    if digits.len() != MOBILE_DIGITS {
        return phone.to_owned();
    }

    match (digits.get(..3), digits.get(3..7), digits.get(7..)) {
        (Some(prefix), Some(middle), Some(last)) => format!("{prefix}-{middle}-{last}"),
        _ => phone.to_owned(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reformats_separated_mobile_number() {
        assert_eq!(format_phone_number("010 9876 5432"), "010-9876-5432");
        assert_eq!(format_phone_number("010.9876.5432"), "010-9876-5432");
    }

    #[test]
    fn test_short_number_unchanged() {
        assert_eq!(format_phone_number("1588-0000"), "1588-0000");
    }

    #[test]
    fn test_empty_unchanged() {
        assert_eq!(format_phone_number(""), "");
    }
}
