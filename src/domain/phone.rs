//! Phone number checks.

use super::errors::ValidationError;
use once_cell::sync::Lazy;
use regex::Regex;

/// Characters ignored when checking a phone number: `+`, parentheses and whitespace.
static PHONE_FORMATTING_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[+()\s]").expect("Failed to compile phone formatting regex"));

/// Minimum number of digits once formatting characters are stripped.
pub const MIN_PHONE_DIGITS: usize = 10;

/// Remove the formatting characters accepted around the digits.
pub fn strip_formatting(phone: &str) -> String {
    PHONE_FORMATTING_REGEX.replace_all(phone, "").into_owned()
}

/// Validate a phone number.
///
/// `+`, `(`, `)` and whitespace are stripped first. What remains must be at
/// least [`MIN_PHONE_DIGITS`] characters, all of them ASCII `0`-`9`. Digits
/// from other scripts (Arabic-Indic, fullwidth, ...) are rejected on purpose.
///
/// # Example
///
/// ```
/// use contact_book::domain::validate_phone_number;
///
/// assert!(validate_phone_number("+33 (0)1 23 45 67 89").is_ok());
/// assert!(validate_phone_number("01-23-45-67-89").is_err());
/// ```
///
/// # Errors
///
/// Returns `ValidationError::InvalidPhone` carrying the original text.
pub fn validate_phone_number(phone: &str) -> Result<(), ValidationError> {
    let stripped = strip_formatting(phone);

    if stripped.chars().count() < MIN_PHONE_DIGITS || !stripped.chars().all(|c| c.is_ascii_digit())
    {
        return Err(ValidationError::InvalidPhone(phone.to_string()));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phone_valid() {
        assert!(validate_phone_number("0123456789").is_ok());
        assert!(validate_phone_number("012345678901234").is_ok());
    }

    #[test]
    fn test_phone_strips_formatting() {
        assert_eq!(strip_formatting("+33 (1) 23 45 67 89"), "33123456789");
        assert!(validate_phone_number("+33 (1) 23 45 67 89").is_ok());
        assert!(validate_phone_number("01\t23\n45 67 89").is_ok());
    }

    #[test]
    fn test_phone_validates_format() {
        assert!(validate_phone_number("").is_err());
        assert!(validate_phone_number("abcd").is_err());
        assert!(validate_phone_number("012345678").is_err());
        assert!(validate_phone_number("01-23-45-67-89").is_err());
        assert!(validate_phone_number("01.23.45.67.89").is_err());
        assert!(validate_phone_number("0123456789a").is_err());
        assert!(validate_phone_number("+ ( ) 123").is_err());
    }

    #[test]
    fn test_phone_rejects_non_ascii_digits() {
        // Arabic-Indic and fullwidth digits
        assert!(validate_phone_number("٠١٢٣٤٥٦٧٨٩").is_err());
        assert!(validate_phone_number("０１２３４５６７８９").is_err());
    }

    #[test]
    fn test_phone_error_keeps_original_text() {
        let err = validate_phone_number("abcd").unwrap_err();
        assert_eq!(err, ValidationError::InvalidPhone("abcd".to_string()));
        assert!(err.to_string().contains("invalid"));
    }
}
