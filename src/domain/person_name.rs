//! Person name checks.

use super::errors::ValidationError;

/// Returns true for characters a person name may not contain.
///
/// ASCII punctuation and ASCII digits are rejected. Letters, accented letters
/// and spaces pass.
pub fn is_forbidden_name_char(c: char) -> bool {
    c.is_ascii_punctuation() || c.is_ascii_digit()
}

/// Validate a first name / last name pair.
///
/// # Errors
///
/// - `ValidationError::EmptyName` if either part is empty.
/// - `ValidationError::InvalidName` (carrying `"first last"`) if either part
///   contains a forbidden character.
pub fn validate_person_name(first_name: &str, last_name: &str) -> Result<(), ValidationError> {
    if first_name.is_empty() || last_name.is_empty() {
        return Err(ValidationError::EmptyName);
    }

    if first_name
        .chars()
        .chain(last_name.chars())
        .any(is_forbidden_name_char)
    {
        return Err(ValidationError::InvalidName(format!(
            "{} {}",
            first_name, last_name
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_letters_spaces_and_accents() {
        assert!(validate_person_name("Patrick", "Martin").is_ok());
        assert!(validate_person_name("Jean Marie", "Le Pen").is_ok());
        assert!(validate_person_name("Hélène", "Çelik").is_ok());
        assert!(validate_person_name("Zoë", "Ñúñez").is_ok());
    }

    #[test]
    fn test_rejects_empty_parts() {
        assert_eq!(validate_person_name("", ""), Err(ValidationError::EmptyName));
        assert_eq!(validate_person_name("Patrick", ""), Err(ValidationError::EmptyName));
        assert_eq!(validate_person_name("", "Martin"), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_rejects_punctuation_and_digits() {
        assert_eq!(
            validate_person_name("A%&*", "Martin"),
            Err(ValidationError::InvalidName("A%&* Martin".to_string()))
        );
        assert!(validate_person_name("Patrick", "Martin2").is_err());
        assert!(validate_person_name("Jean-Pierre", "Martin").is_err());
        assert!(validate_person_name("O'Neil", "Ryan").is_err());
    }
}
