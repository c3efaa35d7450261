//! Domain validation errors.

use std::fmt;

/// Errors that can occur when a contact's fields are validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// First name or last name is empty.
    EmptyName,

    /// A name contains punctuation or digits. Carries the full name.
    InvalidName(String),

    /// The phone number is too short or contains non-digit characters.
    /// Carries the value as it was given.
    InvalidPhone(String),

    /// A document id is not a positive integer.
    InvalidDocId(String),
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(
                f,
                "invalid name: first name and last name cannot be empty"
            ),
            Self::InvalidName(name) => write!(f, "invalid name: {}", name),
            Self::InvalidPhone(phone) => write!(f, "invalid phone number: {}", phone),
            Self::InvalidDocId(id) => write!(f, "invalid document id: {}", id),
        }
    }
}

impl std::error::Error for ValidationError {}
