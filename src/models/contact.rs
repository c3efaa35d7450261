//! Contact model representing a person in the contact book.

use crate::domain::{validate_person_name, validate_phone_number, DocId, ValidationError};
use crate::error::{StoreError, StoreResult};
use crate::store::Document;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Field names making up the lookup key of a persisted contact.
pub const FIRST_NAME_FIELD: &str = "first_name";
pub const LAST_NAME_FIELD: &str = "last_name";

/// A contact in the contact book.
///
/// Fields are stored verbatim; nothing is checked until [`Contact::validate`]
/// is called. The persisted document has exactly these four string fields,
/// and deserialization requires all of them.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Contact {
    /// First name
    pub first_name: String,

    /// Last name
    pub last_name: String,

    /// Phone number, as entered
    pub phone_number: String,

    /// Postal address, free-form
    pub address: String,
}

impl Contact {
    /// Create a new contact with an empty phone number and address.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone_number: String::new(),
            address: String::new(),
        }
    }

    /// Create a contact with every field set.
    pub fn with_details(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone_number: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone_number: phone_number.into(),
            address: address.into(),
        }
    }

    /// Set the phone number.
    pub fn with_phone_number(mut self, phone_number: impl Into<String>) -> Self {
        self.phone_number = phone_number.into();
        self
    }

    /// Set the address.
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// First name and last name separated by a single space.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Check the phone number, then the names.
    ///
    /// # Errors
    ///
    /// - `ValidationError::InvalidPhone` if the phone number is not at least
    ///   ten digits once `+`, parentheses and whitespace are removed.
    /// - `ValidationError::EmptyName` if a name is empty.
    /// - `ValidationError::InvalidName` if a name holds punctuation or digits.
    pub fn validate(&self) -> Result<(), ValidationError> {
        validate_phone_number(&self.phone_number)?;
        validate_person_name(&self.first_name, &self.last_name)
    }

    /// Encode this contact as a store document.
    pub fn to_document(&self) -> StoreResult<Document> {
        match serde_json::to_value(self)? {
            Value::Object(map) => Ok(map),
            other => Err(StoreError::InvalidLayout(format!(
                "contact encoded as {} instead of an object",
                other
            ))),
        }
    }

    /// Decode a store document, requiring all four fields.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::MalformedDocument` naming `id` when a field is
    /// missing, has the wrong type, or an unknown field is present.
    pub fn from_document(id: DocId, document: Document) -> StoreResult<Self> {
        serde_json::from_value(Value::Object(document))
            .map_err(|source| StoreError::MalformedDocument { id, source })
    }
}

impl fmt::Display for Contact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}\n{}\n{}",
            self.full_name(),
            self.phone_number,
            self.address
        )
    }
}

/// A contact together with the id of the document it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredContact {
    pub id: DocId,
    pub contact: Contact,
}
