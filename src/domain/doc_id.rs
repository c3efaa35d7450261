//! DocId value object.

use super::errors::ValidationError;
use std::fmt;
use std::str::FromStr;

/// Identifier assigned by a document store when a document is inserted.
///
/// Ids lie in `1..=i64::MAX`, so an id always converts to a positive
/// integer code.
///
/// # Example
///
/// ```
/// use contact_book::domain::DocId;
///
/// let id: DocId = "3".parse().unwrap();
/// assert_eq!(id.get(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DocId(i64);

impl DocId {
    /// The highest id a store can hand out.
    pub const MAX: DocId = DocId(i64::MAX);

    /// Create a new DocId, rejecting zero and negative values.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidDocId` if `id` is not positive.
    pub fn new(id: i64) -> Result<Self, ValidationError> {
        if id <= 0 {
            return Err(ValidationError::InvalidDocId(id.to_string()));
        }
        Ok(Self(id))
    }

    /// The first id a fresh store hands out.
    pub const fn first() -> Self {
        Self(1)
    }

    /// The id following this one, or `None` once [`DocId::MAX`] is reached.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }

    /// Get the raw integer value.
    pub fn get(self) -> i64 {
        self.0
    }
}

impl FromStr for DocId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = s
            .parse::<i64>()
            .map_err(|_| ValidationError::InvalidDocId(s.to_string()))?;
        DocId::new(id)
    }
}

impl fmt::Display for DocId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
