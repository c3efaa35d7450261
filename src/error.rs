//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::{DocId, ValidationError};
use thiserror::Error;

/// Errors raised by a document store backend.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing the backing file failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file is not valid JSON, or a document could not be encoded
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The backing file is valid JSON but not shaped like a document collection
    #[error("Invalid store layout: {0}")]
    InvalidLayout(String),

    /// A stored document does not map onto the expected record shape
    #[error("Malformed document {id}: {source}")]
    MalformedDocument {
        id: DocId,
        #[source]
        source: serde_json::Error,
    },

    /// Every id up to the maximum has been handed out
    #[error("No document ids left: {last} is the highest id a store can assign")]
    IdsExhausted { last: DocId },
}

/// Errors returned by contact record operations.
#[derive(Error, Debug)]
pub enum RecordError {
    /// Contact fields failed validation; the store was not touched
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The underlying store failed
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with RecordError
pub type RecordResult<T> = Result<T, RecordError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
