//! Contact Book - contact records with validation, persisted in a local JSON document store.
//!
//! A contact is a first name, last name, phone number and address. Records are
//! looked up by first and last name, validated on request, and stored as flat
//! JSON documents with store-generated ids.
//!
//! # Architecture
//!
//! - **domain**: Validation rules and value objects (names, phone numbers, document ids)
//! - **models**: The contact entity and its persisted document form
//! - **store**: Document store trait with file-backed and in-memory backends
//! - **repositories**: Contact lookup, save, delete and listing over an injected store
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//!
//! # Example
//!
//! ```
//! use contact_book::{Contact, ContactRepository, MemoryStore};
//!
//! let mut repo = ContactRepository::new(MemoryStore::new());
//! let contact = Contact::with_details("Patrick", "Martin", "0123456789", "1 rue du chemin, 75000 Paris");
//!
//! let outcome = repo.save(&contact, true).unwrap();
//! assert!(outcome.code() > 0);
//! assert_eq!(repo.save(&contact, false).unwrap().code(), -1);
//! ```

pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod store;

pub use config::Config;
pub use domain::{DocId, ValidationError};
pub use error::{ConfigError, RecordError, StoreError};
pub use models::{Contact, StoredContact};
pub use repositories::{ContactRepository, SaveOutcome};
pub use store::{Document, DocumentStore, JsonFileStore, MemoryStore, Query};
