//! Document storage.
//!
//! Contacts are persisted as flat JSON documents behind the
//! [`DocumentStore`] trait, so the file-backed store can be swapped for the
//! in-memory one (or a test double) without touching record logic.

mod json_file_store;
mod memory_store;
mod traits;

pub use json_file_store::{JsonFileStore, DEFAULT_TABLE};
pub use memory_store::MemoryStore;
pub use traits::{Document, DocumentStore, Query};
