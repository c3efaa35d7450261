//! Domain value objects and validation rules.
//!
//! Person names, phone numbers and store document ids. Contacts are stored
//! verbatim; these checks run only when validation is requested.

pub mod doc_id;
pub mod errors;
pub mod person_name;
pub mod phone;

pub use doc_id::DocId;
pub use errors::ValidationError;
pub use person_name::validate_person_name;
pub use phone::validate_phone_number;
