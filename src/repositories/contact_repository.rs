use crate::domain::DocId;
use crate::error::{RecordError, RecordResult};
use crate::models::contact::{FIRST_NAME_FIELD, LAST_NAME_FIELD};
use crate::models::{Contact, StoredContact};
use crate::store::{DocumentStore, Query};
use tracing::{debug, info};

/// Result of [`ContactRepository::save`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// A new document was written under this id.
    Inserted(DocId),

    /// A document with the same first and last name already exists; nothing was written.
    Duplicate,
}

impl SaveOutcome {
    /// Integer code reported for a rejected duplicate.
    pub const DUPLICATE_CODE: i64 = -1;

    /// The new document id, or [`Self::DUPLICATE_CODE`].
    pub fn code(&self) -> i64 {
        match self {
            Self::Inserted(id) => id.get(),
            Self::Duplicate => Self::DUPLICATE_CODE,
        }
    }

    /// The new document id, if one was written.
    pub fn doc_id(&self) -> Option<DocId> {
        match self {
            Self::Inserted(id) => Some(*id),
            Self::Duplicate => None,
        }
    }

    pub fn is_duplicate(&self) -> bool {
        matches!(self, Self::Duplicate)
    }
}

/// Contact records persisted in a [`DocumentStore`].
///
/// The store is injected at construction. First name plus last name is the
/// lookup key: matching is exact and case-sensitive, and `save` refuses to
/// write a second document for a key that is already present.
pub struct ContactRepository<S> {
    store: S,
}

impl<S: DocumentStore> ContactRepository<S> {
    /// Create a repository over `store`.
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Borrow the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Give back the underlying store.
    pub fn into_inner(self) -> S {
        self.store
    }

    fn key_query(contact: &Contact) -> Query {
        Query::new()
            .eq(FIRST_NAME_FIELD, contact.first_name.as_str())
            .eq(LAST_NAME_FIELD, contact.last_name.as_str())
    }

    /// Find the stored document for `contact`'s first and last name.
    pub fn lookup(&self, contact: &Contact) -> RecordResult<Option<StoredContact>> {
        match self.store.get(&Self::key_query(contact))? {
            Some((id, document)) => Ok(Some(StoredContact {
                id,
                contact: Contact::from_document(id, document)?,
            })),
            None => Ok(None),
        }
    }

    /// Returns true if a document is stored for `contact`'s first and last name.
    pub fn exists(&self, contact: &Contact) -> RecordResult<bool> {
        Ok(self.store.get(&Self::key_query(contact))?.is_some())
    }

    /// Persist `contact` unless its key is already taken.
    ///
    /// With `validate` set, [`Contact::validate`] runs first and a failure
    /// aborts the save before the store is touched.
    ///
    /// # Errors
    ///
    /// - `RecordError::Validation` when validation was requested and failed.
    /// - `RecordError::Store` when the store cannot be read or written.
    pub fn save(&mut self, contact: &Contact, validate: bool) -> RecordResult<SaveOutcome> {
        if validate {
            contact.validate()?;
        }

        if let Some((id, _)) = self.store.get(&Self::key_query(contact))? {
            debug!(
                doc_id = %id,
                name = %contact.full_name(),
                "Contact already stored, rejecting duplicate"
            );
            return Ok(SaveOutcome::Duplicate);
        }

        let id = self.store.insert(contact.to_document()?)?;
        info!(doc_id = %id, name = %contact.full_name(), "Saved contact");
        Ok(SaveOutcome::Inserted(id))
    }

    /// Remove the stored document for `contact`'s key.
    ///
    /// Returns the removed id, or an empty list if nothing was stored.
    pub fn delete(&mut self, contact: &Contact) -> RecordResult<Vec<DocId>> {
        let Some((id, _)) = self.store.get(&Self::key_query(contact))? else {
            return Ok(Vec::new());
        };

        let removed = self.store.remove(&[id])?;
        info!(doc_ids = ?removed, name = %contact.full_name(), "Deleted contact");
        Ok(removed)
    }

    /// Every stored contact, in store order.
    pub fn list_all(&self) -> RecordResult<Vec<Contact>> {
        self.store
            .all()?
            .into_iter()
            .map(|(id, document)| Contact::from_document(id, document).map_err(RecordError::from))
            .collect()
    }
}
