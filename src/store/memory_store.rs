use crate::domain::DocId;
use crate::error::{StoreError, StoreResult};
use crate::store::traits::{Document, DocumentStore, Query};
use std::collections::BTreeMap;

/// A document store that lives only in memory.
///
/// Used by tests and by callers that do not need persistence.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    documents: BTreeMap<DocId, Document>,
    next_id: Option<DocId>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            documents: BTreeMap::new(),
            next_id: Some(DocId::first()),
        }
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Returns true if no document is stored.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore for MemoryStore {
    fn search(&self, query: &Query) -> StoreResult<Vec<(DocId, Document)>> {
        Ok(self
            .documents
            .iter()
            .filter(|(_, document)| query.matches(document))
            .map(|(id, document)| (*id, document.clone()))
            .collect())
    }

    fn insert(&mut self, document: Document) -> StoreResult<DocId> {
        let id = self
            .next_id
            .ok_or(StoreError::IdsExhausted { last: DocId::MAX })?;
        self.next_id = id.next();
        self.documents.insert(id, document);
        tracing::trace!(doc_id = %id, "Inserted document in memory store");
        Ok(id)
    }

    fn remove(&mut self, ids: &[DocId]) -> StoreResult<Vec<DocId>> {
        Ok(ids
            .iter()
            .filter(|id| self.documents.remove(*id).is_some())
            .copied()
            .collect())
    }
}
