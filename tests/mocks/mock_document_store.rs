use contact_book::error::{StoreError, StoreResult};
use contact_book::store::{Document, DocumentStore, MemoryStore, Query};
use contact_book::DocId;
use std::collections::HashMap;
use std::io;
use std::sync::{Arc, Mutex};

/// Mock document store for testing.
///
/// Delegates to a [`MemoryStore`], tracks method calls for verification and
/// can be switched into a mode where every write fails.
#[allow(dead_code)]
#[derive(Clone)]
pub struct MockDocumentStore {
    inner: Arc<Mutex<MemoryStore>>,
    call_counts: Arc<Mutex<HashMap<String, usize>>>,
    queries: Arc<Mutex<Vec<Query>>>,
    fail_writes: Arc<Mutex<bool>>,
}

#[allow(dead_code)]
impl MockDocumentStore {
    /// Create a new empty MockDocumentStore.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(MemoryStore::new())),
            call_counts: Arc::new(Mutex::new(HashMap::new())),
            queries: Arc::new(Mutex::new(Vec::new())),
            fail_writes: Arc::new(Mutex::new(false)),
        }
    }

    /// Make every subsequent insert and remove fail with an I/O error.
    pub fn fail_writes(&self, fail: bool) {
        *self.fail_writes.lock().unwrap() = fail;
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        let counts = self.call_counts.lock().unwrap();
        *counts.get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        self.call_counts.lock().unwrap().clear();
    }

    /// Queries received by `search`, in order.
    pub fn queries(&self) -> Vec<Query> {
        self.queries.lock().unwrap().clone()
    }

    /// Number of stored documents.
    pub fn len(&self) -> usize {
        self.inner.lock().unwrap().len()
    }

    fn track_call(&self, method: &str) {
        let mut counts = self.call_counts.lock().unwrap();
        *counts.entry(method.to_string()).or_insert(0) += 1;
    }

    fn check_writable(&self) -> StoreResult<()> {
        if *self.fail_writes.lock().unwrap() {
            return Err(StoreError::Io(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "mock store is read-only",
            )));
        }
        Ok(())
    }
}

impl Default for MockDocumentStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentStore for MockDocumentStore {
    fn search(&self, query: &Query) -> StoreResult<Vec<(DocId, Document)>> {
        self.track_call("search");
        self.queries.lock().unwrap().push(query.clone());
        self.inner.lock().unwrap().search(query)
    }

    fn insert(&mut self, document: Document) -> StoreResult<DocId> {
        self.track_call("insert");
        self.check_writable()?;
        self.inner.lock().unwrap().insert(document)
    }

    fn remove(&mut self, ids: &[DocId]) -> StoreResult<Vec<DocId>> {
        self.track_call("remove");
        self.check_writable()?;
        self.inner.lock().unwrap().remove(ids)
    }
}
