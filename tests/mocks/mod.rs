mod mock_document_store;

pub use mock_document_store::MockDocumentStore;
