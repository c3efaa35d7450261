use crate::domain::DocId;
use crate::error::StoreResult;
use serde_json::{Map, Value};

/// A loosely typed stored document: a flat JSON object.
pub type Document = Map<String, Value>;

/// A conjunction of field equality conditions.
///
/// An empty query matches every document.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    conditions: Vec<(String, Value)>,
}

impl Query {
    /// Create a query that matches everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the condition `document[field] == value`.
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.conditions.push((field.into(), value.into()));
        self
    }

    /// The conditions of this query, in the order they were added.
    pub fn conditions(&self) -> &[(String, Value)] {
        &self.conditions
    }

    /// Returns true if every condition holds for `document`.
    pub fn matches(&self, document: &Document) -> bool {
        self.conditions
            .iter()
            .all(|(field, expected)| document.get(field) == Some(expected))
    }
}

/// Storage for flat JSON documents with store-generated ids.
///
/// Ids are positive, increase monotonically and are never reused for the
/// lifetime of a store handle. Iteration order is ascending id.
pub trait DocumentStore {
    /// All documents matching `query`.
    fn search(&self, query: &Query) -> StoreResult<Vec<(DocId, Document)>>;

    /// The first document matching `query`, if any.
    fn get(&self, query: &Query) -> StoreResult<Option<(DocId, Document)>> {
        Ok(self.search(query)?.into_iter().next())
    }

    /// Every stored document.
    fn all(&self) -> StoreResult<Vec<(DocId, Document)>> {
        self.search(&Query::new())
    }

    /// Store `document` under a newly generated id.
    fn insert(&mut self, document: Document) -> StoreResult<DocId>;

    /// Remove the documents with the given ids.
    ///
    /// Returns the ids that were actually removed; unknown ids are skipped.
    fn remove(&mut self, ids: &[DocId]) -> StoreResult<Vec<DocId>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document(value: Value) -> Document {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {}", other),
        }
    }

    #[test]
    fn test_empty_query_matches_all() {
        let doc = document(json!({"first_name": "Patrick"}));
        assert!(Query::new().matches(&doc));
        assert!(Query::new().matches(&Document::new()));
    }

    #[test]
    fn test_query_requires_every_condition() {
        let doc = document(json!({"first_name": "Patrick", "last_name": "Martin"}));

        let query = Query::new().eq("first_name", "Patrick").eq("last_name", "Martin");
        assert!(query.matches(&doc));
        assert_eq!(query.conditions().len(), 2);

        let query = Query::new().eq("first_name", "Patrick").eq("last_name", "Dupont");
        assert!(!query.matches(&doc));

        let query = Query::new().eq("phone_number", "0123456789");
        assert!(!query.matches(&doc));
    }

    #[test]
    fn test_query_is_case_sensitive() {
        let doc = document(json!({"first_name": "Patrick"}));
        assert!(!Query::new().eq("first_name", "patrick").matches(&doc));
    }
}
