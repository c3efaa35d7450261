//! File-backed document store.
//!
//! The whole file is loaded on open and rewritten after every mutation.
//! Layout (four-space indentation, key order not significant):
//!
//! ```json
//! {
//!     "_default": {
//!         "1": {
//!             "address": "1 rue du chemin, 75000 Paris",
//!             "first_name": "Patrick",
//!             "last_name": "Martin",
//!             "phone_number": "0123456789"
//!         }
//!     }
//! }
//! ```
//!
//! Tables other than the one opened are carried through untouched.

use crate::domain::DocId;
use crate::error::{StoreError, StoreResult};
use crate::store::traits::{Document, DocumentStore, Query};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use serde_json::{Map, Value};
use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Table used when none is named.
pub const DEFAULT_TABLE: &str = "_default";

const INDENT: &[u8] = b"    ";

/// A document store persisted as a pretty-printed JSON file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    table: String,
    documents: BTreeMap<DocId, Document>,
    other_tables: Map<String, Value>,
    next_id: Option<DocId>,
}

impl JsonFileStore {
    /// Open the default table of the file at `path`.
    ///
    /// A missing file is created with an empty table. An empty file is
    /// treated as an empty store.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        Self::open_table(path, DEFAULT_TABLE)
    }

    /// Open a named table of the file at `path`.
    ///
    /// # Errors
    ///
    /// - `StoreError::Io` if the file exists but cannot be read, or cannot be created.
    /// - `StoreError::Json` if the file is not valid JSON.
    /// - `StoreError::InvalidLayout` if the JSON is not a table of id-keyed objects.
    pub fn open_table(path: impl Into<PathBuf>, table: impl Into<String>) -> StoreResult<Self> {
        let path = path.into();
        let table = table.into();

        let (contents, existed) = match fs::read_to_string(&path) {
            Ok(contents) => (contents, true),
            Err(e) if e.kind() == ErrorKind::NotFound => (String::new(), false),
            Err(e) => return Err(e.into()),
        };

        let (documents, other_tables) = parse_layout(&contents, &table)?;
        let next_id = match documents.keys().next_back() {
            Some(highest) => highest.next(),
            None => Some(DocId::first()),
        };

        let store = Self {
            path,
            table,
            documents,
            other_tables,
            next_id,
        };

        if !existed {
            store.persist()?;
        }

        info!(
            path = %store.path.display(),
            table = %store.table,
            documents = store.documents.len(),
            "Opened JSON document store"
        );

        Ok(store)
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Name of the table this handle reads and writes.
    pub fn table(&self) -> &str {
        &self.table
    }

    /// Number of documents in the table.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Returns true if the table holds no document.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    fn render(&self) -> StoreResult<Vec<u8>> {
        let mut root = self.other_tables.clone();
        let table: Map<String, Value> = self
            .documents
            .iter()
            .map(|(id, document)| (id.to_string(), Value::Object(document.clone())))
            .collect();
        root.insert(self.table.clone(), Value::Object(table));

        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(INDENT));
        Value::Object(root).serialize(&mut serializer)?;
        Ok(buf)
    }

    /// Write the file through a temporary sibling and rename it into place.
    ///
    /// The temporary file is synced before the rename and removed if any
    /// step fails.
    fn persist(&self) -> StoreResult<()> {
        let bytes = self.render()?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let tmp = tmp_path(&self.path);
        let written = write_synced(&tmp, &bytes).and_then(|()| fs::rename(&tmp, &self.path));
        if let Err(err) = written {
            if let Err(cleanup) = fs::remove_file(&tmp) {
                if cleanup.kind() != ErrorKind::NotFound {
                    warn!(
                        path = %tmp.display(),
                        error = %cleanup,
                        "Could not remove temporary file"
                    );
                }
            }
            return Err(err.into());
        }
        Ok(())
    }
}

impl DocumentStore for JsonFileStore {
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
        self.documents.insert(id, document);

        if let Err(err) = self.persist() {
            self.documents.remove(&id);
            return Err(err);
        }
        self.next_id = id.next();

        debug!(doc_id = %id, path = %self.path.display(), "Inserted document");
        Ok(id)
    }

    fn remove(&mut self, ids: &[DocId]) -> StoreResult<Vec<DocId>> {
        let removed: Vec<(DocId, Document)> = ids
            .iter()
            .filter_map(|id| self.documents.remove_entry(id))
            .collect();

        if removed.is_empty() {
            return Ok(Vec::new());
        }

        if let Err(err) = self.persist() {
            self.documents.extend(removed);
            return Err(err);
        }

        let removed: Vec<DocId> = removed.into_iter().map(|(id, _)| id).collect();
        debug!(doc_ids = ?removed, path = %self.path.display(), "Removed documents");
        Ok(removed)
    }
}

type ParsedLayout = (BTreeMap<DocId, Document>, Map<String, Value>);

fn parse_layout(contents: &str, table: &str) -> StoreResult<ParsedLayout> {
    if contents.trim().is_empty() {
        return Ok((BTreeMap::new(), Map::new()));
    }

    let mut root = match serde_json::from_str::<Value>(contents)? {
        Value::Object(root) => root,
        _ => {
            return Err(StoreError::InvalidLayout(
                "expected a JSON object at the top level".to_string(),
            ))
        }
    };

    let entries = match root.remove(table) {
        None => Map::new(),
        Some(Value::Object(entries)) => entries,
        Some(_) => {
            return Err(StoreError::InvalidLayout(format!(
                "table `{}` is not an object",
                table
            )))
        }
    };

    let mut documents = BTreeMap::new();
    for (key, value) in entries {
        let id = key.parse::<DocId>().map_err(|_| {
            StoreError::InvalidLayout(format!(
                "document key `{}` in table `{}` is not a positive integer",
                key, table
            ))
        })?;

        match value {
            Value::Object(document) => {
                documents.insert(id, document);
            }
            _ => {
                return Err(StoreError::InvalidLayout(format!(
                    "document {} in table `{}` is not an object",
                    id, table
                )))
            }
        }
    }

    Ok((documents, root))
}

fn write_synced(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_else(|| OsString::from("db.json"));
    name.push(".tmp");
    path.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_contents() {
        let (documents, others) = parse_layout("  \n", DEFAULT_TABLE).unwrap();
        assert!(documents.is_empty());
        assert!(others.is_empty());
    }

    #[test]
    fn test_parse_keeps_other_tables() {
        let contents = r#"{"_default": {"2": {"first_name": "A"}}, "archive": {"1": {}}}"#;
        let (documents, others) = parse_layout(contents, DEFAULT_TABLE).unwrap();
        assert_eq!(documents.len(), 1);
        assert!(documents.contains_key(&DocId::new(2).unwrap()));
        assert!(others.contains_key("archive"));
    }

    #[test]
    fn test_parse_missing_table_is_empty() {
        let (documents, _) = parse_layout(r#"{"archive": {}}"#, DEFAULT_TABLE).unwrap();
        assert!(documents.is_empty());
    }

    #[test]
    fn test_parse_rejects_bad_layouts() {
        assert!(matches!(
            parse_layout("[]", DEFAULT_TABLE),
            Err(StoreError::InvalidLayout(_))
        ));
        assert!(matches!(
            parse_layout(r#"{"_default": []}"#, DEFAULT_TABLE),
            Err(StoreError::InvalidLayout(_))
        ));
        assert!(matches!(
            parse_layout(r#"{"_default": {"abc": {}}}"#, DEFAULT_TABLE),
            Err(StoreError::InvalidLayout(_))
        ));
        assert!(matches!(
            parse_layout(r#"{"_default": {"1": "text"}}"#, DEFAULT_TABLE),
            Err(StoreError::InvalidLayout(_))
        ));
        assert!(matches!(
            parse_layout("{not json", DEFAULT_TABLE),
            Err(StoreError::Json(_))
        ));
    }

    #[test]
    fn test_tmp_path_is_sibling() {
        let tmp = tmp_path(Path::new("/data/db.json"));
        assert_eq!(tmp, PathBuf::from("/data/db.json.tmp"));
    }
}
