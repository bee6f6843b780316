//! # JSON Document File Store
//!
//! Persists records in a single JSON file, grouped into named tables. Each table maps an
//! internal document number to a record:
//!
//! ```text
//! {"_default": {"1": {"id": 0, "name": "Lamp", "price": 30},
//!               "2": {"id": 1, "name": "Desk", "price": 120}}}
//! ```
//!
//! Document numbers only give the storage order; they are never exposed. A store works on
//! one table and writes any other tables found in the file back unchanged.
//!
//! ## Durability
//!
//! The file is read once in [`JsonFileStore::open`]. Every mutation that changes the table
//! rewrites the whole file through a temporary sibling (write, fsync, rename). The new
//! table is only committed in memory after the rename succeeds, so a failed write leaves
//! the store exactly as it was.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use super::{RecordStore, StoreError};
use crate::framework::ActorEntity;

/// Table used when none is named, matching the conventional document-file layout.
pub const DEFAULT_TABLE: &str = "_default";

/// [`RecordStore`] persisted to a JSON document file.
#[derive(Debug)]
pub struct JsonFileStore<T> {
    path: PathBuf,
    table: String,
    documents: BTreeMap<u64, T>,
    other_tables: Map<String, Value>,
}

impl<T> JsonFileStore<T>
where
    T: ActorEntity + Serialize + DeserializeOwned,
{
    /// Opens the default table of the file at `path`. A missing or blank file is an
    /// empty store; the file is created on the first write.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        Self::open_table(path, DEFAULT_TABLE)
    }

    /// Opens the named table of the file at `path`.
    pub fn open_table(path: impl Into<PathBuf>, table: &str) -> Result<Self, StoreError> {
        let path = path.into();
        let mut tables = read_tables(&path)?;
        let documents = match tables.remove(table) {
            Some(raw) => decode_table(table, raw)?,
            None => BTreeMap::new(),
        };
        info!(path = %path.display(), table, records = documents.len(), "Opened document store");
        Ok(Self {
            path,
            table: table.to_string(),
            documents,
            other_tables: tables,
        })
    }

    /// Location of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn next_document_number(&self) -> u64 {
        self.documents.keys().next_back().map_or(1, |last| last + 1)
    }

    fn commit(&mut self, documents: BTreeMap<u64, T>) -> Result<(), StoreError> {
        let mut tables = self.other_tables.clone();
        let mut encoded = Map::new();
        for (number, record) in &documents {
            encoded.insert(number.to_string(), serde_json::to_value(record)?);
        }
        tables.insert(self.table.clone(), Value::Object(encoded));
        let bytes = serde_json::to_vec(&Value::Object(tables))?;
        write_atomic(&self.path, &bytes)?;
        debug!(path = %self.path.display(), records = documents.len(), "Wrote document store");
        self.documents = documents;
        Ok(())
    }
}

impl<T> RecordStore<T> for JsonFileStore<T>
where
    T: ActorEntity + Serialize + DeserializeOwned,
{
    fn all(&self) -> Result<Vec<T>, StoreError> {
        Ok(self.documents.values().cloned().collect())
    }

    fn find_by_id(&self, id: &T::Id) -> Result<Option<T>, StoreError> {
        Ok(self.documents.values().find(|r| r.id() == id).cloned())
    }

    fn insert(&mut self, record: T) -> Result<(), StoreError> {
        let mut documents = self.documents.clone();
        documents.insert(self.next_document_number(), record);
        self.commit(documents)
    }

    fn update_by_id(&mut self, id: &T::Id, record: T) -> Result<usize, StoreError> {
        let mut documents = self.documents.clone();
        let mut replaced = 0;
        for slot in documents.values_mut().filter(|r| r.id() == id) {
            *slot = record.clone();
            replaced += 1;
        }
        if replaced > 0 {
            self.commit(documents)?;
        }
        Ok(replaced)
    }

    fn delete_by_id(&mut self, id: &T::Id) -> Result<usize, StoreError> {
        let mut documents = self.documents.clone();
        documents.retain(|_, r| r.id() != id);
        let removed = self.documents.len() - documents.len();
        if removed > 0 {
            self.commit(documents)?;
        }
        Ok(removed)
    }

    fn len(&self) -> usize {
        self.documents.len()
    }
}

fn read_tables(path: &Path) -> Result<Map<String, Value>, StoreError> {
    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Map::new()),
        Err(e) => return Err(e.into()),
    };
    if raw.trim().is_empty() {
        return Ok(Map::new());
    }
    match serde_json::from_str::<Value>(&raw)? {
        Value::Object(tables) => Ok(tables),
        other => Err(StoreError::Malformed(format!(
            "expected an object of tables, found {}",
            json_kind(&other)
        ))),
    }
}

fn decode_table<T: DeserializeOwned>(
    table: &str,
    raw: Value,
) -> Result<BTreeMap<u64, T>, StoreError> {
    let entries = match raw {
        Value::Object(entries) => entries,
        other => {
            return Err(StoreError::Malformed(format!(
                "table {table} is {}, expected an object",
                json_kind(&other)
            )))
        }
    };
    let mut documents = BTreeMap::new();
    for (key, value) in entries {
        let number = key.parse::<u64>().map_err(|_| {
            StoreError::Malformed(format!("table {table} has non-numeric document key {key:?}"))
        })?;
        documents.insert(number, serde_json::from_value(value)?);
    }
    Ok(documents)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let mut tmp_path = path.as_os_str().to_owned();
    tmp_path.push(".tmp");
    PathBuf::from(tmp_path)
}

/// Atomic write: temp + fsync + rename. The temp file never outlives a failed attempt.
fn write_atomic(path: &Path, bytes: &[u8]) -> io::Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }
    let tmp_path = temp_path(path);
    let result = write_then_rename(&tmp_path, path, bytes);
    if result.is_err() {
        if let Err(e) = fs::remove_file(&tmp_path) {
            if e.kind() != io::ErrorKind::NotFound {
                warn!(path = %tmp_path.display(), error = %e, "Failed to remove temp file");
            }
        }
    }
    result
}

fn write_then_rename(tmp_path: &Path, path: &Path, bytes: &[u8]) -> io::Result<()> {
    {
        let mut file = fs::File::create(tmp_path)?;
        file.write_all(bytes)?;
        file.sync_all()?;
    }
    fs::rename(tmp_path, path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Product, ProductId};
    use tempfile::tempdir;

    fn product(id: u64, name: &str, price: i64) -> Product {
        Product::new(ProductId(id), name, price)
    }

    #[test]
    fn test_missing_file_opens_empty() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::<Product>::open(dir.path().join("database.json")).unwrap();
        assert!(store.is_empty());
        assert!(!store.path().exists(), "nothing is written until a mutation");
    }

    #[test]
    fn test_blank_file_opens_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("database.json");
        fs::write(&path, "\n").unwrap();
        let store = JsonFileStore::<Product>::open(&path).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_records_survive_reopen_in_storage_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("database.json");
        {
            let mut store = JsonFileStore::open(&path).unwrap();
            store.insert(product(5, "Lamp", 30)).unwrap();
            store.insert(product(2, "Desk", 120)).unwrap();
            store.insert(product(9, "Chair", 80)).unwrap();
            store.delete_by_id(&ProductId(2)).unwrap();
            store.update_by_id(&ProductId(5), product(5, "Lamp XL", 45)).unwrap();
        }

        let reopened = JsonFileStore::<Product>::open(&path).unwrap();
        assert_eq!(
            reopened.all().unwrap(),
            vec![product(5, "Lamp XL", 45), product(9, "Chair", 80)]
        );
    }

    #[test]
    fn test_file_layout_uses_default_table_and_document_numbers() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("database.json");
        let mut store = JsonFileStore::open(&path).unwrap();
        store.insert(product(0, "Lamp", 30)).unwrap();
        store.insert(product(1, "Desk", 120)).unwrap();

        let on_disk: Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(
            on_disk,
            serde_json::json!({
                "_default": {
                    "1": {"id": 0, "name": "Lamp", "price": 30},
                    "2": {"id": 1, "name": "Desk", "price": 120}
                }
            })
        );
    }

    #[test]
    fn test_document_numbers_continue_after_deleting_the_tail() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("database.json");
        let mut store = JsonFileStore::open(&path).unwrap();
        store.insert(product(0, "A", 1)).unwrap();
        store.insert(product(1, "B", 2)).unwrap();
        store.delete_by_id(&ProductId(0)).unwrap();
        store.insert(product(2, "C", 3)).unwrap();

        let on_disk: Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        let keys: Vec<&String> = on_disk["_default"].as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["2", "3"]);
    }

    #[test]
    fn test_other_tables_are_preserved() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("database.json");
        fs::write(&path, r#"{"audit": {"1": {"note": "keep me"}}, "_default": {}}"#).unwrap();

        let mut store = JsonFileStore::open(&path).unwrap();
        store.insert(product(0, "Lamp", 30)).unwrap();

        let on_disk: Value = serde_json::from_slice(&fs::read(&path).unwrap()).unwrap();
        assert_eq!(on_disk["audit"]["1"]["note"], "keep me");
        assert_eq!(on_disk["_default"]["1"]["name"], "Lamp");
    }

    #[test]
    fn test_noop_mutations_do_not_touch_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("database.json");
        let mut store = JsonFileStore::<Product>::open(&path).unwrap();
        assert_eq!(store.delete_by_id(&ProductId(1)).unwrap(), 0);
        assert_eq!(store.update_by_id(&ProductId(1), product(1, "X", 1)).unwrap(), 0);
        assert!(!path.exists());
    }

    #[test]
    fn test_malformed_file_is_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("database.json");
        fs::write(&path, "[1, 2, 3]").unwrap();
        let err = JsonFileStore::<Product>::open(&path).unwrap_err();
        assert!(matches!(err, StoreError::Malformed(_)), "got {err:?}");

        fs::write(&path, r#"{"_default": {"first": {"id": 0, "name": "A", "price": 1}}}"#)
            .unwrap();
        let err = JsonFileStore::<Product>::open(&path).unwrap_err();
        assert!(matches!(err, StoreError::Malformed(_)), "got {err:?}");
    }

    #[test]
    fn test_failed_write_leaves_store_unchanged() {
        let dir = tempdir().unwrap();
        let parent = dir.path().join("data");
        let mut store = JsonFileStore::<Product>::open(parent.join("database.json")).unwrap();
        // The parent directory is now a regular file, so every write fails.
        fs::write(&parent, "").unwrap();

        assert!(store.insert(product(0, "Lamp", 30)).is_err());
        assert!(store.is_empty());
    }

    #[test]
    fn test_failed_rename_removes_temp_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("database.json");
        let mut store = JsonFileStore::<Product>::open(&path).unwrap();
        // A directory now sits where the file should go, so the final rename fails.
        fs::create_dir(&path).unwrap();

        assert!(store.insert(product(0, "Lamp", 30)).is_err());
        assert!(store.is_empty());
        assert!(!temp_path(&path).exists(), "temp file left behind");
    }
}
