//! Key/value persistence media
//!
//! The month store keeps its whole state as one text blob under one key.
//! Anything that can `get` and `set` a string by key can back it: a
//! directory of files on disk, or a map in memory for tests.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

use crate::error::LedgerError;

use super::file_io::{read_text_opt, write_atomic};

/// A key/value store of text values
pub trait KeyValueStore {
    /// Read the value under `key`, or `None` if nothing was ever stored
    fn get(&self, key: &str) -> Result<Option<String>, LedgerError>;

    /// Store `value` under `key`, replacing any previous value
    fn set(&self, key: &str, value: &str) -> Result<(), LedgerError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &str) -> Result<Option<String>, LedgerError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), LedgerError> {
        (**self).set(key, value)
    }
}

/// Stores each key as `<key>.json` inside a directory
///
/// Writes are atomic per key. There is no locking across processes.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir`; the directory is created on first write
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The directory holding the stored files
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: &str) -> Result<PathBuf, LedgerError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(LedgerError::Storage(format!("Invalid storage key '{}'", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, LedgerError> {
        read_text_opt(self.path_for(key)?)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), LedgerError> {
        write_atomic(self.path_for(key)?, value.as_bytes())
    }
}

/// In-process store, used by tests and embedders without a disk
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, LedgerError> {
        let values = self
            .values
            .read()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(values.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), LedgerError> {
        let mut values = self
            .values
            .write()
            .map_err(|e| LedgerError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        values.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_store_get_set() {
        let store = MemoryStore::new();
        assert!(store.get("financial_data").unwrap().is_none());

        store.set("financial_data", "{}").unwrap();
        assert_eq!(store.get("financial_data").unwrap().as_deref(), Some("{}"));

        store.set("financial_data", "{\"a\":1}").unwrap();
        assert_eq!(
            store.get("financial_data").unwrap().as_deref(),
            Some("{\"a\":1}")
        );
    }

    #[test]
    fn test_file_store_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().join("data"));

        assert!(store.get("financial_data").unwrap().is_none());
        store.set("financial_data", "{}").unwrap();

        assert!(temp_dir.path().join("data").join("financial_data.json").exists());
        assert_eq!(store.get("financial_data").unwrap().as_deref(), Some("{}"));
    }

    #[test]
    fn test_file_store_rejects_path_like_keys() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path());

        assert!(store.set("../escape", "{}").is_err());
        assert!(store.get("").is_err());
    }

    #[test]
    fn test_store_by_reference() {
        let store = MemoryStore::new();
        let by_ref = &store;
        by_ref.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }
}
