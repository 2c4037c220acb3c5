//! JSON file store.
//!
//! The file holds a single JSON object mapping string keys to string values.
//! Every `set` rewrites the whole file, so the on-disk state always matches
//! the last successful write.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::{KeyValueStore, StoreError};

/// File-backed store with an in-memory copy of its contents.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Open the store at `path`.
    ///
    /// A missing file is an empty store; the file is created on first `set`.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = if path.exists() {
            let content = fs::read_to_string(&path).map_err(|source| StoreError::Read {
                path: path.clone(),
                source,
            })?;
            if content.trim().is_empty() {
                BTreeMap::new()
            } else {
                serde_json::from_str(&content).map_err(|source| StoreError::Corrupt {
                    path: path.clone(),
                    source,
                })?
            }
        } else {
            BTreeMap::new()
        };

        Ok(Self { path, entries })
    }

    /// Default store location: `<data dir>/pacer/store.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|dir| dir.join("pacer").join("store.json"))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| StoreError::Write {
                path: self.path.clone(),
                source,
            })?;
        }
        let json = serde_json::to_string_pretty(&self.entries)?;
        fs::write(&self.path, json).map_err(|source| StoreError::Write {
            path: self.path.clone(),
            source,
        })
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush()
    }
}
