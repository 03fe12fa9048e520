//! JSON-file [`KeyValueStore`], the native counterpart of `localStorage`.

use std::{
    collections::BTreeMap,
    fs,
    path::{Path, PathBuf},
};

use byline_shared::{CacheError, KeyValueStore};

/// A flat `{ "key": "value" }` JSON object on disk.
///
/// Every call re-reads the file. A missing or malformed file reads as empty
/// and is replaced on the next write.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Store backed by `path`; the file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
        }
    }

    /// Backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> BTreeMap<String, String> {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return BTreeMap::new();
        };
        serde_json::from_str(&raw).unwrap_or_else(|err| {
            tracing::warn!("Ignoring unreadable cache file {}: {err}", self.path.display());
            BTreeMap::new()
        })
    }

    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), CacheError> {
        let raw =
            serde_json::to_string_pretty(entries).map_err(|e| CacheError::Encode(e.to_string()))?;
        if let Some(parent) = self.path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| CacheError::Write(e.to_string()))?;
        }
        fs::write(&self.path, raw).map_err(|e| CacheError::Write(e.to_string()))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_entries().remove(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CacheError> {
        let mut entries = self.read_entries();
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }

    fn remove(&self, key: &str) {
        let mut entries = self.read_entries();
        if entries.remove(key).is_some() {
            if let Err(err) = self.write_entries(&entries) {
                tracing::warn!("Could not update cache file {}: {err}", self.path.display());
            }
        }
    }
}
