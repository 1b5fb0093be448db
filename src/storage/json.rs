//! JSON file-based key-value backend.
//!
//! All entries live in one human-readable JSON file. Writes go to a temporary
//! file that is then renamed over the target, so the file on disk is never
//! half-written.
//!
//! # Performance Characteristics
//!
//! - **Read**: O(1) - the file is loaded into memory once
//! - **Write**: O(n) - every mutation rewrites the whole file
//! - **Best for**: a few keys holding modest values, infrequent writes

use crate::domain::error::{PhraseError, Result};
use crate::storage::backend::KeyValueStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// On-disk container format.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageData {
    /// Version of the file format.
    version: u32,

    /// Stored values by key.
    #[serde(default)]
    entries: BTreeMap<String, String>,
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            version: 1,
            entries: BTreeMap::new(),
        }
    }
}

/// JSON file key-value backend.
///
/// The whole map is kept in memory and persisted after every mutation. A
/// mutation whose write fails is rolled back, so memory never holds data the
/// file does not.
///
/// # File Format
///
/// ```json
/// {
///   "version": 1,
///   "entries": {
///     "phrasekeeper:phrases": "[{\"id\":\"1\",\"text\":\"Hello\",\"createdAt\":100}]"
///   }
/// }
/// ```
#[derive(Debug)]
pub struct JsonFileStore {
    /// Path to the JSON file on disk.
    file_path: PathBuf,

    /// In-memory copy, loaded on creation.
    data: StorageData,
}

impl JsonFileStore {
    /// Opens the store at `file_path`, creating parent directories as needed.
    ///
    /// A missing file is treated as an empty store; it is created on first write.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Parent directory creation fails
    /// - The file exists but contains invalid JSON
    /// - File permissions prevent reading
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use phrasekeeper::storage::JsonFileStore;
    /// use std::path::PathBuf;
    ///
    /// let store = JsonFileStore::new(PathBuf::from("/tmp/phrases.json"))?;
    /// # Ok::<(), Box<dyn std::error::Error>>(())
    /// ```
    pub fn new(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "initializing JSON store");

        if let Some(parent) = file_path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("no existing file, starting empty");
            StorageData::default()
        };

        tracing::debug!(entry_count = data.entries.len(), "JSON store initialized");

        Ok(Self {
            file_path,
            data,
        })
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<StorageData> {
        let contents = std::fs::read_to_string(path)?;
        let data: StorageData = serde_json::from_str(&contents)
            .map_err(|e| PhraseError::Storage(format!("failed to parse JSON: {e}")))?;

        tracing::debug!(
            version = data.version,
            entries = data.entries.len(),
            "loaded store data"
        );

        Ok(data)
    }

    /// Writes the map via temp file and rename.
    fn save_to_file(&self) -> Result<()> {
        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| PhraseError::Storage(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        if let Err(e) = std::fs::rename(&tmp_path, &self.file_path) {
            let _ = std::fs::remove_file(&tmp_path);
            return Err(e.into());
        }

        tracing::debug!(path = ?self.file_path, "store saved");
        Ok(())
    }

    /// Applies `mutate` to the entries and persists them, restoring the
    /// previous entries if the write fails.
    fn write_through(&mut self, mutate: impl FnOnce(&mut BTreeMap<String, String>)) -> Result<()> {
        let previous = self.data.entries.clone();
        mutate(&mut self.data.entries);

        if let Err(e) = self.save_to_file() {
            tracing::warn!(error = %e, "store write failed, rolling back");
            self.data.entries = previous;
            return Err(e);
        }
        Ok(())
    }
}

impl KeyValueStore for JsonFileStore {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.entries.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_set_item", key = %key, value_len = value.len()).entered();

        self.write_through(|entries| {
            entries.insert(key.to_string(), value.to_string());
        })
    }

    fn remove_item(&mut self, key: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_remove_item", key = %key).entered();

        if !self.data.entries.contains_key(key) {
            return Ok(());
        }
        self.write_through(|entries| {
            entries.remove(key);
        })
    }

    fn clear(&mut self) -> Result<()> {
        let _span = tracing::debug_span!("json_clear", entry_count = self.data.entries.len()).entered();

        self.write_through(BTreeMap::clear)
    }
}
