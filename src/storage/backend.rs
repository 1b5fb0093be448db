//! Key-value storage abstraction.
//!
//! This module defines the [`KeyValueStore`] trait, the narrow persistence
//! interface the phrase repository is written against. Backends store opaque
//! string values under string keys; encoding is the repository's concern.

use crate::domain::error::Result;

/// Abstraction over string key-value persistence backends.
///
/// # Implementations
///
/// - [`JsonFileStore`](crate::storage::JsonFileStore): one JSON file with atomic writes
/// - [`MemoryStore`](crate::storage::MemoryStore): in-process map
///
/// # Examples
///
/// ```
/// use phrasekeeper::storage::{KeyValueStore, MemoryStore};
///
/// let mut store = MemoryStore::default();
/// store.set_item("greeting", "hello")?;
/// assert_eq!(store.get_item("greeting")?.as_deref(), Some("hello"));
/// # Ok::<(), phrasekeeper::PhraseError>(())
/// ```
pub trait KeyValueStore: Send {
    /// Reads the value stored under `key`, or `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get_item(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn set_item(&mut self, key: &str, value: &str) -> Result<()>;

    /// Removes `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn remove_item(&mut self, key: &str) -> Result<()>;

    /// Removes every key.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    fn clear(&mut self) -> Result<()>;
}
