//! Storage layer for persisted phrases.
//!
//! The application depends only on [`PhraseStore`]. The shipped implementation
//! layers [`PhraseRepository`] over a string [`KeyValueStore`].
//!
//! # Modules
//!
//! - `backend`: Key-value trait abstraction
//! - `json`: JSON file backend with atomic writes
//! - `memory`: In-process backend
//! - `ordering`: Newest-first presentation order
//! - `repository`: Phrase list encoding and the `PhraseStore` contract

pub mod backend;
pub mod json;
pub mod memory;
pub mod ordering;
pub mod repository;

pub use backend::KeyValueStore;
pub use json::JsonFileStore;
pub use memory::MemoryStore;
pub use ordering::sort_newest_first;
pub use repository::{PhraseRepository, PhraseStore, STORAGE_KEY};
