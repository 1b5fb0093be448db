//! Phrase use cases over a storage collaborator.
//!
//! [`PhraseService`] validates input and then calls the [`PhraseStore`]. It
//! never touches application state; [`Session`](super::Session) turns its
//! results into actions.

use crate::domain::validation::{validate_id, validate_text};
use crate::domain::{Phrase, Result};
use crate::storage::PhraseStore;

/// Add, delete, load and clear operations with input validation.
///
/// # Example
///
/// ```rust
/// use phrasekeeper::app::PhraseService;
/// use phrasekeeper::storage::{MemoryStore, PhraseRepository};
///
/// let mut service = PhraseService::new(PhraseRepository::new(MemoryStore::new()));
/// let phrase = service.add_phrase("  remember the milk ")?;
/// assert_eq!(phrase.text, "remember the milk");
/// assert!(service.add_phrase("no").is_err());
/// # Ok::<(), phrasekeeper::PhraseError>(())
/// ```
#[derive(Debug)]
pub struct PhraseService<S> {
    store: S,
}

impl<S: PhraseStore> PhraseService<S> {
    /// Wraps a storage collaborator.
    #[must_use]
    pub const fn new(store: S) -> Self {
        Self { store }
    }

    /// Validates `text`, creates a phrase and stores it.
    ///
    /// # Errors
    ///
    /// Returns a validation error without calling storage, or the storage error.
    pub fn add_phrase(&mut self, text: &str) -> Result<Phrase> {
        let text = validate_text(text)?;
        let phrase = Phrase::create(text);
        tracing::debug!(phrase_id = %phrase.id, text_len = phrase.text.len(), "adding phrase");
        self.store.add(phrase)
    }

    /// Validates `id` and deletes the matching phrase.
    ///
    /// # Errors
    ///
    /// Returns a validation error for blank ids, or the storage error.
    pub fn delete_phrase(&mut self, id: &str) -> Result<()> {
        validate_id(id)?;
        tracing::debug!(phrase_id = %id, "deleting phrase");
        self.store.delete(id)
    }

    /// Loads every phrase, newest first.
    ///
    /// # Errors
    ///
    /// Returns the storage error.
    pub fn get_all_phrases(&self) -> Result<Vec<Phrase>> {
        self.store.get_all()
    }

    /// Removes every phrase.
    ///
    /// # Errors
    ///
    /// Returns the storage error.
    pub fn clear_all(&mut self) -> Result<()> {
        tracing::debug!("clearing all phrases");
        self.store.clear()
    }

    /// The wrapped collaborator.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    #[cfg(test)]
    pub(crate) fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }
}
