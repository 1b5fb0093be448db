//! Phrase persistence on top of a key-value backend.
//!
//! [`PhraseStore`] is the collaborator contract the application layer depends
//! on. [`PhraseRepository`] implements it by keeping the whole phrase list as a
//! JSON array under a single key.

use crate::domain::error::{PhraseError, Result};
use crate::domain::Phrase;
use crate::storage::backend::KeyValueStore;
use crate::storage::ordering::sort_newest_first;

/// Key under which the phrase list is stored.
pub const STORAGE_KEY: &str = "phrasekeeper:phrases";

/// Persistence contract for phrases.
///
/// Every operation reports failure as data; implementations must not panic.
pub trait PhraseStore: Send {
    /// Returns every stored phrase, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read or decoded.
    fn get_all(&self) -> Result<Vec<Phrase>>;

    /// Persists a new phrase and returns it.
    ///
    /// # Errors
    ///
    /// Returns an error if the read-modify-write fails.
    fn add(&mut self, phrase: Phrase) -> Result<Phrase>;

    /// Removes the phrase with `id`. Unknown ids are not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if the read-modify-write fails.
    fn delete(&mut self, id: &str) -> Result<()>;

    /// Removes every phrase.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend write fails.
    fn clear(&mut self) -> Result<()>;
}

/// [`PhraseStore`] over any [`KeyValueStore`].
///
/// # Examples
///
/// ```
/// use phrasekeeper::domain::Phrase;
/// use phrasekeeper::storage::{MemoryStore, PhraseRepository, PhraseStore};
///
/// let mut repo = PhraseRepository::new(MemoryStore::new());
/// repo.add(Phrase::new("1", "first", 1))?;
/// repo.add(Phrase::new("2", "second", 2))?;
/// assert_eq!(repo.get_all()?[0].id, "2");
/// # Ok::<(), phrasekeeper::PhraseError>(())
/// ```
#[derive(Debug)]
pub struct PhraseRepository<S> {
    backend: S,
}

impl<S: KeyValueStore> PhraseRepository<S> {
    /// Wraps a key-value backend.
    #[must_use]
    pub const fn new(backend: S) -> Self {
        Self { backend }
    }

    /// Returns the underlying backend.
    pub fn into_inner(self) -> S {
        self.backend
    }

    fn write_all(&mut self, phrases: &[Phrase]) -> Result<()> {
        let json = serde_json::to_string(phrases)
            .map_err(|e| PhraseError::Storage(format!("failed to encode phrases: {e}")))?;
        self.backend.set_item(STORAGE_KEY, &json)
    }
}

impl<S: KeyValueStore> PhraseStore for PhraseRepository<S> {
    fn get_all(&self) -> Result<Vec<Phrase>> {
        let _span = tracing::debug_span!("repo_get_all").entered();

        let Some(data) = self.backend.get_item(STORAGE_KEY)? else {
            tracing::debug!("no stored phrases");
            return Ok(Vec::new());
        };

        let mut phrases: Vec<Phrase> = serde_json::from_str(&data)
            .map_err(|e| PhraseError::Storage(format!("failed to decode phrases: {e}")))?;
        sort_newest_first(&mut phrases);

        tracing::debug!(count = phrases.len(), "retrieved phrases");
        Ok(phrases)
    }

    fn add(&mut self, phrase: Phrase) -> Result<Phrase> {
        let _span = tracing::debug_span!("repo_add", phrase_id = %phrase.id).entered();

        let mut phrases = self.get_all()?;
        phrases.push(phrase.clone());
        self.write_all(&phrases)?;

        tracing::debug!(count = phrases.len(), "phrase added");
        Ok(phrase)
    }

    fn delete(&mut self, id: &str) -> Result<()> {
        let _span = tracing::debug_span!("repo_delete", phrase_id = %id).entered();

        let mut phrases = self.get_all()?;
        let before = phrases.len();
        phrases.retain(|p| p.id != id);
        self.write_all(&phrases)?;

        tracing::debug!(removed = before - phrases.len(), "phrase deleted");
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        let _span = tracing::debug_span!("repo_clear").entered();
        self.backend.remove_item(STORAGE_KEY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn repo_with(phrases: &[Phrase]) -> PhraseRepository<MemoryStore> {
        let mut repo = PhraseRepository::new(MemoryStore::new());
        for phrase in phrases {
            repo.add(phrase.clone()).unwrap();
        }
        repo
    }

    #[test]
    fn empty_backend_yields_empty_list() {
        let repo = PhraseRepository::new(MemoryStore::new());
        assert!(repo.get_all().unwrap().is_empty());
    }

    #[test]
    fn get_all_returns_newest_first() {
        let repo = repo_with(&[
            Phrase::new("a", "alpha", 10),
            Phrase::new("c", "gamma", 30),
            Phrase::new("b", "beta", 20),
        ]);
        let ids: Vec<String> = repo.get_all().unwrap().into_iter().map(|p| p.id).collect();
        assert_eq!(ids, ["c", "b", "a"]);
    }

    #[test]
    fn delete_removes_only_matching_id() {
        let mut repo = repo_with(&[Phrase::new("a", "alpha", 1), Phrase::new("b", "beta", 2)]);
        repo.delete("a").unwrap();
        repo.delete("missing").unwrap();

        let remaining = repo.get_all().unwrap();
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].id, "b");
    }

    #[test]
    fn clear_removes_the_key() {
        let mut repo = repo_with(&[Phrase::new("a", "alpha", 1)]);
        repo.clear().unwrap();
        assert!(repo.get_all().unwrap().is_empty());
        assert!(repo.into_inner().is_empty());
    }

    #[test]
    fn undecodable_data_is_a_storage_error() {
        let mut backend = MemoryStore::new();
        backend.set_item(STORAGE_KEY, "not a list").unwrap();
        let mut repo = PhraseRepository::new(backend);

        assert!(matches!(repo.get_all(), Err(PhraseError::Storage(_))));
        assert!(matches!(
            repo.add(Phrase::new("x", "text", 1)),
            Err(PhraseError::Storage(_))
        ));
    }
}
