//! Application state snapshot.
//!
//! [`AppState`] is a composite record rather than a tagged state: items remain
//! available while a later operation is loading or has failed, so the last
//! good list can keep rendering.
//!
//! The item list is shared (`Arc<[Phrase]>`). Transitions that leave the list
//! alone keep the same allocation, which lets consumers detect "nothing
//! changed" with a pointer comparison.

use crate::domain::{Phrase, PhraseError};
use std::sync::Arc;

/// Central application state.
///
/// Mutated only through [`reduce`](super::reduce).
#[derive(Debug, Clone)]
pub struct AppState {
    /// All known phrases, newest first.
    pub items: Arc<[Phrase]>,

    /// Raw search input as typed, not canonicalized.
    pub search_term: String,

    /// `true` strictly between a start action and its success or error.
    pub loading: bool,

    /// Last storage failure, until cleared or superseded.
    pub error: Option<Arc<PhraseError>>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::with_items(Vec::new())
    }
}

impl AppState {
    /// Creates a state holding `items` with no search, not loading, no error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use phrasekeeper::app::AppState;
    ///
    /// let state = AppState::default();
    /// assert!(state.items.is_empty());
    /// assert!(state.search_term.is_empty());
    /// assert!(!state.loading);
    /// assert!(state.error.is_none());
    /// ```
    #[must_use]
    pub fn with_items(items: Vec<Phrase>) -> Self {
        Self {
            items: Arc::from(items),
            search_term: String::new(),
            loading: false,
            error: None,
        }
    }

    /// Shallow equality: same shared list, same term, same flags, same error
    /// instance.
    ///
    /// Used to suppress redundant updates without comparing phrase contents.
    #[must_use]
    pub fn same_as(&self, other: &Self) -> bool {
        let same_error = match (&self.error, &other.error) {
            (None, None) => true,
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        };

        Arc::ptr_eq(&self.items, &other.items)
            && self.search_term == other.search_term
            && self.loading == other.loading
            && same_error
    }

    /// Message of the current error, if any.
    #[must_use]
    pub fn error_message(&self) -> Option<String> {
        self.error.as_ref().map(ToString::to_string)
    }
}
