//! Actions driving the application state reducer.
//!
//! This module defines the [`Action`] type, the flat set of discrete events the
//! reducer understands. Storage-backed operations come in start / success /
//! error triples that mirror the shape of a [`PhraseStore`] result.
//!
//! [`PhraseStore`]: crate::storage::PhraseStore
//!
//! # Example
//!
//! ```rust
//! use phrasekeeper::app::{reduce, Action, AppState};
//! use phrasekeeper::domain::Phrase;
//!
//! let state = reduce(AppState::default(), Action::AddStart);
//! let state = reduce(state, Action::AddSuccess(Phrase::new("a", "X", 100)));
//! assert_eq!(state.items.len(), 1);
//! assert!(!state.loading);
//! ```

use crate::domain::{Phrase, PhraseError};
use std::sync::Arc;

/// Discrete state transitions.
///
/// No action is invalid in any state. Sequencing (for example never issuing
/// two overlapping `AddStart`s) is the dispatcher's responsibility.
#[derive(Debug, Clone)]
pub enum Action {
    /// A full reload from storage began.
    LoadAllStart,
    /// The reload finished with the stored phrases, newest first.
    LoadAllSuccess(Vec<Phrase>),
    /// The reload failed; current items stay visible.
    LoadAllError(Arc<PhraseError>),

    /// An add began.
    AddStart,
    /// The phrase was stored and goes to the front of the list.
    AddSuccess(Phrase),
    /// The add failed.
    AddError(Arc<PhraseError>),

    /// A delete began.
    DeleteStart,
    /// The phrase with this id was removed from storage.
    DeleteSuccess(String),
    /// The delete failed.
    DeleteError(Arc<PhraseError>),

    /// Removing every phrase began.
    ClearAllStart,
    /// Storage was emptied.
    ClearAllSuccess,
    /// Emptying storage failed.
    ClearAllError(Arc<PhraseError>),

    /// The raw search input changed. Never gated on loading or error.
    SetSearchTerm(String),
    /// The user dismissed the current error.
    ClearError,
}

impl Action {
    /// Stable name for logging.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::LoadAllStart => "load_all_start",
            Self::LoadAllSuccess(_) => "load_all_success",
            Self::LoadAllError(_) => "load_all_error",
            Self::AddStart => "add_start",
            Self::AddSuccess(_) => "add_success",
            Self::AddError(_) => "add_error",
            Self::DeleteStart => "delete_start",
            Self::DeleteSuccess(_) => "delete_success",
            Self::DeleteError(_) => "delete_error",
            Self::ClearAllStart => "clear_all_start",
            Self::ClearAllSuccess => "clear_all_success",
            Self::ClearAllError(_) => "clear_all_error",
            Self::SetSearchTerm(_) => "set_search_term",
            Self::ClearError => "clear_error",
        }
    }
}
