//! Pure state transitions.
//!
//! [`reduce`] maps `(state, action)` to the next state with no side effects.
//! Storage lifecycle actions toggle `loading` and `error`; the search term and
//! error dismissal touch only their own field.
//!
//! Transitions that would not change the item list keep the existing shared
//! allocation, so downstream memoization stays valid.

use super::actions::Action;
use super::state::AppState;
use crate::domain::Phrase;
use std::sync::Arc;

/// Applies `action` to `state` and returns the next state.
///
/// | Action | Effect |
/// |--------|--------|
/// | `*Start` | `loading = true`, `error = None` |
/// | `LoadAllSuccess(items)` | `items` replaced, `loading = false`, `error = None` |
/// | `AddSuccess(p)` | `p` prepended, `loading = false`, `error = None` |
/// | `DeleteSuccess(id)` | phrases with `id` removed, `loading = false`, `error = None` |
/// | `ClearAllSuccess` | `items` emptied, `loading = false`, `error = None` |
/// | `*Error(e)` | `loading = false`, `error = Some(e)`, items untouched |
/// | `SetSearchTerm(t)` | `search_term = t` only |
/// | `ClearError` | `error = None` only |
///
/// # Example
///
/// ```rust
/// use phrasekeeper::app::{reduce, Action, AppState};
/// use phrasekeeper::domain::Phrase;
///
/// let state = reduce(AppState::default(), Action::AddSuccess(Phrase::new("a", "X", 100)));
/// let state = reduce(state, Action::DeleteStart);
/// let state = reduce(state, Action::DeleteSuccess("a".to_string()));
/// assert!(state.items.is_empty());
/// assert!(!state.loading);
/// ```
#[must_use]
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        Action::LoadAllStart | Action::AddStart | Action::DeleteStart | Action::ClearAllStart => {
            AppState {
                loading: true,
                error: None,
                ..state
            }
        }

        Action::LoadAllSuccess(items) => {
            let items = if *state.items == *items {
                tracing::debug!("loaded phrases unchanged, keeping current list");
                state.items
            } else {
                Arc::from(items)
            };
            AppState {
                items,
                loading: false,
                error: None,
                ..state
            }
        }

        Action::AddSuccess(phrase) => {
            let mut items: Vec<Phrase> = Vec::with_capacity(state.items.len() + 1);
            items.push(phrase);
            items.extend_from_slice(&state.items);
            AppState {
                items: Arc::from(items),
                loading: false,
                error: None,
                ..state
            }
        }

        Action::DeleteSuccess(id) => {
            let items: Arc<[Phrase]> = if state.items.iter().any(|p| p.id == id) {
                state
                    .items
                    .iter()
                    .filter(|p| p.id != id)
                    .cloned()
                    .collect::<Vec<_>>()
                    .into()
            } else {
                tracing::debug!(phrase_id = %id, "deleted phrase not in list");
                state.items
            };
            AppState {
                items,
                loading: false,
                error: None,
                ..state
            }
        }

        Action::ClearAllSuccess => {
            let items = if state.items.is_empty() {
                state.items
            } else {
                Arc::from(Vec::new())
            };
            AppState {
                items,
                loading: false,
                error: None,
                ..state
            }
        }

        Action::LoadAllError(error)
        | Action::AddError(error)
        | Action::DeleteError(error)
        | Action::ClearAllError(error) => AppState {
            loading: false,
            error: Some(error),
            ..state
        },

        Action::SetSearchTerm(term) => {
            if state.search_term == term {
                state
            } else {
                AppState {
                    search_term: term,
                    ..state
                }
            }
        }

        Action::ClearError => AppState {
            error: None,
            ..state
        },
    }
}
