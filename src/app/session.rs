//! Session controller.
//!
//! [`Session`] owns one [`AppState`] and is the only place actions are
//! dispatched. Storage-backed entry points follow the same shape: validate,
//! dispatch the start action, call the collaborator, then dispatch success or
//! error from its result.
//!
//! Search input flows through two stages. [`Session::set_search_term`] stores
//! the raw text in state immediately so an input field can echo it, while the
//! filtered view follows a [`Debounced`] copy that settles only after typing
//! stops.

use super::actions::Action;
use super::debounce::{Debounced, SettleTicket};
use super::reducer::reduce;
use super::service::PhraseService;
use super::state::AppState;
use crate::domain::validation::{validate_id, validate_text};
use crate::domain::{Phrase, PhraseError};
use crate::search::{count, has_no_results, FilterMemo};
use crate::storage::PhraseStore;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Result of a session operation. The error is shared with the state.
pub type SessionResult<T> = std::result::Result<T, Arc<PhraseError>>;

/// Owns the state, the storage-backed service, the search debouncer and the
/// filter memo for one user session.
///
/// # Example
///
/// ```rust
/// use phrasekeeper::app::Session;
/// use phrasekeeper::storage::{MemoryStore, PhraseRepository};
/// use std::time::{Duration, Instant};
///
/// let mut session = Session::new(
///     PhraseRepository::new(MemoryStore::new()),
///     Duration::from_millis(300),
/// );
/// session.add_phrase("Hello world").unwrap();
/// session.add_phrase("Goodbye moon").unwrap();
///
/// let t0 = Instant::now();
/// session.set_search_term("hello", t0);
/// assert_eq!(session.count(), 2);
///
/// session.tick(t0 + Duration::from_millis(300));
/// assert_eq!(session.count(), 1);
/// assert_eq!(session.visible()[0].text, "Hello world");
/// ```
#[derive(Debug)]
pub struct Session<S> {
    state: AppState,
    service: PhraseService<S>,
    search: Debounced<String>,
    memo: FilterMemo,
}

impl<S: PhraseStore> Session<S> {
    /// Creates a session with empty state. Call [`load_all`](Self::load_all)
    /// to populate it from storage.
    #[must_use]
    pub fn new(store: S, search_delay: Duration) -> Self {
        Self {
            state: AppState::default(),
            service: PhraseService::new(store),
            search: Debounced::new(String::new(), search_delay),
            memo: FilterMemo::new(),
        }
    }

    /// Current state snapshot.
    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    /// The storage-backed service.
    #[must_use]
    pub const fn service(&self) -> &PhraseService<S> {
        &self.service
    }

    /// Runs `action` through the reducer.
    ///
    /// Returns `true` if the resulting state differs from the previous one
    /// under [`AppState::same_as`].
    pub fn dispatch(&mut self, action: Action) -> bool {
        let _span = tracing::debug_span!("dispatch", action = action.name()).entered();

        let previous = self.state.clone();
        self.state = reduce(std::mem::take(&mut self.state), action);

        let changed = !self.state.same_as(&previous);
        if !changed {
            tracing::trace!("state unchanged");
        }
        changed
    }

    /// Reloads every phrase from storage.
    ///
    /// # Errors
    ///
    /// Returns the storage error, which is also recorded in state. Items loaded
    /// earlier stay visible.
    pub fn load_all(&mut self) -> SessionResult<usize> {
        self.dispatch(Action::LoadAllStart);
        match self.service.get_all_phrases() {
            Ok(phrases) => {
                let loaded = phrases.len();
                self.dispatch(Action::LoadAllSuccess(phrases));
                tracing::info!(count = loaded, "phrases loaded");
                Ok(loaded)
            }
            Err(e) => Err(self.fail(e, Action::LoadAllError)),
        }
    }

    /// Validates and stores a new phrase, then puts it at the front of the list.
    ///
    /// # Errors
    ///
    /// Invalid text is rejected before anything is dispatched and leaves the
    /// state untouched. A storage failure is recorded in state.
    pub fn add_phrase(&mut self, text: &str) -> SessionResult<Phrase> {
        validate_text(text).map_err(|e| Arc::new(PhraseError::from(e)))?;

        self.dispatch(Action::AddStart);
        match self.service.add_phrase(text) {
            Ok(phrase) => {
                self.dispatch(Action::AddSuccess(phrase.clone()));
                tracing::info!(phrase_id = %phrase.id, "phrase added");
                Ok(phrase)
            }
            Err(e) => Err(self.fail(e, Action::AddError)),
        }
    }

    /// Deletes the phrase with `id` from storage and from the list.
    ///
    /// # Errors
    ///
    /// A blank id is rejected before anything is dispatched. A storage failure
    /// is recorded in state.
    pub fn delete_phrase(&mut self, id: &str) -> SessionResult<()> {
        validate_id(id).map_err(|e| Arc::new(PhraseError::from(e)))?;

        self.dispatch(Action::DeleteStart);
        match self.service.delete_phrase(id) {
            Ok(()) => {
                self.dispatch(Action::DeleteSuccess(id.to_string()));
                tracing::info!(phrase_id = %id, "phrase deleted");
                Ok(())
            }
            Err(e) => Err(self.fail(e, Action::DeleteError)),
        }
    }

    /// Removes every phrase.
    ///
    /// # Errors
    ///
    /// A storage failure is recorded in state and the list is kept.
    pub fn clear_all(&mut self) -> SessionResult<()> {
        self.dispatch(Action::ClearAllStart);
        match self.service.clear_all() {
            Ok(()) => {
                self.dispatch(Action::ClearAllSuccess);
                tracing::info!("all phrases cleared");
                Ok(())
            }
            Err(e) => Err(self.fail(e, Action::ClearAllError)),
        }
    }

    /// Records raw search input observed at `now`.
    ///
    /// The state's `search_term` changes immediately. The filtered view keeps
    /// using the previous settled term until the input has been quiet for the
    /// configured delay. Returns the ticket for a host timer, if the session
    /// is still live.
    pub fn set_search_term(&mut self, text: &str, now: Instant) -> Option<SettleTicket> {
        if self.search.is_torn_down() {
            tracing::trace!("search input after shutdown ignored");
            return None;
        }
        self.dispatch(Action::SetSearchTerm(text.to_string()));
        self.search.update(text.to_string(), now)
    }

    /// Settles the search term if its quiet period has elapsed by `now`.
    ///
    /// Returns `true` if the settled term changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let changed = self.search.poll(now);
        if changed {
            tracing::debug!(term_len = self.search.value().len(), "search term settled");
        }
        changed
    }

    /// Settles the search term for a host timer created from `ticket`.
    ///
    /// Stale tickets and tickets fired after [`shutdown`](Self::shutdown) do
    /// nothing.
    pub fn fire(&mut self, ticket: SettleTicket) -> bool {
        self.search.fire(ticket)
    }

    /// When the pending search term will settle, if one is waiting.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.search.deadline()
    }

    /// Quiet period before search input settles.
    #[must_use]
    pub const fn search_delay(&self) -> Duration {
        self.search.delay()
    }

    /// The search term the visible list is currently filtered by.
    #[must_use]
    pub fn settled_term(&self) -> &str {
        self.search.value()
    }

    /// Phrases matching the settled term, newest first.
    ///
    /// Repeated calls with an unchanged list and term return the same shared
    /// list without recomputing.
    pub fn visible(&mut self) -> Arc<[Phrase]> {
        self.memo.select(&self.state.items, self.search.value())
    }

    /// Number of visible phrases.
    pub fn count(&mut self) -> usize {
        count(&self.visible())
    }

    /// Returns `true` when an active search matches nothing.
    #[must_use]
    pub fn has_no_results(&self) -> bool {
        has_no_results(&self.state.items, self.search.value())
    }

    /// Dismisses the current error.
    pub fn clear_error(&mut self) -> bool {
        self.dispatch(Action::ClearError)
    }

    /// Ends the session: cancels any pending search settle and drops the memo.
    ///
    /// Later timers and ticks have no effect on the settled term.
    pub fn shutdown(&mut self) {
        tracing::debug!("session shutdown");
        self.search.teardown();
        self.memo.invalidate();
    }

    fn fail(
        &mut self,
        error: PhraseError,
        action: fn(Arc<PhraseError>) -> Action,
    ) -> Arc<PhraseError> {
        tracing::warn!(error = %error, "storage operation failed");
        let error = Arc::new(error);
        self.dispatch(action(Arc::clone(&error)));
        error
    }
}
