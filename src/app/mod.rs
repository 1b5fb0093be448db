//! Application layer: state, actions, and the session that drives them.
//!
//! This module sits between the storage collaborator and any presentation
//! surface. All state changes flow in one direction:
//!
//! ```text
//! Entry point → Service call → Action → reduce() → AppState → Selectors → View
//!      ↑                                                                 │
//!      └──────────────────── user input (debounced search) ──────────────┘
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Discrete events understood by the reducer
//! - [`reducer`]: Pure `(state, action) -> state` transition function
//! - [`state`]: Application state snapshot with a shared item list
//! - [`debounce`]: Generation-counted value settling for search input
//! - [`service`]: Validated use cases over a [`PhraseStore`](crate::storage::PhraseStore)
//! - [`session`]: Controller that owns state and dispatches actions
//!
//! # Example
//!
//! ```rust
//! use phrasekeeper::app::{reduce, Action, AppState};
//! use phrasekeeper::domain::Phrase;
//!
//! let state = reduce(AppState::default(), Action::AddSuccess(Phrase::new("a", "X", 100)));
//! let state = reduce(state, Action::SetSearchTerm("x".to_string()));
//! assert_eq!(state.items.len(), 1);
//! assert_eq!(state.search_term, "x");
//! ```

pub mod actions;
pub mod debounce;
pub mod reducer;
pub mod service;
pub mod session;
pub mod state;

pub use actions::Action;
pub use debounce::{Debounced, SettleTicket};
pub use reducer::reduce;
pub use service::PhraseService;
pub use session::{Session, SessionResult};
pub use state::AppState;
