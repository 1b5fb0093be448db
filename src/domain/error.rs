//! Error types for the phrase keeper.
//!
//! This module defines the crate-wide error type [`PhraseError`], the local
//! [`ValidationError`] raised before any storage call, and a [`Result`] alias.
//! All errors are implemented using the `thiserror` crate.

use thiserror::Error;

/// Input rejected before it reaches the storage collaborator.
///
/// Validation errors are returned to the caller directly. They are never
/// stored in the application state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Phrase text is empty after trimming.
    #[error("Phrase cannot be empty")]
    Empty,

    /// Phrase text is shorter than the minimum length after trimming.
    #[error("Phrase must be at least {min} characters long")]
    TooShort {
        /// Minimum accepted length in characters.
        min: usize,
    },

    /// Phrase text is longer than the maximum length after trimming.
    #[error("Phrase cannot exceed {max} characters")]
    TooLong {
        /// Maximum accepted length in characters.
        max: usize,
    },

    /// Identifier passed to a delete is empty or whitespace.
    #[error("Invalid phrase ID")]
    InvalidId,
}

/// The main error type for phrase keeper operations.
///
/// Storage failures are surfaced verbatim in the application state; see
/// [`crate::app::AppState::error`].
///
/// # Examples
///
/// ```
/// use phrasekeeper::domain::{PhraseError, ValidationError};
///
/// let err = PhraseError::from(ValidationError::Empty);
/// assert_eq!(err.to_string(), "Phrase cannot be empty");
/// ```
#[derive(Debug, Error)]
pub enum PhraseError {
    /// Input failed a precondition.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Storage operation failed.
    ///
    /// Occurs when reading, decoding or writing persisted phrases fails.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration is invalid or unreadable.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl PhraseError {
    /// Returns `true` for errors raised by local input checks.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// A specialized `Result` type for phrase keeper operations.
pub type Result<T> = std::result::Result<T, PhraseError>;
