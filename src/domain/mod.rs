//! Domain layer for the phrase keeper.
//!
//! This module contains the core domain types, independent of storage or
//! presentation concerns.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`phrase`]: Phrase model and id generation
//! - [`validation`]: Length and identifier checks run before storage calls
//!
//! # Examples
//!
//! ```
//! use phrasekeeper::domain::{validation, Phrase, Result};
//!
//! fn create_phrase(text: &str) -> Result<Phrase> {
//!     let text = validation::validate_text(text)?;
//!     Ok(Phrase::create(text))
//! }
//!
//! assert!(create_phrase("  a useful snippet ").is_ok());
//! assert!(create_phrase("").is_err());
//! ```

pub mod error;
pub mod phrase;
pub mod validation;

pub use error::{PhraseError, Result, ValidationError};
pub use phrase::Phrase;
