//! Infrastructure layer for filesystem and environment interactions.
//!
//! Resolves where phrase data and logs live on the host, following the XDG
//! base directory convention with a `$HOME` fallback.

pub mod paths;

pub use paths::{default_data_dir, expand_tilde};
