//! Tracing initialization and subscriber setup.
//!
//! This module configures the tracing subscriber, wiring `tracing` macros to a
//! plain-text fmt layer that writes into a size-rotated log file.

use super::file_writer::RotatingFile;
use crate::Config;
use std::sync::Mutex;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initializes the tracing subscriber with file output.
///
/// Sets up a subscriber pipeline that:
/// 1. Filters events by `RUST_LOG`, else `config.trace_level`, else `"info"`
/// 2. Formats them as text without ANSI colors
/// 3. Appends them to [`Config::trace_path`], rotating at 10 MB with 3 backups
///
/// # Initialization Behavior
///
/// - Creates the log directory if it doesn't exist
/// - Silently does nothing if the directory cannot be created
/// - Idempotent: only the first call installs a subscriber
///
/// # Example
///
/// ```rust
/// use phrasekeeper::observability::init_tracing;
/// use phrasekeeper::Config;
///
/// let dir = tempfile::tempdir().unwrap();
/// let config = Config {
///     data_dir: dir.path().to_path_buf(),
///     trace_level: Some("debug".to_string()),
///     ..Default::default()
/// };
///
/// init_tracing(&config);
/// tracing::debug!("tracing is now active");
/// ```
pub fn init_tracing(config: &Config) {
    let level = config.trace_level.as_deref().unwrap_or("info");

    let trace_path = config.trace_path();
    if let Some(parent) = trace_path.parent() {
        if std::fs::create_dir_all(parent).is_err() {
            return;
        }
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .with_target(true)
        .with_writer(Mutex::new(RotatingFile::new(trace_path)));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
