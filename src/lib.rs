//! Phrasekeeper: a personal text-snippet keeper with literal live search.
//!
//! Phrasekeeper provides:
//! - Short text phrases persisted to a JSON file with atomic writes
//! - Case-insensitive, literal substring search that is safe for any input
//! - A pure reducer over start / success / error actions with stale-data recovery
//! - Debounced search settling with cancellation on teardown
//! - Memoized filtering keyed on list identity and canonical term

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Shell (main.rs)                                    │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Session
//! │  - Action reducer                                   │  ← State machine
//! │  - Debounced search term                            │
//! │  - Validated use cases                              │
//! └─────────────────────────────────────────────────────┘
//!         │                                     │
//! ┌─────────────────────────┐   ┌─────────────────────────┐
//! │ Search Layer (search/)  │   │ Storage Layer (storage/)│
//! │ - Term normalization    │   │ - PhraseStore contract  │
//! │ - Literal matcher       │   │ - JSON file backend     │
//! │ - filter / count memo   │   │ - Newest-first order    │
//! └─────────────────────────┘   └─────────────────────────┘
//!         │                                     │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Data directory resolution (infrastructure/)      │
//! │  - Error types and validation (domain/)             │
//! │  - Phrase model (domain/phrase)                     │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing fmt layer into a rotating log file       │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Reducer, session controller and debounce primitive
//! - [`domain`]: Core domain types (Phrase, errors, validation)
//! - [`infrastructure`]: Platform paths
//! - [`search`]: Normalization, matching and selectors
//! - [`storage`]: Persistence contract and backends
//! - [`observability`]: Log subscriber setup
//!
//! # Configuration
//!
//! Configuration is read from an optional TOML file; every key has a default:
//!
//! ```toml
//! data_dir = "~/.local/share/phrasekeeper"
//! search_delay_ms = 300
//! trace_level = "debug"
//! trace_file = "/tmp/phrasekeeper.log"
//! ```
//!
//! # Examples
//!
//! ```rust
//! use phrasekeeper::{open_session, Config};
//! use std::time::{Duration, Instant};
//!
//! let dir = tempfile::tempdir()?;
//! let config = Config {
//!     data_dir: dir.path().to_path_buf(),
//!     ..Default::default()
//! };
//!
//! let mut session = open_session(&config)?;
//! session.add_phrase("Array [test] brackets").unwrap();
//! session.add_phrase("Hello world").unwrap();
//!
//! let now = Instant::now();
//! session.set_search_term("[test]", now);
//! session.tick(now + config.search_delay());
//! assert_eq!(session.visible()[0].text, "Array [test] brackets");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Key Design Decisions
//!
//! ## Literal Search
//!
//! The search term is whitespace-collapsed and case-folded, then compared as a
//! plain substring. Nothing is compiled from user input, so a term such as
//! `[test]` or `a+b(` matches its literal text at any length.
//!
//! ## Composite State
//!
//! `loading` and `error` sit next to `items` instead of replacing them, so a
//! failed reload keeps the last good list on screen.
//!
//! ## Shared Item Lists
//!
//! Items live in an `Arc<[Phrase]>`. Unchanged transitions keep the same
//! allocation and the filter memo keys on pointer identity.

pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod search;
pub mod storage;

pub use app::{reduce, Action, AppState, Session};
pub use domain::{Phrase, PhraseError, Result, ValidationError};

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;
use storage::{JsonFileStore, PhraseRepository};

/// Default quiet period before a search term settles.
pub const DEFAULT_SEARCH_DELAY_MS: u64 = 300;

const STORAGE_FILE: &str = "phrases.json";
const TRACE_FILE: &str = "phrasekeeper.log";

/// Runtime configuration.
///
/// Parsed from a TOML file with [`Config::from_file`] or from loose
/// `key=value` pairs with [`Config::from_map`]. Missing keys fall back to
/// [`Config::default`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Directory holding `phrases.json` and, by default, the log file.
    ///
    /// Default: `$XDG_DATA_HOME/phrasekeeper` or `~/.local/share/phrasekeeper`
    pub data_dir: PathBuf,

    /// Quiet period in milliseconds before search input filters the list.
    ///
    /// Default: `300`
    pub search_delay_ms: u64,

    /// Tracing level filter.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`
    pub trace_level: Option<String>,

    /// Log file path. Default: `<data_dir>/phrasekeeper.log`
    pub trace_file: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: infrastructure::default_data_dir(),
            search_delay_ms: DEFAULT_SEARCH_DELAY_MS,
            trace_level: None,
            trace_file: None,
        }
    }
}

impl Config {
    /// Parses configuration from a string map.
    ///
    /// # Parsing Rules
    ///
    /// - `data_dir`: path, `~` expanded
    /// - `search_delay_ms`: `u64` (falls back to 300 on parse error)
    /// - `trace_level`: String → `Option<String>`
    /// - `trace_file`: path → `Option<String>`, `~` expanded
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use phrasekeeper::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("data_dir".to_string(), "/tmp/phrases".to_string());
    /// map.insert("search_delay_ms".to_string(), "soon".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.data_dir.to_str(), Some("/tmp/phrases"));
    /// assert_eq!(config.search_delay_ms, 300);
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let data_dir = config
            .get("data_dir")
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map_or_else(infrastructure::default_data_dir, |s| {
                PathBuf::from(infrastructure::expand_tilde(s))
            });

        let search_delay_ms = config
            .get("search_delay_ms")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_SEARCH_DELAY_MS);

        Self {
            data_dir,
            search_delay_ms,
            trace_level: config.get("trace_level").cloned(),
            trace_file: config.get("trace_file").map(|s| infrastructure::expand_tilde(s)),
        }
    }

    /// Reads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`PhraseError::Io`] if the file cannot be read and
    /// [`PhraseError::Config`] if it is not valid TOML for this structure.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parses configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`PhraseError::Config`] on malformed input.
    ///
    /// # Example
    ///
    /// ```rust
    /// use phrasekeeper::Config;
    ///
    /// let config = Config::from_toml("search_delay_ms = 50\ntrace_level = \"debug\"")?;
    /// assert_eq!(config.search_delay_ms, 50);
    /// assert_eq!(config.trace_level.as_deref(), Some("debug"));
    /// # Ok::<(), phrasekeeper::PhraseError>(())
    /// ```
    pub fn from_toml(content: &str) -> Result<Self> {
        let mut config: Self =
            toml::from_str(content).map_err(|e| PhraseError::Config(e.to_string()))?;

        if let Some(dir) = config.data_dir.to_str() {
            config.data_dir = PathBuf::from(infrastructure::expand_tilde(dir));
        }
        config.trace_file = config.trace_file.map(|f| infrastructure::expand_tilde(&f));
        Ok(config)
    }

    /// Search settle delay as a [`Duration`].
    #[must_use]
    pub const fn search_delay(&self) -> Duration {
        Duration::from_millis(self.search_delay_ms)
    }

    /// Location of the phrase store file.
    #[must_use]
    pub fn storage_path(&self) -> PathBuf {
        self.data_dir.join(STORAGE_FILE)
    }

    /// Location of the log file.
    #[must_use]
    pub fn trace_path(&self) -> PathBuf {
        self.trace_file
            .as_ref()
            .map_or_else(|| self.data_dir.join(TRACE_FILE), PathBuf::from)
    }
}

/// Opens the on-disk store described by `config` and loads it into a session.
///
/// A failed initial load is logged and recorded in the session state rather
/// than returned, so the caller still gets a usable session.
///
/// # Errors
///
/// Returns an error if the data directory cannot be created or the store file
/// exists but cannot be parsed.
pub fn open_session(config: &Config) -> Result<Session<PhraseRepository<JsonFileStore>>> {
    tracing::debug!(data_dir = %config.data_dir.display(), "opening phrase store");

    let backend = JsonFileStore::new(config.storage_path())?;
    let mut session = Session::new(PhraseRepository::new(backend), config.search_delay());

    if let Err(e) = session.load_all() {
        tracing::warn!(error = %e, "initial load failed");
    }
    Ok(session)
}
