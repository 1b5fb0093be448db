//! Path utilities for locating the data directory.
//!
//! Environment lookups are split from the pure path logic so the rules can be
//! tested without touching the process environment.

use std::env;
use std::path::PathBuf;

const APP_DIR: &str = "phrasekeeper";

/// Returns the directory phrase data and logs are stored in.
///
/// Resolution order:
/// 1. `$XDG_DATA_HOME/phrasekeeper` when `XDG_DATA_HOME` is set and non-empty
/// 2. `$HOME/.local/share/phrasekeeper`
/// 3. `./phrasekeeper` when neither variable is available
#[must_use]
pub fn default_data_dir() -> PathBuf {
    resolve_data_dir(
        env::var("XDG_DATA_HOME").ok().as_deref(),
        env::var("HOME").ok().as_deref(),
    )
}

fn resolve_data_dir(xdg_data_home: Option<&str>, home: Option<&str>) -> PathBuf {
    if let Some(xdg) = xdg_data_home.filter(|s| !s.is_empty()) {
        return PathBuf::from(xdg).join(APP_DIR);
    }
    home.filter(|s| !s.is_empty()).map_or_else(
        || PathBuf::from(APP_DIR),
        |home| PathBuf::from(home).join(".local").join("share").join(APP_DIR),
    )
}

/// Expands a leading `~` to the current user's home directory.
///
/// Paths without a leading `~`, and all paths when `$HOME` is unset, are
/// returned unchanged.
///
/// # Examples
///
/// ```
/// use phrasekeeper::infrastructure::expand_tilde;
///
/// assert_eq!(expand_tilde("/absolute/path"), "/absolute/path");
/// assert_eq!(expand_tilde("relative/~"), "relative/~");
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> String {
    expand_tilde_with(path, env::var("HOME").ok().as_deref())
}

fn expand_tilde_with(path: &str, home: Option<&str>) -> String {
    let Some(home) = home.filter(|h| !h.is_empty()) else {
        return path.to_string();
    };

    if path == "~" {
        home.to_string()
    } else if let Some(rest) = path.strip_prefix("~/") {
        format!("{}/{rest}", home.trim_end_matches('/'))
    } else {
        path.to_string()
    }
}
