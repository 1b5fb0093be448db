//! Literal, case-insensitive substring matcher built from raw user input.

use super::normalize::normalize;

/// Minimum canonical term length (in characters) before filtering applies.
///
/// Shorter terms leave the collection unfiltered, including exact one-character
/// matches.
pub const MIN_SEARCH_LENGTH: usize = 2;

/// Case-insensitive literal substring matcher.
///
/// The canonical term is case-folded once at construction. Matching folds the
/// candidate text the same way and searches for the folded term as plain
/// characters, so no input can turn into pattern syntax and construction
/// cannot fail however long the term is.
#[derive(Debug, Clone)]
pub struct Matcher {
    term: String,
    folded: String,
}

impl Matcher {
    /// Returns `true` if `text` contains the term, ignoring case.
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        fold_case(text).contains(&self.folded)
    }

    /// Canonical (normalized, unfolded) term this matcher searches for.
    #[must_use]
    pub fn term(&self) -> &str {
        &self.term
    }
}

/// Lowercases char by char.
///
/// Unlike [`str::to_lowercase`] the mapping ignores context (final sigma), so
/// a substring of `s` always folds to a substring of `fold_case(s)`.
fn fold_case(s: &str) -> String {
    s.chars().flat_map(char::to_lowercase).collect()
}

/// Returns `true` when the canonical form of `raw` is long enough to search.
#[must_use]
pub fn clears_gate(raw: &str) -> bool {
    normalize(raw).chars().count() >= MIN_SEARCH_LENGTH
}

/// Builds a matcher for a raw search term.
///
/// Returns `None` only when the canonical term is shorter than
/// [`MIN_SEARCH_LENGTH`].
///
/// # Examples
///
/// ```
/// use phrasekeeper::search::build_matcher;
///
/// assert!(build_matcher(" x ").is_none());
///
/// let matcher = build_matcher("(SPECIAL)").unwrap();
/// assert!(matcher.is_match("a (special) case"));
/// assert!(!matcher.is_match("special"));
/// ```
#[must_use]
pub fn build_matcher(raw: &str) -> Option<Matcher> {
    let term = normalize(raw);
    if term.chars().count() < MIN_SEARCH_LENGTH {
        return None;
    }

    let folded = fold_case(&term);
    Some(Matcher { term, folded })
}
