//! Search term canonicalization and pattern escaping.
//!
//! The built-in [`Matcher`](super::Matcher) compares folded text directly and
//! never compiles a pattern. [`escape_for_matching`] is for hosts that hand the
//! canonical term to a regex engine of their own, such as a highlighter.

/// Trims the term and collapses every whitespace run into a single space.
///
/// Case and all non-whitespace characters are preserved. The function is
/// idempotent.
///
/// # Examples
///
/// ```
/// use phrasekeeper::search::normalize;
///
/// assert_eq!(normalize("  Hello \t\n  World "), "Hello World");
/// assert_eq!(normalize(&normalize(" a  b ")), normalize(" a  b "));
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for word in raw.split_whitespace() {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(word);
    }
    out
}

/// Escapes every pattern-significant character so the result matches `s`
/// literally when compiled by the `regex` crate.
///
/// # Examples
///
/// ```
/// use phrasekeeper::search::escape_for_matching;
///
/// assert_eq!(escape_for_matching("(a+b)"), r"\(a\+b\)");
/// ```
#[must_use]
pub fn escape_for_matching(s: &str) -> String {
    regex::escape(s)
}
