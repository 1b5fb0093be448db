//! Pure derived queries over a phrase collection.
//!
//! [`filter`] never reorders or mutates its input. Below the minimum-length
//! gate it returns the input slice itself, which lets callers skip work on a
//! cheap identity check. [`FilterMemo`] builds on that with shared lists.

use super::matcher::build_matcher;
use super::normalize::normalize;
use crate::domain::Phrase;
use std::borrow::Cow;
use std::sync::Arc;

/// Returns the phrases whose text contains `raw_term`, in original order.
///
/// When the canonical term is shorter than
/// [`MIN_SEARCH_LENGTH`](super::MIN_SEARCH_LENGTH) the input is returned
/// borrowed and unchanged. Never panics, whatever the term contains.
///
/// # Examples
///
/// ```
/// use phrasekeeper::domain::Phrase;
/// use phrasekeeper::search::filter;
/// use std::borrow::Cow;
///
/// let items = vec![
///     Phrase::new("1", "Hello world", 2),
///     Phrase::new("2", "Array [test] brackets", 1),
/// ];
///
/// assert_eq!(filter(&items, "[test]")[0].id, "2");
/// assert!(matches!(filter(&items, "z"), Cow::Borrowed(_)));
/// assert!(filter(&items, "xyz").is_empty());
/// ```
#[must_use]
pub fn filter<'a>(items: &'a [Phrase], raw_term: &str) -> Cow<'a, [Phrase]> {
    let Some(matcher) = build_matcher(raw_term) else {
        return Cow::Borrowed(items);
    };

    let _span = tracing::debug_span!("filter_phrases",
        total_phrases = items.len(),
        term_len = matcher.term().len()
    )
    .entered();

    let matched: Vec<Phrase> = items
        .iter()
        .filter(|phrase| matcher.is_match(&phrase.text))
        .cloned()
        .collect();

    tracing::debug!(matched_count = matched.len(), "search filter applied");
    Cow::Owned(matched)
}

/// Number of phrases in a collection.
#[must_use]
pub fn count(items: &[Phrase]) -> usize {
    items.len()
}

/// Returns `true` when the term is an active search and nothing matches.
///
/// Distinguishes a "no matches" result from a plain empty collection: below the
/// minimum-length gate this is always `false`. Filtering is idempotent, so
/// `items` may be the full collection or an already-filtered view.
#[must_use]
pub fn has_no_results(items: &[Phrase], raw_term: &str) -> bool {
    build_matcher(raw_term).is_some_and(|matcher| !items.iter().any(|p| matcher.is_match(&p.text)))
}

/// Single-entry cache for [`filter`] over shared phrase lists.
///
/// The cache key is the identity of the shared list (`Arc::ptr_eq`) plus the
/// canonical term, so recomputation happens only when the list is replaced or
/// the term changes meaningfully. Below the gate the input list itself is
/// returned.
#[derive(Debug, Default)]
pub struct FilterMemo {
    cached: Option<CachedFilter>,
    computations: u64,
}

#[derive(Debug)]
struct CachedFilter {
    source: Arc<[Phrase]>,
    term: String,
    result: Arc<[Phrase]>,
}

impl FilterMemo {
    /// Creates an empty memo.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the filtered view of `items` for `raw_term`, reusing the last
    /// result when the inputs are unchanged.
    pub fn select(&mut self, items: &Arc<[Phrase]>, raw_term: &str) -> Arc<[Phrase]> {
        let term = normalize(raw_term);

        if let Some(cached) = &self.cached {
            if Arc::ptr_eq(&cached.source, items) && cached.term == term {
                tracing::trace!("filter inputs unchanged, reusing cached view");
                return Arc::clone(&cached.result);
            }
        }

        self.computations += 1;
        let result = match filter(items, &term) {
            Cow::Borrowed(_) => Arc::clone(items),
            Cow::Owned(matched) => Arc::from(matched),
        };

        self.cached = Some(CachedFilter {
            source: Arc::clone(items),
            term,
            result: Arc::clone(&result),
        });
        result
    }

    /// Number of times the memo had to run the filter.
    #[must_use]
    pub const fn computations(&self) -> u64 {
        self.computations
    }

    /// Drops the cached view.
    pub fn invalidate(&mut self) {
        self.cached = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::MIN_SEARCH_LENGTH;
    use proptest::prelude::*;

    fn sample() -> Vec<Phrase> {
        vec![
            Phrase::new("1", "Hello world", 3),
            Phrase::new("2", "Array [test] brackets", 2),
            Phrase::new("3", "a (special) note", 1),
            Phrase::new("4", "special without parens", 0),
        ]
    }

    fn ids(items: &[Phrase]) -> Vec<&str> {
        items.iter().map(|p| p.id.as_str()).collect()
    }

    #[test]
    fn end_to_end_scenario() {
        let items = sample();
        assert_eq!(ids(&filter(&items, "[test]")), ["2"]);
        assert_eq!(ids(&filter(&items, "hello")), ["1"]);
        assert!(filter(&items, "xyz").is_empty());

        let unchanged = filter(&items, "z");
        assert!(matches!(unchanged, Cow::Borrowed(_)));
        assert!(std::ptr::eq(unchanged.as_ptr(), items.as_ptr()));
    }

    #[test]
    fn case_variants_agree() {
        let items = sample();
        let lower = filter(&items, "hello");
        assert_eq!(filter(&items, "HELLO"), lower);
        assert_eq!(filter(&items, "HeLLo"), lower);
    }

    #[test]
    fn literal_parentheses_match_only_literal_text() {
        let items = sample();
        assert_eq!(ids(&filter(&items, "(special)")), ["3"]);
    }

    #[test]
    fn preserves_relative_order() {
        let items = vec![
            Phrase::new("c", "shared word", 3),
            Phrase::new("b", "other", 2),
            Phrase::new("a", "SHARED too", 1),
        ];
        assert_eq!(ids(&filter(&items, "shared")), ["c", "a"]);
    }

    #[test]
    fn whitespace_runs_in_term_are_collapsed() {
        let items = sample();
        assert_eq!(ids(&filter(&items, "  hello \t  world ")), ["1"]);
    }

    #[test]
    fn count_and_no_results() {
        let items = sample();
        assert_eq!(count(&items), 4);
        assert_eq!(count(&[]), 0);

        assert!(has_no_results(&items, "xyz"));
        assert!(!has_no_results(&items, "hello"));
        assert!(!has_no_results(&items, "z"));
        assert!(!has_no_results(&[], "q"));
        assert!(has_no_results(&[], "query"));

        let filtered = filter(&items, "xyz");
        assert!(has_no_results(&filtered, "xyz"));
    }

    #[test]
    fn oversized_term_with_no_match_filters_everything_out() {
        let items = sample();
        for len in [10_000, 100_000, 1_000_000] {
            let term = "q".repeat(len);
            assert!(filter(&items, &term).is_empty());
            assert!(has_no_results(&items, &term));
        }
    }

    #[test]
    fn memo_returns_input_below_gate() {
        let items: Arc<[Phrase]> = Arc::from(sample());
        let mut memo = FilterMemo::new();
        let view = memo.select(&items, "h");
        assert!(Arc::ptr_eq(&view, &items));
    }

    #[test]
    fn memo_reuses_result_for_same_inputs() {
        let items: Arc<[Phrase]> = Arc::from(sample());
        let mut memo = FilterMemo::new();

        let first = memo.select(&items, "hello");
        let second = memo.select(&items, "  hello ");
        assert!(Arc::ptr_eq(&first, &second));
        assert_eq!(memo.computations(), 1);

        let other = memo.select(&items, "special");
        assert_eq!(ids(&other), ["3", "4"]);
        assert_eq!(memo.computations(), 2);
    }

    #[test]
    fn memo_recomputes_when_list_is_replaced() {
        let items: Arc<[Phrase]> = Arc::from(sample());
        let mut memo = FilterMemo::new();
        memo.select(&items, "hello");

        let replaced: Arc<[Phrase]> = Arc::from(sample());
        memo.select(&replaced, "hello");
        assert_eq!(memo.computations(), 2);

        memo.invalidate();
        memo.select(&replaced, "hello");
        assert_eq!(memo.computations(), 3);
    }

    proptest! {
        #![proptest_config(ProptestConfig { cases: 256, .. ProptestConfig::default() })]

        #[test]
        fn filter_never_panics(term in "\\PC*", texts in prop::collection::vec("\\PC{0,40}", 0..8)) {
            let items: Vec<Phrase> = texts
                .into_iter()
                .enumerate()
                .map(|(i, text)| Phrase::new(i.to_string(), text, i as i64))
                .collect();
            let _ = filter(&items, &term);
            let _ = has_no_results(&items, &term);
        }

        #[test]
        fn filter_never_panics_on_syntax_soup(term in r"[\(\)\[\]\{\}\*\+\?\$\^\|\\\.\-#&~ a-z]{0,24}") {
            let items = sample();
            let _ = filter(&items, &term);
        }

        #[test]
        fn filter_is_idempotent(term in "[a-z \\[\\]()*]{0,8}") {
            let items = sample();
            let once = filter(&items, &term).into_owned();
            let twice = filter(&once, &term).into_owned();
            prop_assert_eq!(once, twice);
        }

        #[test]
        fn normalize_is_idempotent(raw in "\\PC*|[ \t\n\r a-zA-Z]*") {
            let once = normalize(&raw);
            prop_assert_eq!(normalize(&once), once.clone());
            prop_assert_eq!(
                once.chars().filter(|c| !c.is_whitespace()).collect::<String>(),
                raw.chars().filter(|c| !c.is_whitespace()).collect::<String>()
            );
        }

        #[test]
        fn literal_term_matches_itself(term in "[ -~]{2,20}") {
            let canonical = normalize(&term);
            prop_assume!(canonical.chars().count() >= MIN_SEARCH_LENGTH);
            let items = vec![Phrase::new("x", canonical.clone(), 0)];
            prop_assert_eq!(filter(&items, &term).len(), 1);
        }
    }
}
