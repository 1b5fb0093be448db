//! Presentation order for stored phrases.
//!
//! Phrases are shown newest first. Storage appends in insertion order, so the
//! list is re-sorted on every read.

use crate::domain::Phrase;
use std::cmp::Reverse;

/// Sorts phrases by `created_at`, newest first.
///
/// The sort is stable: phrases created in the same millisecond keep their
/// stored relative order.
///
/// # Examples
///
/// ```
/// use phrasekeeper::domain::Phrase;
/// use phrasekeeper::storage::sort_newest_first;
///
/// let mut phrases = vec![Phrase::new("old", "old one", 1), Phrase::new("new", "new one", 2)];
/// sort_newest_first(&mut phrases);
/// assert_eq!(phrases[0].id, "new");
/// ```
pub fn sort_newest_first(phrases: &mut [Phrase]) {
    phrases.sort_by_key(|phrase| Reverse(phrase.created_at));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_keep_stored_order() {
        let mut phrases = vec![
            Phrase::new("a", "first", 5),
            Phrase::new("b", "second", 9),
            Phrase::new("c", "third", 5),
        ];
        sort_newest_first(&mut phrases);
        let ids: Vec<&str> = phrases.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, ["b", "a", "c"]);
    }
}
