//! Phrase domain model.
//!
//! A [`Phrase`] is the persisted unit: a short piece of text with an opaque id
//! and creation timestamp. Phrases are immutable once created; [`Phrase::update`]
//! produces a new value that keeps the identity and creation time.

use serde::{Deserialize, Serialize};

/// Number of milliseconds in one minute.
const MILLIS_PER_MINUTE: i64 = 60_000;

/// Number of milliseconds in one hour.
const MILLIS_PER_HOUR: i64 = 3_600_000;

/// Number of milliseconds in one day.
const MILLIS_PER_DAY: i64 = 86_400_000;

/// Length of the random suffix in generated ids.
const ID_SUFFIX_LEN: usize = 9;

/// A stored text snippet.
///
/// # Fields
///
/// - `id`: Opaque unique identifier
/// - `text`: Trimmed phrase text
/// - `created_at`: Unix timestamp in milliseconds, orders phrases newest first
/// - `updated_at`: Unix timestamp in milliseconds of the last edit, if any
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Phrase {
    pub id: String,
    pub text: String,
    pub created_at: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}

impl Phrase {
    /// Creates a phrase with explicit fields.
    ///
    /// Useful for tests and for rebuilding phrases from storage. Prefer
    /// [`Phrase::create`] for new user input.
    #[must_use]
    pub fn new(id: impl Into<String>, text: impl Into<String>, created_at: i64) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            created_at,
            updated_at: None,
        }
    }

    /// Creates a new phrase from user text, stamping id and creation time.
    ///
    /// The text is trimmed. Validation is the caller's job; see
    /// [`crate::domain::validation::validate_text`].
    ///
    /// # Examples
    ///
    /// ```
    /// use phrasekeeper::domain::Phrase;
    ///
    /// let phrase = Phrase::create("  hello there  ");
    /// assert_eq!(phrase.text, "hello there");
    /// assert!(phrase.updated_at.is_none());
    /// ```
    #[must_use]
    pub fn create(text: &str) -> Self {
        let now = now_millis();
        Self {
            id: generate_id(now),
            text: text.trim().to_string(),
            created_at: now,
            updated_at: None,
        }
    }

    /// Returns an edited copy that keeps `id` and `created_at`.
    #[must_use]
    pub fn update(&self, text: &str) -> Self {
        Self {
            id: self.id.clone(),
            text: text.trim().to_string(),
            created_at: self.created_at,
            updated_at: Some(now_millis()),
        }
    }

    /// Returns a short human-readable age relative to `now` (milliseconds).
    ///
    /// - Less than 1 minute: "just now"
    /// - Less than 1 hour: "Xm ago"
    /// - Less than 1 day: "Xh ago"
    /// - 1 day or more: "Xd ago"
    #[must_use]
    pub fn age_label(&self, now: i64) -> String {
        let diff = now.saturating_sub(self.created_at);

        if diff < MILLIS_PER_MINUTE {
            "just now".to_string()
        } else if diff < MILLIS_PER_HOUR {
            format!("{}m ago", diff / MILLIS_PER_MINUTE)
        } else if diff < MILLIS_PER_DAY {
            format!("{}h ago", diff / MILLIS_PER_HOUR)
        } else {
            format!("{}d ago", diff / MILLIS_PER_DAY)
        }
    }
}

/// Current Unix time in milliseconds.
#[must_use]
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}

fn generate_id(now: i64) -> String {
    let suffix: String = uuid::Uuid::new_v4()
        .simple()
        .to_string()
        .chars()
        .take(ID_SUFFIX_LEN)
        .collect();
    format!("{now}-{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_trims_and_stamps() {
        let before = now_millis();
        let phrase = Phrase::create("  keep me  ");
        assert_eq!(phrase.text, "keep me");
        assert!(phrase.created_at >= before);
        assert!(phrase.updated_at.is_none());
    }

    #[test]
    fn generated_ids_are_unique_and_shaped() {
        let a = Phrase::create("one phrase");
        let b = Phrase::create("one phrase");
        assert_ne!(a.id, b.id);

        let (millis, suffix) = a.id.split_once('-').expect("id has a separator");
        assert!(millis.parse::<i64>().is_ok());
        assert_eq!(suffix.len(), ID_SUFFIX_LEN);
        assert!(suffix.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn update_preserves_identity() {
        let original = Phrase::new("a", "first", 100);
        let edited = original.update(" second ");
        assert_eq!(edited.id, "a");
        assert_eq!(edited.created_at, 100);
        assert_eq!(edited.text, "second");
        assert!(edited.updated_at.is_some());
    }

    #[test]
    fn age_label_buckets() {
        let phrase = Phrase::new("a", "text", 0);
        assert_eq!(phrase.age_label(59_999), "just now");
        assert_eq!(phrase.age_label(5 * MILLIS_PER_MINUTE), "5m ago");
        assert_eq!(phrase.age_label(3 * MILLIS_PER_HOUR), "3h ago");
        assert_eq!(phrase.age_label(7 * MILLIS_PER_DAY), "7d ago");
    }

    #[test]
    fn age_label_survives_extreme_timestamps() {
        let ancient = Phrase::new("a", "text", i64::MIN);
        assert_eq!(ancient.age_label(1), format!("{}d ago", i64::MAX / MILLIS_PER_DAY));

        let future = Phrase::new("b", "text", i64::MAX);
        assert_eq!(future.age_label(-1), "just now");
        assert_eq!(future.age_label(0), "just now");
    }

    #[test]
    fn serializes_with_persisted_field_names() {
        let phrase = Phrase::new("1", "Hello", 100);
        let json = serde_json::to_value(&phrase).unwrap();
        assert_eq!(json, serde_json::json!({"id": "1", "text": "Hello", "createdAt": 100}));

        let back: Phrase =
            serde_json::from_str(r#"{"id":"2","text":"Hi","createdAt":5,"updatedAt":9}"#).unwrap();
        assert_eq!(back.updated_at, Some(9));
    }
}
