//! Input checks applied before any storage call.

use super::error::ValidationError;

/// Minimum phrase length in characters, after trimming.
pub const MIN_PHRASE_LENGTH: usize = 3;

/// Maximum phrase length in characters, after trimming.
pub const MAX_PHRASE_LENGTH: usize = 500;

/// Validates phrase text and returns the trimmed form.
///
/// # Errors
///
/// Returns [`ValidationError::Empty`], [`ValidationError::TooShort`] or
/// [`ValidationError::TooLong`].
///
/// # Examples
///
/// ```
/// use phrasekeeper::domain::validation::validate_text;
///
/// assert_eq!(validate_text("  hello  "), Ok("hello"));
/// assert!(validate_text("ab").is_err());
/// ```
pub fn validate_text(text: &str) -> Result<&str, ValidationError> {
    let trimmed = text.trim();
    let len = trimmed.chars().count();

    if len == 0 {
        return Err(ValidationError::Empty);
    }
    if len < MIN_PHRASE_LENGTH {
        return Err(ValidationError::TooShort {
            min: MIN_PHRASE_LENGTH,
        });
    }
    if len > MAX_PHRASE_LENGTH {
        return Err(ValidationError::TooLong {
            max: MAX_PHRASE_LENGTH,
        });
    }

    Ok(trimmed)
}

/// Validates a phrase identifier.
///
/// # Errors
///
/// Returns [`ValidationError::InvalidId`] for empty or whitespace-only ids.
pub fn validate_id(id: &str) -> Result<(), ValidationError> {
    if id.trim().is_empty() {
        return Err(ValidationError::InvalidId);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_and_blank_text() {
        assert_eq!(validate_text(""), Err(ValidationError::Empty));
        assert_eq!(validate_text(" \t\n "), Err(ValidationError::Empty));
    }

    #[test]
    fn enforces_length_bounds() {
        assert_eq!(
            validate_text(" ab "),
            Err(ValidationError::TooShort { min: 3 })
        );
        assert_eq!(validate_text("abc"), Ok("abc"));

        let max = "a".repeat(MAX_PHRASE_LENGTH);
        assert_eq!(validate_text(&max), Ok(max.as_str()));

        let over = "a".repeat(MAX_PHRASE_LENGTH + 1);
        assert_eq!(
            validate_text(&over),
            Err(ValidationError::TooLong { max: 500 })
        );
    }

    #[test]
    fn counts_characters_not_bytes() {
        let accented = "é".repeat(MAX_PHRASE_LENGTH);
        assert!(validate_text(&accented).is_ok());
    }

    #[test]
    fn error_messages_name_the_bound() {
        assert!(ValidationError::TooShort { min: 3 }
            .to_string()
            .contains("at least 3 characters"));
        assert!(ValidationError::TooLong { max: 500 }
            .to_string()
            .contains("500 characters"));
    }

    #[test]
    fn rejects_blank_ids() {
        assert_eq!(validate_id(""), Err(ValidationError::InvalidId));
        assert_eq!(validate_id("   "), Err(ValidationError::InvalidId));
        assert_eq!(validate_id("1700-abc"), Ok(()));
    }
}
