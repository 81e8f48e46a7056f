//! Note validation rules.

use crate::error::CoreError;

/// Maximum length of note content in characters.
pub const MAX_NOTE_CONTENT_LENGTH: usize = 10_000;

/// Maximum length of a note title in characters.
pub const MAX_NOTE_TITLE_LENGTH: usize = 200;

/// Validate note content: required, non-blank, bounded.
pub fn validate_content(content: &str) -> Result<(), CoreError> {
    if content.trim().is_empty() {
        return Err(CoreError::Validation(
            "Note content must not be empty".into(),
        ));
    }
    if content.chars().count() > MAX_NOTE_CONTENT_LENGTH {
        return Err(CoreError::Validation(format!(
            "Note content must be at most {MAX_NOTE_CONTENT_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Validate an optional note title.
pub fn validate_title(title: Option<&str>) -> Result<(), CoreError> {
    if let Some(title) = title {
        if title.chars().count() > MAX_NOTE_TITLE_LENGTH {
            return Err(CoreError::Validation(format!(
                "Note title must be at most {MAX_NOTE_TITLE_LENGTH} characters"
            )));
        }
    }
    Ok(())
}
