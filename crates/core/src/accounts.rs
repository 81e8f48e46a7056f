//! Account validation rules.

use crate::error::CoreError;

/// Maximum length of a username in characters.
pub const MAX_USERNAME_LENGTH: usize = 64;

/// Minimum length of a password at signup.
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Validate a username at signup: required, non-blank, bounded.
///
/// Usernames are compared case-sensitively; no normalization happens
/// here or in the store.
pub fn validate_username(username: &str) -> Result<(), CoreError> {
    if username.trim().is_empty() {
        return Err(CoreError::Validation("Username must not be empty".into()));
    }
    if username.chars().count() > MAX_USERNAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Username must be at most {MAX_USERNAME_LENGTH} characters"
        )));
    }
    if username.chars().any(char::is_whitespace) {
        return Err(CoreError::Validation(
            "Username must not contain whitespace".into(),
        ));
    }
    Ok(())
}
