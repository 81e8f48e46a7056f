//! Folder naming rules and the per-account default folder.

use crate::error::CoreError;

/// Name of the folder provisioned for every fresh account.
pub const DEFAULT_FOLDER_NAME: &str = "My Notes";

/// Maximum length of a folder name in characters.
pub const MAX_FOLDER_NAME_LENGTH: usize = 100;

/// Validate a folder name: required, non-blank, bounded.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    if name.trim().is_empty() {
        return Err(CoreError::Validation(
            "Folder name must not be empty".into(),
        ));
    }
    if name.chars().count() > MAX_FOLDER_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Folder name must be at most {MAX_FOLDER_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}
