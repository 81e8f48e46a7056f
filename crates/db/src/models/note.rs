//! Note entity model and DTOs.

use memopad_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A note row from the `notes` table.
///
/// `folder_id = NULL` means unfiled.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Note {
    pub id: DbId,
    pub account_id: DbId,
    pub folder_id: Option<DbId>,
    pub title: Option<String>,
    pub content: String,
    pub color: String,
    pub pinned: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new note. When `color` is `None` the repository
/// stores the fixed default (`grey`).
#[derive(Debug, Deserialize)]
pub struct CreateNote {
    pub title: Option<String>,
    pub content: String,
    pub color: Option<String>,
    pub folder_id: Option<DbId>,
}

/// DTO for updating an existing note. `content` is required (an empty
/// body is rejected upstream); `title` overwrites unconditionally;
/// `color` and `folder_id` keep their current values when omitted.
#[derive(Debug, Deserialize)]
pub struct UpdateNote {
    pub title: Option<String>,
    pub content: String,
    pub color: Option<String>,
    pub folder_id: Option<DbId>,
}
