//! Folder entity model and DTOs.

use memopad_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A folder row from the `folders` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Folder {
    pub id: DbId,
    pub account_id: DbId,
    pub name: String,
    pub color: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new folder. When `color` is `None` the
/// repository draws a random palette color.
#[derive(Debug, Deserialize)]
pub struct CreateFolder {
    pub name: String,
    pub color: Option<String>,
}
