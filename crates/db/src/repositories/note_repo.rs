//! Repository for the `notes` table.

use sqlx::PgPool;

use memopad_core::palette;
use memopad_core::types::DbId;

use crate::models::note::{CreateNote, Note, UpdateNote};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, account_id, folder_id, title, content, color, pinned, created_at, updated_at";

/// Provides CRUD operations for notes, scoped to one owning account.
///
/// Every predicate includes `account_id`, so a note owned by another
/// account behaves exactly like a note that does not exist.
pub struct NoteRepo;

impl NoteRepo {
    /// Insert a new note, returning the created row.
    ///
    /// `created_at` and `updated_at` are both set to the current
    /// instant by the column defaults.
    pub async fn create(
        pool: &PgPool,
        account_id: DbId,
        input: &CreateNote,
    ) -> Result<Note, sqlx::Error> {
        let color = input.color.as_deref().unwrap_or(palette::DEFAULT_NOTE_COLOR);
        let query = format!(
            "INSERT INTO notes (account_id, folder_id, title, content, color)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(account_id)
            .bind(input.folder_id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(color)
            .fetch_one(pool)
            .await
    }

    /// Find a note by ID within the account's scope.
    pub async fn find_by_id(
        pool: &PgPool,
        account_id: DbId,
        id: DbId,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes WHERE id = $1 AND account_id = $2");
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(account_id)
            .fetch_optional(pool)
            .await
    }

    /// List the account's notes, optionally restricted to one folder.
    ///
    /// Ordering is a user-facing contract: pinned notes first, then
    /// most recently touched first.
    pub async fn list(
        pool: &PgPool,
        account_id: DbId,
        folder_id: Option<DbId>,
    ) -> Result<Vec<Note>, sqlx::Error> {
        if let Some(folder_id) = folder_id {
            let query = format!(
                "SELECT {COLUMNS} FROM notes
                 WHERE account_id = $1 AND folder_id = $2
                 ORDER BY pinned DESC, updated_at DESC"
            );
            sqlx::query_as::<_, Note>(&query)
                .bind(account_id)
                .bind(folder_id)
                .fetch_all(pool)
                .await
        } else {
            let query = format!(
                "SELECT {COLUMNS} FROM notes
                 WHERE account_id = $1
                 ORDER BY pinned DESC, updated_at DESC"
            );
            sqlx::query_as::<_, Note>(&query)
                .bind(account_id)
                .fetch_all(pool)
                .await
        }
    }

    /// Update a note, returning the updated row.
    ///
    /// `title` overwrites unconditionally (a client omitting it clears
    /// the title); `color` and `folder_id` keep their current values
    /// when omitted. Refreshes `updated_at`.
    ///
    /// Returns `None` if no note with that id is owned by the account.
    pub async fn update(
        pool: &PgPool,
        account_id: DbId,
        id: DbId,
        input: &UpdateNote,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!(
            "UPDATE notes SET
                title = $3,
                content = $4,
                color = COALESCE($5, color),
                folder_id = COALESCE($6, folder_id),
                updated_at = NOW()
             WHERE id = $1 AND account_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(account_id)
            .bind(&input.title)
            .bind(&input.content)
            .bind(&input.color)
            .bind(input.folder_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a note. Returns `true` if a row was deleted.
    ///
    /// Deletion is immediate and permanent; there is no soft delete.
    pub async fn delete(pool: &PgPool, account_id: DbId, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1 AND account_id = $2")
            .bind(id)
            .bind(account_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Toggle the pinned state of a note, returning the updated row.
    ///
    /// The flip is a single conditional UPDATE, so two concurrent
    /// toggles serialize on the row lock and cannot both observe the
    /// same pre-state. Refreshes `updated_at`.
    pub async fn toggle_pin(
        pool: &PgPool,
        account_id: DbId,
        id: DbId,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!(
            "UPDATE notes SET pinned = NOT pinned, updated_at = NOW()
             WHERE id = $1 AND account_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(account_id)
            .fetch_optional(pool)
            .await
    }

    /// Move a note to a folder (`None` unfiles it), returning the
    /// updated row. The caller is responsible for verifying that a
    /// non-null destination folder belongs to the same account.
    /// Refreshes `updated_at`.
    pub async fn move_to_folder(
        pool: &PgPool,
        account_id: DbId,
        id: DbId,
        folder_id: Option<DbId>,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!(
            "UPDATE notes SET folder_id = $3, updated_at = NOW()
             WHERE id = $1 AND account_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(account_id)
            .bind(folder_id)
            .fetch_optional(pool)
            .await
    }
}
