//! Repository for the `folders` table.

use sqlx::PgPool;

use memopad_core::palette;
use memopad_core::types::DbId;

use crate::models::folder::{CreateFolder, Folder};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, account_id, name, color, created_at, updated_at";

/// Provides CRUD operations for folders, scoped to one owning account.
///
/// Folder deletion is deliberately absent: folders can be created,
/// renamed, and recolored, but never removed.
pub struct FolderRepo;

impl FolderRepo {
    /// Insert a new folder, returning the created row.
    ///
    /// A folder created without an explicit color receives a uniformly
    /// random palette draw.
    pub async fn create(
        pool: &PgPool,
        account_id: DbId,
        input: &CreateFolder,
    ) -> Result<Folder, sqlx::Error> {
        let color = input
            .color
            .as_deref()
            .unwrap_or_else(|| palette::random_color());
        let query = format!(
            "INSERT INTO folders (account_id, name, color)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Folder>(&query)
            .bind(account_id)
            .bind(&input.name)
            .bind(color)
            .fetch_one(pool)
            .await
    }

    /// Find a folder by ID within the account's scope.
    pub async fn find_by_id(
        pool: &PgPool,
        account_id: DbId,
        id: DbId,
    ) -> Result<Option<Folder>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM folders WHERE id = $1 AND account_id = $2");
        sqlx::query_as::<_, Folder>(&query)
            .bind(id)
            .bind(account_id)
            .fetch_optional(pool)
            .await
    }

    /// List all folders owned by the account, oldest first.
    pub async fn list(pool: &PgPool, account_id: DbId) -> Result<Vec<Folder>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM folders WHERE account_id = $1 ORDER BY created_at ASC"
        );
        sqlx::query_as::<_, Folder>(&query)
            .bind(account_id)
            .fetch_all(pool)
            .await
    }

    /// Rename a folder, returning the updated row.
    ///
    /// Returns `None` if no folder with that id is owned by the account.
    pub async fn rename(
        pool: &PgPool,
        account_id: DbId,
        id: DbId,
        name: &str,
    ) -> Result<Option<Folder>, sqlx::Error> {
        let query = format!(
            "UPDATE folders SET name = $3, updated_at = NOW()
             WHERE id = $1 AND account_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Folder>(&query)
            .bind(id)
            .bind(account_id)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Recolor a folder, returning the updated row.
    ///
    /// Returns `None` if no folder with that id is owned by the account.
    pub async fn recolor(
        pool: &PgPool,
        account_id: DbId,
        id: DbId,
        color: &str,
    ) -> Result<Option<Folder>, sqlx::Error> {
        let query = format!(
            "UPDATE folders SET color = $3, updated_at = NOW()
             WHERE id = $1 AND account_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Folder>(&query)
            .bind(id)
            .bind(account_id)
            .bind(color)
            .fetch_optional(pool)
            .await
    }
}
