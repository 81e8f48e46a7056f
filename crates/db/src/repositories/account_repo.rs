//! Repository for the `accounts` table.

use sqlx::PgPool;

use memopad_core::palette;
use memopad_core::types::DbId;

use crate::models::account::{Account, CreateAccount};
use crate::models::folder::CreateFolder;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, username, password_hash, last_login_at, created_at, updated_at";

/// Provides CRUD operations for accounts.
pub struct AccountRepo;

impl AccountRepo {
    /// Insert a new account, returning the created row.
    ///
    /// A duplicate username violates `uq_accounts_username` and
    /// surfaces as a database error for the caller to classify.
    pub async fn create(pool: &PgPool, input: &CreateAccount) -> Result<Account, sqlx::Error> {
        let query = format!(
            "INSERT INTO accounts (username, password_hash)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Account>(&query)
            .bind(&input.username)
            .bind(&input.password_hash)
            .fetch_one(pool)
            .await
    }

    /// Insert a new account together with its default folder, in one
    /// transaction so a failed signup leaves no partial state behind.
    ///
    /// Returns the created account.
    pub async fn create_with_default_folder(
        pool: &PgPool,
        input: &CreateAccount,
        folder: &CreateFolder,
    ) -> Result<Account, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!(
            "INSERT INTO accounts (username, password_hash)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        let account = sqlx::query_as::<_, Account>(&query)
            .bind(&input.username)
            .bind(&input.password_hash)
            .fetch_one(&mut *tx)
            .await?;

        let color = folder.color.as_deref().unwrap_or_else(|| palette::random_color());
        sqlx::query("INSERT INTO folders (account_id, name, color) VALUES ($1, $2, $3)")
            .bind(account.id)
            .bind(&folder.name)
            .bind(color)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(account)
    }

    /// Find an account by internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Account>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM accounts WHERE id = $1");
        sqlx::query_as::<_, Account>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find an account by username (case-sensitive).
    pub async fn find_by_username(
        pool: &PgPool,
        username: &str,
    ) -> Result<Option<Account>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM accounts WHERE username = $1");
        sqlx::query_as::<_, Account>(&query)
            .bind(username)
            .fetch_optional(pool)
            .await
    }

    /// Record a successful login by stamping `last_login_at`.
    pub async fn record_login(pool: &PgPool, id: DbId) -> Result<(), sqlx::Error> {
        sqlx::query("UPDATE accounts SET last_login_at = NOW() WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(())
    }
}
