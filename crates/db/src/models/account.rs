//! Account entity model and DTOs.

use memopad_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// Full account row from the `accounts` table.
///
/// Contains the password hash -- NEVER serialize this to API responses
/// directly. Use [`AccountResponse`] for external-facing output.
#[derive(Debug, Clone, FromRow)]
pub struct Account {
    pub id: DbId,
    pub username: String,
    pub password_hash: String,
    pub last_login_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Safe account representation for API responses (no password hash).
#[derive(Debug, Clone, Serialize)]
pub struct AccountResponse {
    pub id: DbId,
    pub username: String,
    pub last_login_at: Option<Timestamp>,
    pub created_at: Timestamp,
}

impl From<Account> for AccountResponse {
    fn from(account: Account) -> Self {
        Self {
            id: account.id,
            username: account.username,
            last_login_at: account.last_login_at,
            created_at: account.created_at,
        }
    }
}

/// DTO for creating a new account. The password has already been
/// hashed by the caller; plaintext never reaches this layer.
#[derive(Debug)]
pub struct CreateAccount {
    pub username: String,
    pub password_hash: String,
}
