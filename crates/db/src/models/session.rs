//! Session model and DTOs.

use memopad_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A session row from the `sessions` table.
///
/// Only the SHA-256 digest of the bearer token is stored; the
/// plaintext token lives solely with the client.
#[derive(Debug, Clone, FromRow)]
pub struct Session {
    pub id: DbId,
    pub account_id: DbId,
    pub token_hash: String,
    pub expires_at: Timestamp,
    pub created_at: Timestamp,
}

/// DTO for creating a new session.
pub struct CreateSession {
    pub account_id: DbId,
    pub token_hash: String,
    pub expires_at: Timestamp,
}

/// The immutable identity resolved from a valid session token:
/// account id plus username, produced once at session-validation time
/// and passed explicitly into every scoped store operation.
#[derive(Debug, Clone, FromRow)]
pub struct SessionIdentity {
    pub account_id: DbId,
    pub username: String,
}
