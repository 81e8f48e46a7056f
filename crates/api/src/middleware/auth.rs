//! Session-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use memopad_core::error::CoreError;
use memopad_core::types::DbId;
use memopad_db::repositories::SessionRepo;

use crate::auth::token::hash_session_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated session extracted from a bearer token in the
/// `Authorization` header and resolved against the sessions table.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication:
///
/// ```ignore
/// async fn my_handler(session: AuthSession) -> AppResult<Json<()>> {
///     tracing::info!(account_id = session.account_id, "handling request");
///     Ok(Json(()))
/// }
/// ```
///
/// The value is immutable and produced once per request; handlers pass
/// `account_id` explicitly into every store operation.
#[derive(Debug, Clone)]
pub struct AuthSession {
    /// The owning account's internal database id.
    pub account_id: DbId,
    /// The owning account's username.
    pub username: String,
    /// Digest of the presented token; used by logout to end exactly
    /// this session.
    pub token_hash: String,
}

impl FromRequestParts<AppState> for AuthSession {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let token_hash = hash_session_token(token);

        let identity = SessionRepo::find_identity_by_token_hash(&state.pool, &token_hash)
            .await?
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("Invalid or expired session".into()))
            })?;

        Ok(AuthSession {
            account_id: identity.account_id,
            username: identity.username,
            token_hash,
        })
    }
}
