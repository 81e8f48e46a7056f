//! Handlers for the `/auth` resource (signup, login, logout, me).

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use memopad_core::error::CoreError;
use memopad_core::types::Timestamp;
use memopad_core::{accounts, folders, palette};
use memopad_db::models::account::{AccountResponse, CreateAccount};
use memopad_db::models::folder::CreateFolder;
use memopad_db::models::session::CreateSession;
use memopad_db::repositories::{AccountRepo, SessionRepo};

use crate::auth::password::{hash_password, validate_password_strength, verify_password};
use crate::auth::token::generate_session_token;
use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthSession;
use crate::state::AppState;

/// The one failure message for both "unknown username" and "wrong
/// password", so a login attempt cannot probe which usernames exist.
const LOGIN_FAILURE: &str = "Invalid username or password";

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Request body for `POST /auth/signup`.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub username: String,
    pub password: String,
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// Successful authentication response returned by login.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    /// Opaque bearer token; present it as `Authorization: Bearer <token>`.
    pub token: String,
    /// Instant at which the session expires.
    pub expires_at: Timestamp,
    pub account: AccountResponse,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/auth/signup
///
/// Register a new account. The password is stored only as an Argon2id
/// hash; a default "My Notes" folder is provisioned for the account.
pub async fn signup(
    State(state): State<AppState>,
    Json(input): Json<SignupRequest>,
) -> AppResult<(StatusCode, Json<AccountResponse>)> {
    // 1. Validate the credentials' shape before touching the store.
    accounts::validate_username(&input.username)?;
    validate_password_strength(&input.password, accounts::MIN_PASSWORD_LENGTH)
        .map_err(CoreError::Validation)?;

    // 2. Reject a taken username up front. The unique constraint on
    //    the table still backstops a concurrent signup race.
    if AccountRepo::find_by_username(&state.pool, &input.username)
        .await?
        .is_some()
    {
        return Err(AppError::Core(CoreError::Conflict(
            "Username is already taken".into(),
        )));
    }

    // 3. Hash and persist, provisioning the account's default folder
    //    in the same transaction. The plaintext never leaves this scope.
    let password_hash = hash_password(&input.password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let account = AccountRepo::create_with_default_folder(
        &state.pool,
        &CreateAccount {
            username: input.username,
            password_hash,
        },
        &CreateFolder {
            name: folders::DEFAULT_FOLDER_NAME.to_string(),
            color: Some(palette::DEFAULT_FOLDER_COLOR.to_string()),
        },
    )
    .await?;

    Ok((StatusCode::CREATED, Json(account.into())))
}

/// POST /api/v1/auth/login
///
/// Authenticate with username + password. Returns an opaque session
/// token bound to the account.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    // 1. Find the account. An unknown username fails identically to a
    //    wrong password.
    let account = AccountRepo::find_by_username(&state.pool, &input.username)
        .await?
        .ok_or_else(|| AppError::Core(CoreError::Unauthorized(LOGIN_FAILURE.into())))?;

    // 2. Verify the password.
    let password_valid = verify_password(&input.password, &account.password_hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;

    if !password_valid {
        return Err(AppError::Core(CoreError::Unauthorized(LOGIN_FAILURE.into())));
    }

    // 3. Stamp the login and open a session.
    AccountRepo::record_login(&state.pool, account.id).await?;

    let (token, token_hash) = generate_session_token();
    let expires_at = Utc::now() + chrono::Duration::hours(state.config.session_ttl_hours);

    SessionRepo::create(
        &state.pool,
        &CreateSession {
            account_id: account.id,
            token_hash,
            expires_at,
        },
    )
    .await?;

    Ok(Json(LoginResponse {
        token,
        expires_at,
        account: account.into(),
    }))
}

/// POST /api/v1/auth/logout
///
/// End the caller's current session. The presented token is dead
/// immediately; subsequent requests bearing it are unauthenticated.
/// Returns 204 No Content.
pub async fn logout(
    State(state): State<AppState>,
    session: AuthSession,
) -> AppResult<StatusCode> {
    SessionRepo::delete_by_token_hash(&state.pool, &session.token_hash).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/v1/auth/me
///
/// Return the authenticated account (never the password hash).
pub async fn me(
    State(state): State<AppState>,
    session: AuthSession,
) -> AppResult<Json<AccountResponse>> {
    let account = AccountRepo::find_by_id(&state.pool, session.account_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized("Account no longer exists".into()))
        })?;
    Ok(Json(account.into()))
}
