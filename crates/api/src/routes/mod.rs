pub mod auth;
pub mod folders;
pub mod health;
pub mod notes;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/signup               signup (public)
/// /auth/login                login (public)
/// /auth/logout               logout (requires auth)
/// /auth/me                   current account (requires auth)
///
/// /notes                     list, create
/// /notes/{id}                get, update, delete
/// /notes/{id}/pin            toggle pin (POST)
/// /notes/{id}/folder         move to folder (PUT)
///
/// /folders                   list, create
/// /folders/{id}              rename (PUT)
/// /folders/{id}/color        recolor (PUT)
/// ```
///
/// All note and folder routes require auth via the [`AuthSession`]
/// extractor on their handlers.
///
/// [`AuthSession`]: crate::middleware::auth::AuthSession
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/notes", notes::router())
        .nest("/folders", folders::router())
}
