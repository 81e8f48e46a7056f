//! Route definitions for the `/folders` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::folders;
use crate::state::AppState;

/// Routes mounted at `/folders`.
///
/// ```text
/// GET  /            -> list
/// POST /            -> create
/// PUT  /{id}        -> rename
/// PUT  /{id}/color  -> recolor
/// ```
///
/// There is deliberately no DELETE route.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(folders::list).post(folders::create))
        .route("/{id}", put(folders::rename))
        .route("/{id}/color", put(folders::recolor))
}
