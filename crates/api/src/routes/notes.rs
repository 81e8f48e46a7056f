//! Route definitions for the `/notes` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::notes;
use crate::state::AppState;

/// Routes mounted at `/notes`.
///
/// ```text
/// GET    /            -> list (optional ?folder_id=N filter)
/// POST   /            -> create
/// GET    /{id}        -> get_by_id
/// PUT    /{id}        -> update
/// DELETE /{id}        -> delete
/// POST   /{id}/pin    -> toggle_pin
/// PUT    /{id}/folder -> move_to_folder
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(notes::list).post(notes::create))
        .route(
            "/{id}",
            get(notes::get_by_id)
                .put(notes::update)
                .delete(notes::delete),
        )
        .route("/{id}/pin", post(notes::toggle_pin))
        .route("/{id}/folder", put(notes::move_to_folder))
}
