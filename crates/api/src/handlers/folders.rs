//! Handlers for the `/folders` resource.
//!
//! Folders can be created, renamed, and recolored, but never deleted.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use memopad_core::error::CoreError;
use memopad_core::types::DbId;
use memopad_core::{folders, palette};
use memopad_db::models::folder::{CreateFolder, Folder};
use memopad_db::repositories::FolderRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthSession;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request types
// ---------------------------------------------------------------------------

/// Request body for `PUT /folders/{id}`.
#[derive(Debug, Deserialize)]
pub struct RenameFolderRequest {
    pub name: String,
}

/// Request body for `PUT /folders/{id}/color`.
#[derive(Debug, Deserialize)]
pub struct RecolorFolderRequest {
    pub color: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/folders
pub async fn list(
    State(state): State<AppState>,
    session: AuthSession,
) -> AppResult<Json<Vec<Folder>>> {
    let folders = FolderRepo::list(&state.pool, session.account_id).await?;
    Ok(Json(folders))
}

/// POST /api/v1/folders
///
/// Create a folder. When no color is given the store draws a random
/// palette color.
pub async fn create(
    State(state): State<AppState>,
    session: AuthSession,
    Json(input): Json<CreateFolder>,
) -> AppResult<(StatusCode, Json<Folder>)> {
    folders::validate_name(&input.name)?;
    palette::validate_color(input.color.as_deref())?;

    let folder = FolderRepo::create(&state.pool, session.account_id, &input).await?;
    Ok((StatusCode::CREATED, Json(folder)))
}

/// PUT /api/v1/folders/{id}
pub async fn rename(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<DbId>,
    Json(input): Json<RenameFolderRequest>,
) -> AppResult<Json<Folder>> {
    folders::validate_name(&input.name)?;

    let folder = FolderRepo::rename(&state.pool, session.account_id, id, &input.name)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Folder",
            id,
        }))?;
    Ok(Json(folder))
}

/// PUT /api/v1/folders/{id}/color
pub async fn recolor(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<DbId>,
    Json(input): Json<RecolorFolderRequest>,
) -> AppResult<Json<Folder>> {
    palette::validate_color(Some(&input.color))?;

    let folder = FolderRepo::recolor(&state.pool, session.account_id, id, &input.color)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Folder",
            id,
        }))?;
    Ok(Json(folder))
}
