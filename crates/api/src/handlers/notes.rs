//! Handlers for the `/notes` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use memopad_core::error::CoreError;
use memopad_core::types::DbId;
use memopad_core::{notes, palette};
use memopad_db::models::note::{CreateNote, Note, UpdateNote};
use memopad_db::repositories::{FolderRepo, NoteRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthSession;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// Query parameters for `GET /notes`.
#[derive(Debug, Deserialize)]
pub struct ListNotesQuery {
    /// Restrict the listing to one folder.
    pub folder_id: Option<DbId>,
}

/// Request body for `PUT /notes/{id}/folder`. `folder_id: null` (or an
/// omitted field) unfiles the note.
#[derive(Debug, Deserialize)]
pub struct MoveNoteRequest {
    pub folder_id: Option<DbId>,
}

/// Response body for `POST /notes/{id}/pin`.
#[derive(Debug, Serialize)]
pub struct PinResponse {
    pub pinned: bool,
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Verify that a destination folder exists within the account's scope.
///
/// A folder owned by another account fails exactly like a folder that
/// does not exist.
async fn ensure_folder_owned(
    state: &AppState,
    account_id: DbId,
    folder_id: DbId,
) -> AppResult<()> {
    FolderRepo::find_by_id(&state.pool, account_id, folder_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Folder",
            id: folder_id,
        }))?;
    Ok(())
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// GET /api/v1/notes
///
/// List the account's notes, pinned first, then most recently touched.
pub async fn list(
    State(state): State<AppState>,
    session: AuthSession,
    Query(query): Query<ListNotesQuery>,
) -> AppResult<Json<Vec<Note>>> {
    let notes = NoteRepo::list(&state.pool, session.account_id, query.folder_id).await?;
    Ok(Json(notes))
}

/// POST /api/v1/notes
pub async fn create(
    State(state): State<AppState>,
    session: AuthSession,
    Json(input): Json<CreateNote>,
) -> AppResult<(StatusCode, Json<Note>)> {
    notes::validate_content(&input.content)?;
    notes::validate_title(input.title.as_deref())?;
    palette::validate_color(input.color.as_deref())?;

    if let Some(folder_id) = input.folder_id {
        ensure_folder_owned(&state, session.account_id, folder_id).await?;
    }

    let note = NoteRepo::create(&state.pool, session.account_id, &input).await?;
    Ok((StatusCode::CREATED, Json(note)))
}

/// GET /api/v1/notes/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<DbId>,
) -> AppResult<Json<Note>> {
    let note = NoteRepo::find_by_id(&state.pool, session.account_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Note", id }))?;
    Ok(Json(note))
}

/// PUT /api/v1/notes/{id}
pub async fn update(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateNote>,
) -> AppResult<Json<Note>> {
    notes::validate_content(&input.content)?;
    notes::validate_title(input.title.as_deref())?;
    palette::validate_color(input.color.as_deref())?;

    if let Some(folder_id) = input.folder_id {
        ensure_folder_owned(&state, session.account_id, folder_id).await?;
    }

    let note = NoteRepo::update(&state.pool, session.account_id, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Note", id }))?;
    Ok(Json(note))
}

/// DELETE /api/v1/notes/{id}
pub async fn delete(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = NoteRepo::delete(&state.pool, session.account_id, id).await?;
    if deleted {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound { entity: "Note", id }))
    }
}

/// POST /api/v1/notes/{id}/pin
///
/// Flip the note's pinned flag, returning the new state.
pub async fn toggle_pin(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<DbId>,
) -> AppResult<Json<PinResponse>> {
    let note = NoteRepo::toggle_pin(&state.pool, session.account_id, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Note", id }))?;
    Ok(Json(PinResponse {
        pinned: note.pinned,
    }))
}

/// PUT /api/v1/notes/{id}/folder
///
/// Move the note into a folder, or unfile it with `folder_id: null`.
pub async fn move_to_folder(
    State(state): State<AppState>,
    session: AuthSession,
    Path(id): Path<DbId>,
    Json(input): Json<MoveNoteRequest>,
) -> AppResult<Json<Note>> {
    if let Some(folder_id) = input.folder_id {
        ensure_folder_owned(&state, session.account_id, folder_id).await?;
    }

    let note = NoteRepo::move_to_folder(&state.pool, session.account_id, id, input.folder_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "Note", id }))?;
    Ok(Json(note))
}
