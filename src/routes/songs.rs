//! Song API endpoints
//!
//! Thin HTTP layer over `SongRepository`. Payloads are validated here,
//! before they reach the repository.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

use crate::db::models::{SongFields, SongFilter};
use crate::errors::SongError;
use crate::models::{ApiResponse, SongCreatedData, SongData, SongsData};
use crate::AppState;

type ErrorResponse = (StatusCode, Json<serde_json::Value>);

/// Check the fields the repository stores without further validation
pub fn validate_song(fields: &SongFields) -> Result<(), String> {
    if fields.title.trim().is_empty() {
        return Err("title is required".to_string());
    }
    if fields.genre.trim().is_empty() {
        return Err("genre is required".to_string());
    }
    if fields.performer.trim().is_empty() {
        return Err("performer is required".to_string());
    }
    if !(1..=9999).contains(&fields.year) {
        return Err("year must be between 1 and 9999".to_string());
    }
    if matches!(fields.duration, Some(d) if d < 0) {
        return Err("duration must not be negative".to_string());
    }
    Ok(())
}

fn bad_request(message: String) -> ErrorResponse {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({ "status": "fail", "message": message })),
    )
}

/// Map a repository failure to an HTTP error
fn error_response(action: &str, err: SongError) -> ErrorResponse {
    match err {
        SongError::NotFound(message) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "status": "fail", "message": message })),
        ),
        other => {
            tracing::error!("Failed to {}: {}", action, other);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({
                    "status": "error",
                    "message": "Internal server error"
                })),
            )
        }
    }
}

/// POST /songs - Add a song
pub async fn add_song(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<SongFields>,
) -> Result<impl IntoResponse, ErrorResponse> {
    validate_song(&payload).map_err(bad_request)?;

    let song_id = state
        .songs
        .create(&payload)
        .await
        .map_err(|e| error_response("add song", e))?;

    tracing::info!("Added song {}", song_id);

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(SongCreatedData { song_id }).with_message("Song added")),
    ))
}

/// GET /songs?title=&performer= - List songs
pub async fn get_songs(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<SongFilter>,
) -> Result<impl IntoResponse, ErrorResponse> {
    let songs = state
        .songs
        .list(&filter)
        .await
        .map_err(|e| error_response("list songs", e))?;

    Ok(Json(ApiResponse::success(SongsData { songs })))
}

/// GET /songs/:id - Get a single song
pub async fn get_song_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ErrorResponse> {
    let song = state
        .songs
        .get_by_id(&id)
        .await
        .map_err(|e| error_response("get song", e))?;

    Ok(Json(ApiResponse::success(SongData { song })))
}

/// PUT /songs/:id - Replace a song's fields
pub async fn edit_song_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    Json(payload): Json<SongFields>,
) -> Result<impl IntoResponse, ErrorResponse> {
    validate_song(&payload).map_err(bad_request)?;

    state
        .songs
        .update(&id, &payload)
        .await
        .map_err(|e| error_response("update song", e))?;

    tracing::info!("Updated song {}", id);

    Ok(Json(ApiResponse::message("Song updated")))
}

/// DELETE /songs/:id - Delete a song
pub async fn delete_song_by_id(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ErrorResponse> {
    state
        .songs
        .delete(&id)
        .await
        .map_err(|e| error_response("delete song", e))?;

    tracing::info!("Deleted song {}", id);

    Ok(Json(ApiResponse::message("Song deleted")))
}
