//! Saved-library handlers (per-user bookmarks).

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use uuid::Uuid;

use chordbook_entity::chord::Chord;
use chordbook_entity::song::Song;

use crate::dto::response::MessageResponse;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/chords/{id}/save
pub async fn save_chord(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(chord_id): Path<Uuid>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    state.library_service.save_chord(&auth, chord_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Chord saved".to_string(),
        }),
    ))
}

/// DELETE /api/chords/{id}/save
pub async fn unsave_chord(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(chord_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.library_service.unsave_chord(&auth, chord_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/chords/saved/me
pub async fn saved_chords(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<Chord>>, ApiError> {
    let chords = state.library_service.saved_chords(&auth).await?;
    Ok(Json(chords))
}

/// POST /api/songs/{id}/save
pub async fn save_song(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(song_id): Path<Uuid>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    state.library_service.save_song(&auth, song_id).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Song saved".to_string(),
        }),
    ))
}

/// DELETE /api/songs/{id}/save
pub async fn unsave_song(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(song_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.library_service.unsave_song(&auth, song_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// GET /api/songs/saved/me
pub async fn saved_songs(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<Vec<Song>>, ApiError> {
    let songs = state.library_service.saved_songs(&auth).await?;
    Ok(Json(songs))
}
