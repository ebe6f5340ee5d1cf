//! Song catalog handlers.

use axum::Json;
use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use chordbook_core::types::pagination::{PageRequest, PageResponse};
use chordbook_database::repositories::song::SongFilter;
use chordbook_entity::song::Song;
use chordbook_service::song::{CreateSongRequest as CreateSongInput, SongWithChords};

use crate::dto::request::{CreateSongRequest, SongListQuery};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::handlers::read_upload;
use crate::state::AppState;

/// POST /api/songs
pub async fn create_song(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateSongRequest>,
) -> Result<(StatusCode, Json<Song>), ApiError> {
    req.validate()?;

    let song = state
        .song_service
        .create(
            &auth,
            CreateSongInput {
                title: req.title,
                lyrics: req.lyrics,
                genre: req.genre,
                chord_ids: req.chord_ids,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(song)))
}

/// GET /api/songs
pub async fn list_songs(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<SongListQuery>,
) -> Result<Json<PageResponse<Song>>, ApiError> {
    let page = PageRequest::new(query.page.unwrap_or(1), query.page_size.unwrap_or(25));
    let filter = SongFilter {
        search: query.search,
        genre: query.genre,
        chord_id: query.chord_id,
    };

    let songs = state.song_service.list(&auth, filter, page).await?;

    Ok(Json(songs))
}

/// GET /api/songs/{id}
pub async fn get_song(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(song_id): Path<Uuid>,
) -> Result<Json<SongWithChords>, ApiError> {
    let song = state.song_service.get(&auth, song_id).await?;
    Ok(Json(song))
}

/// DELETE /api/songs/{id}
pub async fn delete_song(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(song_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.song_service.delete(&auth, song_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/songs/{id}/sheet
pub async fn upload_sheet(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(song_id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<Song>, ApiError> {
    let (filename, data) = read_upload(&mut multipart).await?;

    let song = state
        .media_service
        .upload_song_sheet(&auth, song_id, &filename, data)
        .await?;

    Ok(Json(song))
}

/// POST /api/songs/{id}/audio
pub async fn upload_audio(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(song_id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<Song>, ApiError> {
    let (filename, data) = read_upload(&mut multipart).await?;

    let song = state
        .media_service
        .upload_song_audio(&auth, song_id, &filename, data)
        .await?;

    Ok(Json(song))
}
