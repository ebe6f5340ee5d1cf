//! Chord catalog handlers.

use axum::Json;
use axum::extract::{Multipart, Path, Query, State};
use axum::http::StatusCode;
use uuid::Uuid;
use validator::Validate;

use chordbook_core::types::pagination::{PageRequest, PageResponse};
use chordbook_entity::chord::Chord;
use chordbook_service::chord::CreateChordRequest as CreateChordInput;

use crate::dto::request::{ChordListQuery, CreateChordRequest};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::handlers::read_upload;
use crate::state::AppState;

/// POST /api/chords
pub async fn create_chord(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateChordRequest>,
) -> Result<(StatusCode, Json<Chord>), ApiError> {
    req.validate()?;

    let chord = state
        .chord_service
        .create(
            &auth,
            CreateChordInput {
                name: req.name,
                frets: req.frets,
                description: req.description,
            },
        )
        .await?;

    Ok((StatusCode::CREATED, Json(chord)))
}

/// GET /api/chords
pub async fn list_chords(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ChordListQuery>,
) -> Result<Json<PageResponse<Chord>>, ApiError> {
    let page = PageRequest::new(query.page.unwrap_or(1), query.page_size.unwrap_or(25));

    let chords = state
        .chord_service
        .list(&auth, query.search.as_deref(), page)
        .await?;

    Ok(Json(chords))
}

/// GET /api/chords/{id}
pub async fn get_chord(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(chord_id): Path<Uuid>,
) -> Result<Json<Chord>, ApiError> {
    let chord = state.chord_service.get(&auth, chord_id).await?;
    Ok(Json(chord))
}

/// DELETE /api/chords/{id}
pub async fn delete_chord(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(chord_id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.chord_service.delete(&auth, chord_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/chords/{id}/image
pub async fn upload_image(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(chord_id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<Chord>, ApiError> {
    let (filename, data) = read_upload(&mut multipart).await?;

    let chord = state
        .media_service
        .upload_chord_image(&auth, chord_id, &filename, data)
        .await?;

    Ok(Json(chord))
}

/// POST /api/chords/{id}/audio
pub async fn upload_audio(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(chord_id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<Json<Chord>, ApiError> {
    let (filename, data) = read_upload(&mut multipart).await?;

    let chord = state
        .media_service
        .upload_chord_audio(&auth, chord_id, &filename, data)
        .await?;

    Ok(Json(chord))
}
