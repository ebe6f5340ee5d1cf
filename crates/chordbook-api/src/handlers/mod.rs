//! HTTP request handlers, organized by domain.

pub mod auth;
pub mod chord;
pub mod health;
pub mod library;
pub mod song;
pub mod user;

use axum::extract::Multipart;
use bytes::Bytes;

use chordbook_core::error::AppError;

use crate::error::ApiError;

/// Pull the uploaded file out of a multipart body.
///
/// Expects a single field named `file`; returns its original filename
/// (used only for extension checking) and the raw bytes.
pub(crate) async fn read_upload(multipart: &mut Multipart) -> Result<(String, Bytes), ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() == Some("file") {
            let filename = field
                .file_name()
                .ok_or_else(|| AppError::validation("Uploaded file has no filename"))?
                .to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| AppError::validation(format!("Failed to read upload: {e}")))?;
            return Ok((filename, data));
        }
    }

    Err(AppError::validation("Missing 'file' field in multipart body").into())
}
