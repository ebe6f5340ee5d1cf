//! Media upload handling: extension allow-listing, storage writes, and
//! recording the retrieval URL on the owning catalog row.
//!
//! The content bytes are never inspected — only the file extension is
//! checked against the allow-list for the media kind.

use std::path::Path;
use std::sync::Arc;

use bytes::Bytes;
use tracing::info;
use uuid::Uuid;

use chordbook_auth::rbac::{Permission, RbacEnforcer};
use chordbook_core::error::AppError;
use chordbook_core::traits::storage::MediaStorage;
use chordbook_database::repositories::{ChordRepository, SongRepository};
use chordbook_entity::chord::Chord;
use chordbook_entity::song::Song;

use crate::context::RequestContext;

/// Allowed extensions for diagram and cover images.
const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp"];
/// Allowed extensions for sound samples and recordings.
const AUDIO_EXTENSIONS: &[&str] = &["mp3", "wav", "ogg"];
/// Allowed extensions for song sheets: images plus PDF.
const SHEET_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "webp", "pdf"];

/// The kind of media being uploaded, which determines the allow-list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// A chord diagram or cover image.
    Image,
    /// A sound sample or recording.
    Audio,
    /// A song sheet (image or PDF).
    Sheet,
}

impl MediaKind {
    /// The allowed extensions for this kind.
    fn allowed_extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Image => IMAGE_EXTENSIONS,
            Self::Audio => AUDIO_EXTENSIONS,
            Self::Sheet => SHEET_EXTENSIONS,
        }
    }

    /// The filename suffix used when storing this kind.
    fn suffix(&self) -> &'static str {
        match self {
            Self::Image => "image",
            Self::Audio => "audio",
            Self::Sheet => "sheet",
        }
    }
}

/// Extract and validate the lowercase extension of an uploaded filename.
fn validated_extension(filename: &str, kind: MediaKind) -> Result<String, AppError> {
    let ext = Path::new(filename)
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .ok_or_else(|| AppError::validation(format!("File '{filename}' has no extension")))?;

    if !kind.allowed_extensions().contains(&ext.as_str()) {
        return Err(AppError::validation(format!(
            "Extension '.{ext}' is not allowed; expected one of: {}",
            kind.allowed_extensions().join(", ")
        )));
    }

    Ok(ext)
}

/// Handles media uploads for chords and songs.
#[derive(Clone)]
pub struct MediaService {
    /// Backing byte store.
    storage: Arc<dyn MediaStorage>,
    /// Chord repository, for URL recording.
    chord_repo: Arc<ChordRepository>,
    /// Song repository, for URL recording.
    song_repo: Arc<SongRepository>,
    /// RBAC enforcer.
    rbac: Arc<RbacEnforcer>,
    /// Public URL prefix under which media is served.
    public_prefix: String,
}

impl std::fmt::Debug for MediaService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaService")
            .field("public_prefix", &self.public_prefix)
            .finish()
    }
}

impl MediaService {
    /// Creates a new media service.
    pub fn new(
        storage: Arc<dyn MediaStorage>,
        chord_repo: Arc<ChordRepository>,
        song_repo: Arc<SongRepository>,
        rbac: Arc<RbacEnforcer>,
        public_prefix: String,
    ) -> Self {
        Self {
            storage,
            chord_repo,
            song_repo,
            rbac,
            public_prefix: public_prefix.trim_end_matches('/').to_string(),
        }
    }

    /// Uploads a chord diagram image and records its URL.
    pub async fn upload_chord_image(
        &self,
        ctx: &RequestContext,
        chord_id: Uuid,
        filename: &str,
        data: Bytes,
    ) -> Result<Chord, AppError> {
        self.rbac
            .require_permission(&ctx.role, &Permission::ChordUploadMedia)?;

        let url = self
            .store(
                "chords",
                chord_id,
                filename,
                MediaKind::Image,
                data,
                self.chord_repo.find_by_id(chord_id).await?.is_some(),
            )
            .await?;

        self.chord_repo.set_image_url(chord_id, &url).await
    }

    /// Uploads a chord sound sample and records its URL.
    pub async fn upload_chord_audio(
        &self,
        ctx: &RequestContext,
        chord_id: Uuid,
        filename: &str,
        data: Bytes,
    ) -> Result<Chord, AppError> {
        self.rbac
            .require_permission(&ctx.role, &Permission::ChordUploadMedia)?;

        let url = self
            .store(
                "chords",
                chord_id,
                filename,
                MediaKind::Audio,
                data,
                self.chord_repo.find_by_id(chord_id).await?.is_some(),
            )
            .await?;

        self.chord_repo.set_audio_url(chord_id, &url).await
    }

    /// Uploads a song sheet and records its URL.
    pub async fn upload_song_sheet(
        &self,
        ctx: &RequestContext,
        song_id: Uuid,
        filename: &str,
        data: Bytes,
    ) -> Result<Song, AppError> {
        self.rbac
            .require_permission(&ctx.role, &Permission::SongUploadMedia)?;

        let url = self
            .store(
                "songs",
                song_id,
                filename,
                MediaKind::Sheet,
                data,
                self.song_repo.find_by_id(song_id).await?.is_some(),
            )
            .await?;

        self.song_repo.set_sheet_url(song_id, &url).await
    }

    /// Uploads a song recording and records its URL.
    pub async fn upload_song_audio(
        &self,
        ctx: &RequestContext,
        song_id: Uuid,
        filename: &str,
        data: Bytes,
    ) -> Result<Song, AppError> {
        self.rbac
            .require_permission(&ctx.role, &Permission::SongUploadMedia)?;

        let url = self
            .store(
                "songs",
                song_id,
                filename,
                MediaKind::Audio,
                data,
                self.song_repo.find_by_id(song_id).await?.is_some(),
            )
            .await?;

        self.song_repo.set_audio_url(song_id, &url).await
    }

    /// Validate, write, and build the public URL for one upload.
    ///
    /// The owner-existence check runs before the write so a dangling id
    /// never leaves an orphaned file behind.
    async fn store(
        &self,
        prefix: &str,
        owner_id: Uuid,
        filename: &str,
        kind: MediaKind,
        data: Bytes,
        owner_exists: bool,
    ) -> Result<String, AppError> {
        if !owner_exists {
            return Err(AppError::not_found(format!(
                "Target {owner_id} not found"
            )));
        }

        let ext = validated_extension(filename, kind)?;
        let path = format!("{prefix}/{owner_id}_{}.{ext}", kind.suffix());

        self.storage.write(&path, data).await?;

        info!(path = %path, "Media uploaded");

        Ok(format!("{}/{path}", self.public_prefix))
    }
}
