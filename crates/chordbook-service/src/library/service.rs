//! Per-user bookmark management.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use chordbook_auth::rbac::{Permission, RbacEnforcer};
use chordbook_core::error::AppError;
use chordbook_database::repositories::LibraryRepository;
use chordbook_entity::chord::Chord;
use chordbook_entity::song::Song;

use crate::context::RequestContext;

/// Handles saving and unsaving catalog favorites.
///
/// Missing targets and duplicate/absent bookmarks surface from the
/// repository as NotFound/Conflict; this layer adds the permission gate.
#[derive(Debug, Clone)]
pub struct LibraryService {
    /// Library repository.
    library_repo: Arc<LibraryRepository>,
    /// RBAC enforcer.
    rbac: Arc<RbacEnforcer>,
}

impl LibraryService {
    /// Creates a new library service.
    pub fn new(library_repo: Arc<LibraryRepository>, rbac: Arc<RbacEnforcer>) -> Self {
        Self { library_repo, rbac }
    }

    /// Bookmarks a chord for the current user.
    pub async fn save_chord(&self, ctx: &RequestContext, chord_id: Uuid) -> Result<(), AppError> {
        self.rbac
            .require_permission(&ctx.role, &Permission::LibrarySave)?;

        let saved = self.library_repo.save_chord(ctx.user_id, chord_id).await?;

        info!(
            user_id = %saved.user_id,
            chord_id = %saved.chord_id,
            saved_at = %saved.saved_at,
            "Chord saved"
        );

        Ok(())
    }

    /// Removes the current user's chord bookmark.
    pub async fn unsave_chord(&self, ctx: &RequestContext, chord_id: Uuid) -> Result<(), AppError> {
        self.rbac
            .require_permission(&ctx.role, &Permission::LibrarySave)?;

        self.library_repo.unsave_chord(ctx.user_id, chord_id).await
    }

    /// Lists the current user's saved chords.
    pub async fn saved_chords(&self, ctx: &RequestContext) -> Result<Vec<Chord>, AppError> {
        self.rbac
            .require_permission(&ctx.role, &Permission::LibrarySave)?;

        self.library_repo.saved_chords(ctx.user_id).await
    }

    /// Bookmarks a song for the current user.
    pub async fn save_song(&self, ctx: &RequestContext, song_id: Uuid) -> Result<(), AppError> {
        self.rbac
            .require_permission(&ctx.role, &Permission::LibrarySave)?;

        let saved = self.library_repo.save_song(ctx.user_id, song_id).await?;

        info!(
            user_id = %saved.user_id,
            song_id = %saved.song_id,
            saved_at = %saved.saved_at,
            "Song saved"
        );

        Ok(())
    }

    /// Removes the current user's song bookmark.
    pub async fn unsave_song(&self, ctx: &RequestContext, song_id: Uuid) -> Result<(), AppError> {
        self.rbac
            .require_permission(&ctx.role, &Permission::LibrarySave)?;

        self.library_repo.unsave_song(ctx.user_id, song_id).await
    }

    /// Lists the current user's saved songs.
    pub async fn saved_songs(&self, ctx: &RequestContext) -> Result<Vec<Song>, AppError> {
        self.rbac
            .require_permission(&ctx.role, &Permission::LibrarySave)?;

        self.library_repo.saved_songs(ctx.user_id).await
    }
}
