//! Song catalog management.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use chordbook_auth::rbac::{Permission, RbacEnforcer};
use chordbook_core::error::AppError;
use chordbook_core::types::pagination::{PageRequest, PageResponse};
use chordbook_database::repositories::song::SongFilter;
use chordbook_database::repositories::{ChordRepository, SongRepository};
use chordbook_entity::chord::Chord;
use chordbook_entity::song::{CreateSong, Genre, Song};

use crate::context::RequestContext;

/// Handles song catalog operations.
#[derive(Debug, Clone)]
pub struct SongService {
    /// Song repository.
    song_repo: Arc<SongRepository>,
    /// Chord repository, for reference checks.
    chord_repo: Arc<ChordRepository>,
    /// RBAC enforcer.
    rbac: Arc<RbacEnforcer>,
}

/// Request to add a song to the catalog.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreateSongRequest {
    /// Song title.
    pub title: String,
    /// Full lyrics text.
    pub lyrics: Option<String>,
    /// Musical genre; defaults to Other.
    pub genre: Option<Genre>,
    /// Chords the song uses.
    pub chord_ids: Vec<Uuid>,
}

/// A song together with the chords it uses.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SongWithChords {
    /// The song row.
    #[serde(flatten)]
    pub song: Song,
    /// The chords linked to the song.
    pub chords: Vec<Chord>,
}

impl SongService {
    /// Creates a new song service.
    pub fn new(
        song_repo: Arc<SongRepository>,
        chord_repo: Arc<ChordRepository>,
        rbac: Arc<RbacEnforcer>,
    ) -> Self {
        Self {
            song_repo,
            chord_repo,
            rbac,
        }
    }

    /// Adds a song to the catalog.
    ///
    /// Every referenced chord must already exist; a dangling reference
    /// fails the whole request with NotFound before anything is written.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        req: CreateSongRequest,
    ) -> Result<Song, AppError> {
        self.rbac
            .require_permission(&ctx.role, &Permission::SongCreate)?;

        let title = req.title.trim();
        if title.is_empty() {
            return Err(AppError::validation("Song title cannot be empty"));
        }

        let chord_ids: Vec<Uuid> = {
            let mut seen = HashSet::new();
            req.chord_ids
                .into_iter()
                .filter(|id| seen.insert(*id))
                .collect()
        };

        let found = self.chord_repo.find_by_ids(&chord_ids).await?;
        if found.len() != chord_ids.len() {
            let found_ids: HashSet<Uuid> = found.iter().map(|c| c.id).collect();
            let missing: Vec<String> = chord_ids
                .iter()
                .filter(|id| !found_ids.contains(id))
                .map(|id| id.to_string())
                .collect();
            return Err(AppError::not_found(format!(
                "Chords not found: {}",
                missing.join(", ")
            )));
        }

        let song = self
            .song_repo
            .create(&CreateSong {
                title: title.to_string(),
                lyrics: req.lyrics,
                genre: req.genre.unwrap_or_default(),
                chord_ids,
                author_id: ctx.user_id,
            })
            .await?;

        info!(song_id = %song.id, title = %song.title, "Song created");

        Ok(song)
    }

    /// Gets a single song with its chords.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> Result<SongWithChords, AppError> {
        self.rbac
            .require_permission(&ctx.role, &Permission::CatalogRead)?;

        let song = self
            .song_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Song {id} not found")))?;

        let chords = self.song_repo.chords_for_song(song.id).await?;

        Ok(SongWithChords { song, chords })
    }

    /// Lists songs matching the filter.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        filter: SongFilter,
        page: PageRequest,
    ) -> Result<PageResponse<Song>, AppError> {
        self.rbac
            .require_permission(&ctx.role, &Permission::CatalogRead)?;

        self.song_repo.find_all(&filter, &page).await
    }

    /// Removes a song from the catalog.
    ///
    /// Chord links and bookmarks referencing the song cascade away in
    /// the database.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        self.rbac
            .require_permission(&ctx.role, &Permission::SongDelete)?;

        let deleted = self.song_repo.delete(id).await?;
        if !deleted {
            return Err(AppError::not_found(format!("Song {id} not found")));
        }

        info!(song_id = %id, "Song deleted");

        Ok(())
    }
}
