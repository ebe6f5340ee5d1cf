//! Chord catalog management.

use std::sync::Arc;

use tracing::info;
use uuid::Uuid;

use chordbook_auth::rbac::{Permission, RbacEnforcer};
use chordbook_core::error::AppError;
use chordbook_core::types::pagination::{PageRequest, PageResponse};
use chordbook_database::repositories::ChordRepository;
use chordbook_entity::chord::{Chord, CreateChord, validate_frets};

use crate::context::RequestContext;

/// Handles chord catalog operations.
#[derive(Debug, Clone)]
pub struct ChordService {
    /// Chord repository.
    chord_repo: Arc<ChordRepository>,
    /// RBAC enforcer.
    rbac: Arc<RbacEnforcer>,
}

/// Request to add a chord to the catalog.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CreateChordRequest {
    /// Unique chord name.
    pub name: String,
    /// Fret value per string, low E to high E.
    pub frets: Vec<i32>,
    /// Free-form fingering notes.
    pub description: Option<String>,
}

impl ChordService {
    /// Creates a new chord service.
    pub fn new(chord_repo: Arc<ChordRepository>, rbac: Arc<RbacEnforcer>) -> Self {
        Self { chord_repo, rbac }
    }

    /// Adds a chord to the catalog.
    pub async fn create(
        &self,
        ctx: &RequestContext,
        req: CreateChordRequest,
    ) -> Result<Chord, AppError> {
        self.rbac
            .require_permission(&ctx.role, &Permission::ChordCreate)?;

        let name = req.name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Chord name cannot be empty"));
        }

        validate_frets(&req.frets)?;

        let chord = self
            .chord_repo
            .create(&CreateChord {
                name: name.to_string(),
                frets: req.frets,
                description: req.description,
                created_by: ctx.user_id,
            })
            .await?;

        info!(chord_id = %chord.id, name = %chord.name, "Chord created");

        Ok(chord)
    }

    /// Gets a single chord by ID.
    pub async fn get(&self, ctx: &RequestContext, id: Uuid) -> Result<Chord, AppError> {
        self.rbac
            .require_permission(&ctx.role, &Permission::CatalogRead)?;

        self.chord_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Chord {id} not found")))
    }

    /// Lists chords, optionally filtered by a name substring.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        search: Option<&str>,
        page: PageRequest,
    ) -> Result<PageResponse<Chord>, AppError> {
        self.rbac
            .require_permission(&ctx.role, &Permission::CatalogRead)?;

        self.chord_repo.find_all(search, &page).await
    }

    /// Removes a chord from the catalog.
    ///
    /// Song links and bookmarks referencing the chord cascade away in
    /// the database.
    pub async fn delete(&self, ctx: &RequestContext, id: Uuid) -> Result<(), AppError> {
        self.rbac
            .require_permission(&ctx.role, &Permission::ChordDelete)?;

        let deleted = self.chord_repo.delete(id).await?;
        if !deleted {
            return Err(AppError::not_found(format!("Chord {id} not found")));
        }

        info!(chord_id = %id, "Chord deleted");

        Ok(())
    }
}
