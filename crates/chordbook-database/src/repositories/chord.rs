//! Chord repository implementation.

use sqlx::PgPool;
use uuid::Uuid;

use chordbook_core::error::{AppError, ErrorKind};
use chordbook_core::result::AppResult;
use chordbook_core::types::pagination::{PageRequest, PageResponse};
use chordbook_entity::chord::{Chord, CreateChord};

/// Repository for chord CRUD and query operations.
#[derive(Debug, Clone)]
pub struct ChordRepository {
    pool: PgPool,
}

impl ChordRepository {
    /// Create a new chord repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a chord by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Chord>> {
        sqlx::query_as::<_, Chord>("SELECT * FROM chords WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find chord by id", e)
            })
    }

    /// Find all chords among the given ids.
    ///
    /// Used to verify song→chord references before linking; a shorter
    /// result than the input means some ids do not exist.
    pub async fn find_by_ids(&self, ids: &[Uuid]) -> AppResult<Vec<Chord>> {
        sqlx::query_as::<_, Chord>("SELECT * FROM chords WHERE id = ANY($1)")
            .bind(ids)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find chords by ids", e)
            })
    }

    /// List chords, optionally filtered by a case-insensitive name substring.
    pub async fn find_all(
        &self,
        search: Option<&str>,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Chord>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM chords \
             WHERE ($1::text IS NULL OR name ILIKE '%' || $1 || '%')",
        )
        .bind(search)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count chords", e))?;

        let chords = sqlx::query_as::<_, Chord>(
            "SELECT * FROM chords \
             WHERE ($1::text IS NULL OR name ILIKE '%' || $1 || '%') \
             ORDER BY name ASC LIMIT $2 OFFSET $3",
        )
        .bind(search)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list chords", e))?;

        Ok(PageResponse::new(
            chords,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Create a new chord.
    pub async fn create(&self, data: &CreateChord) -> AppResult<Chord> {
        sqlx::query_as::<_, Chord>(
            "INSERT INTO chords (name, frets, description, created_by) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(&data.name)
        .bind(&data.frets)
        .bind(&data.description)
        .bind(data.created_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("chords_name_key") => {
                AppError::conflict(format!("Chord '{}' already exists", data.name))
            }
            sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                AppError::not_found("Creating user does not exist")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create chord", e),
        })
    }

    /// Delete a chord by ID. Join rows cascade in the database.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM chords WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete chord", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// Record the public URL of an uploaded diagram image.
    pub async fn set_image_url(&self, id: Uuid, url: &str) -> AppResult<Chord> {
        sqlx::query_as::<_, Chord>("UPDATE chords SET image_url = $2 WHERE id = $1 RETURNING *")
            .bind(id)
            .bind(url)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to set chord image url", e)
            })?
            .ok_or_else(|| AppError::not_found(format!("Chord {id} not found")))
    }

    /// Record the public URL of an uploaded sound sample.
    pub async fn set_audio_url(&self, id: Uuid, url: &str) -> AppResult<Chord> {
        sqlx::query_as::<_, Chord>("UPDATE chords SET audio_url = $2 WHERE id = $1 RETURNING *")
            .bind(id)
            .bind(url)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to set chord audio url", e)
            })?
            .ok_or_else(|| AppError::not_found(format!("Chord {id} not found")))
    }
}
