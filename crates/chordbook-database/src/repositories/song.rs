//! Song repository implementation.

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use chordbook_core::error::{AppError, ErrorKind};
use chordbook_core::result::AppResult;
use chordbook_core::types::pagination::{PageRequest, PageResponse};
use chordbook_entity::chord::Chord;
use chordbook_entity::song::{CreateSong, Genre, Song};

/// Filter parameters for song listing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SongFilter {
    /// Case-insensitive title substring.
    pub search: Option<String>,
    /// Exact genre match.
    pub genre: Option<Genre>,
    /// Only songs using this chord.
    pub chord_id: Option<Uuid>,
}

/// Repository for song CRUD, filtering, and chord-link operations.
#[derive(Debug, Clone)]
pub struct SongRepository {
    pool: PgPool,
}

impl SongRepository {
    /// Create a new song repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a song by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Song>> {
        sqlx::query_as::<_, Song>("SELECT * FROM songs WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find song by id", e))
    }

    /// List songs matching the filter, with pagination.
    ///
    /// The chord filter joins through `song_chords`; `DISTINCT` keeps a
    /// song listed once however many of its chords match.
    pub async fn find_all(
        &self,
        filter: &SongFilter,
        page: &PageRequest,
    ) -> AppResult<PageResponse<Song>> {
        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(DISTINCT s.id) FROM songs s \
             LEFT JOIN song_chords sc ON sc.song_id = s.id \
             WHERE ($1::text IS NULL OR s.title ILIKE '%' || $1 || '%') \
               AND ($2::genre IS NULL OR s.genre = $2) \
               AND ($3::uuid IS NULL OR sc.chord_id = $3)",
        )
        .bind(&filter.search)
        .bind(filter.genre)
        .bind(filter.chord_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count songs", e))?;

        let songs = sqlx::query_as::<_, Song>(
            "SELECT DISTINCT s.* FROM songs s \
             LEFT JOIN song_chords sc ON sc.song_id = s.id \
             WHERE ($1::text IS NULL OR s.title ILIKE '%' || $1 || '%') \
               AND ($2::genre IS NULL OR s.genre = $2) \
               AND ($3::uuid IS NULL OR sc.chord_id = $3) \
             ORDER BY s.created_at DESC LIMIT $4 OFFSET $5",
        )
        .bind(&filter.search)
        .bind(filter.genre)
        .bind(filter.chord_id)
        .bind(page.limit() as i64)
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list songs", e))?;

        Ok(PageResponse::new(
            songs,
            page.page,
            page.page_size,
            total as u64,
        ))
    }

    /// Create a new song together with its chord links, in one transaction.
    pub async fn create(&self, data: &CreateSong) -> AppResult<Song> {
        let mut tx = self.pool.begin().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to begin transaction", e)
        })?;

        let song = sqlx::query_as::<_, Song>(
            "INSERT INTO songs (title, lyrics, genre, author_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING *",
        )
        .bind(&data.title)
        .bind(&data.lyrics)
        .bind(data.genre)
        .bind(data.author_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                AppError::not_found("Authoring user does not exist")
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to create song", e),
        })?;

        for chord_id in &data.chord_ids {
            sqlx::query("INSERT INTO song_chords (song_id, chord_id) VALUES ($1, $2)")
                .bind(song.id)
                .bind(chord_id)
                .execute(&mut *tx)
                .await
                .map_err(|e| match e {
                    sqlx::Error::Database(ref db_err)
                        if db_err.constraint() == Some("uq_song_chord") =>
                    {
                        AppError::conflict("Duplicate chord in song")
                    }
                    sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                        AppError::not_found(format!("Chord {chord_id} not found"))
                    }
                    _ => {
                        AppError::with_source(ErrorKind::Database, "Failed to link song chord", e)
                    }
                })?;
        }

        tx.commit().await.map_err(|e| {
            AppError::with_source(ErrorKind::Database, "Failed to commit transaction", e)
        })?;

        Ok(song)
    }

    /// Delete a song by ID. Chord links and bookmarks cascade in the database.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM songs WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete song", e))?;

        Ok(result.rows_affected() > 0)
    }

    /// List the chords a song uses, in name order.
    pub async fn chords_for_song(&self, song_id: Uuid) -> AppResult<Vec<Chord>> {
        sqlx::query_as::<_, Chord>(
            "SELECT c.* FROM chords c \
             JOIN song_chords sc ON sc.chord_id = c.id \
             WHERE sc.song_id = $1 \
             ORDER BY c.name ASC",
        )
        .bind(song_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list song chords", e))
    }

    /// Record the public URL of an uploaded sheet.
    pub async fn set_sheet_url(&self, id: Uuid, url: &str) -> AppResult<Song> {
        sqlx::query_as::<_, Song>("UPDATE songs SET sheet_url = $2 WHERE id = $1 RETURNING *")
            .bind(id)
            .bind(url)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to set song sheet url", e)
            })?
            .ok_or_else(|| AppError::not_found(format!("Song {id} not found")))
    }

    /// Record the public URL of an uploaded recording.
    pub async fn set_audio_url(&self, id: Uuid, url: &str) -> AppResult<Song> {
        sqlx::query_as::<_, Song>("UPDATE songs SET audio_url = $2 WHERE id = $1 RETURNING *")
            .bind(id)
            .bind(url)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to set song audio url", e)
            })?
            .ok_or_else(|| AppError::not_found(format!("Song {id} not found")))
    }
}
