//! Saved-library repository: per-user chord and song bookmarks.

use sqlx::PgPool;
use uuid::Uuid;

use chordbook_core::error::{AppError, ErrorKind};
use chordbook_core::result::AppResult;
use chordbook_entity::chord::Chord;
use chordbook_entity::library::{SavedChord, SavedSong};
use chordbook_entity::song::Song;

/// Repository for bookmark link/unlink/list operations.
///
/// Both join tables share the same contract: a duplicate pair is a
/// `Conflict`, a dangling target reference is `NotFound`, and unlinking
/// an absent row is `NotFound`.
#[derive(Debug, Clone)]
pub struct LibraryRepository {
    pool: PgPool,
}

impl LibraryRepository {
    /// Create a new library repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Bookmark a chord for a user.
    pub async fn save_chord(&self, user_id: Uuid, chord_id: Uuid) -> AppResult<SavedChord> {
        sqlx::query_as::<_, SavedChord>(
            "INSERT INTO saved_chords (user_id, chord_id) VALUES ($1, $2) RETURNING *",
        )
        .bind(user_id)
        .bind(chord_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("uq_saved_chord") => {
                AppError::conflict("Chord is already saved")
            }
            sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                AppError::not_found(format!("Chord {chord_id} not found"))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to save chord", e),
        })
    }

    /// Remove a user's chord bookmark.
    pub async fn unsave_chord(&self, user_id: Uuid, chord_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM saved_chords WHERE user_id = $1 AND chord_id = $2")
            .bind(user_id)
            .bind(chord_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to unsave chord", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Chord is not saved"));
        }
        Ok(())
    }

    /// List the chords a user has bookmarked, most recent first.
    pub async fn saved_chords(&self, user_id: Uuid) -> AppResult<Vec<Chord>> {
        sqlx::query_as::<_, Chord>(
            "SELECT c.* FROM chords c \
             JOIN saved_chords sc ON sc.chord_id = c.id \
             WHERE sc.user_id = $1 \
             ORDER BY sc.saved_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list saved chords", e))
    }

    /// Bookmark a song for a user.
    pub async fn save_song(&self, user_id: Uuid, song_id: Uuid) -> AppResult<SavedSong> {
        sqlx::query_as::<_, SavedSong>(
            "INSERT INTO saved_songs (user_id, song_id) VALUES ($1, $2) RETURNING *",
        )
        .bind(user_id)
        .bind(song_id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_err) if db_err.constraint() == Some("uq_saved_song") => {
                AppError::conflict("Song is already saved")
            }
            sqlx::Error::Database(ref db_err) if db_err.is_foreign_key_violation() => {
                AppError::not_found(format!("Song {song_id} not found"))
            }
            _ => AppError::with_source(ErrorKind::Database, "Failed to save song", e),
        })
    }

    /// Remove a user's song bookmark.
    pub async fn unsave_song(&self, user_id: Uuid, song_id: Uuid) -> AppResult<()> {
        let result = sqlx::query("DELETE FROM saved_songs WHERE user_id = $1 AND song_id = $2")
            .bind(user_id)
            .bind(song_id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to unsave song", e))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found("Song is not saved"));
        }
        Ok(())
    }

    /// List the songs a user has bookmarked, most recent first.
    pub async fn saved_songs(&self, user_id: Uuid) -> AppResult<Vec<Song>> {
        sqlx::query_as::<_, Song>(
            "SELECT s.* FROM songs s \
             JOIN saved_songs ss ON ss.song_id = s.id \
             WHERE ss.user_id = $1 \
             ORDER BY ss.saved_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list saved songs", e))
    }
}
