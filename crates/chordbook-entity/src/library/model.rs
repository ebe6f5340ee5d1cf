//! Bookmark join rows: a user's saved chords and songs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A chord bookmarked by a user. The (user, chord) pair is unique.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SavedChord {
    /// The bookmarking user.
    pub user_id: Uuid,
    /// The bookmarked chord.
    pub chord_id: Uuid,
    /// When the bookmark was created.
    pub saved_at: DateTime<Utc>,
}

/// A song bookmarked by a user. The (user, song) pair is unique.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct SavedSong {
    /// The bookmarking user.
    pub user_id: Uuid,
    /// The bookmarked song.
    pub song_id: Uuid,
    /// When the bookmark was created.
    pub saved_at: DateTime<Utc>,
}
