//! Song entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use super::genre::Genre;

/// A song in the catalog.
///
/// Titles are not unique — covers and arrangements may legitimately share
/// a title. Only chords and usernames carry uniqueness.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Song {
    /// Unique song identifier.
    pub id: Uuid,
    /// Song title.
    pub title: String,
    /// Full lyrics text.
    pub lyrics: Option<String>,
    /// Musical genre.
    pub genre: Genre,
    /// Public URL of the uploaded sheet (image or PDF).
    pub sheet_url: Option<String>,
    /// Public URL of the uploaded recording.
    pub audio_url: Option<String>,
    /// The admin who added this song.
    pub author_id: Uuid,
    /// When the song was added.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new song.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSong {
    /// Song title.
    pub title: String,
    /// Full lyrics text.
    pub lyrics: Option<String>,
    /// Musical genre.
    pub genre: Genre,
    /// Chords the song uses; each must already exist in the catalog.
    pub chord_ids: Vec<Uuid>,
    /// The admin adding the song.
    pub author_id: Uuid,
}

