//! Request DTOs with validation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use chordbook_entity::song::Genre;
use chordbook_entity::user::UserRole;

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterRequest {
    /// Desired username.
    #[validate(length(min = 3, max = 50, message = "Username must be 3-50 characters"))]
    pub username: String,
    /// Plaintext password (policy-checked by the auth service).
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username.
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Role change request (admin).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetRoleRequest {
    /// The role to assign.
    pub role: UserRole,
}

/// Create chord request (admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateChordRequest {
    /// Unique chord name.
    #[validate(length(min = 1, max = 100, message = "Chord name must be 1-100 characters"))]
    pub name: String,
    /// Fret value per string; count and range are checked by the service.
    pub frets: Vec<i32>,
    /// Free-form fingering notes.
    pub description: Option<String>,
}

/// Create song request (admin).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateSongRequest {
    /// Song title.
    #[validate(length(min = 1, max = 200, message = "Song title must be 1-200 characters"))]
    pub title: String,
    /// Full lyrics text.
    pub lyrics: Option<String>,
    /// Musical genre; defaults to "other".
    pub genre: Option<Genre>,
    /// Chords the song uses.
    #[serde(default)]
    pub chord_ids: Vec<Uuid>,
}

/// Query parameters for chord listing.
#[derive(Debug, Clone, Deserialize)]
pub struct ChordListQuery {
    /// Case-insensitive name substring.
    pub search: Option<String>,
    /// Page number (1-based).
    pub page: Option<u64>,
    /// Items per page.
    pub page_size: Option<u64>,
}

/// Query parameters for song listing.
#[derive(Debug, Clone, Deserialize)]
pub struct SongListQuery {
    /// Case-insensitive title substring.
    pub search: Option<String>,
    /// Exact genre match.
    pub genre: Option<Genre>,
    /// Only songs using this chord.
    pub chord_id: Option<Uuid>,
    /// Page number (1-based).
    pub page: Option<u64>,
    /// Items per page.
    pub page_size: Option<u64>,
}

/// Query parameters for user listing.
#[derive(Debug, Clone, Deserialize)]
pub struct UserListQuery {
    /// Page number (1-based).
    pub page: Option<u64>,
    /// Items per page.
    pub page_size: Option<u64>,
}
