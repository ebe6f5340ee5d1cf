//! Chord entity model and fret-shape validation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use chordbook_core::AppResult;
use chordbook_core::error::AppError;

/// Number of strings on a standard guitar; every chord shape carries
/// exactly this many fret values.
pub const STRING_COUNT: usize = 6;
/// Lowest allowed fret value; -1 marks a muted string.
pub const FRET_MIN: i32 = -1;
/// Highest allowed fret value.
pub const FRET_MAX: i32 = 24;

/// A guitar chord in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Chord {
    /// Unique chord identifier.
    pub id: Uuid,
    /// Unique chord name (e.g. "Am7").
    pub name: String,
    /// Fret value per string, low E to high E. -1 = muted, 0 = open.
    pub frets: Vec<i32>,
    /// Free-form fingering notes.
    pub description: Option<String>,
    /// Public URL of the uploaded diagram image.
    pub image_url: Option<String>,
    /// Public URL of the uploaded sound sample.
    pub audio_url: Option<String>,
    /// The admin who added this chord.
    pub created_by: Uuid,
    /// When the chord was added.
    pub created_at: DateTime<Utc>,
}

/// Data required to create a new chord.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateChord {
    /// Unique chord name.
    pub name: String,
    /// Fret value per string.
    pub frets: Vec<i32>,
    /// Free-form fingering notes.
    pub description: Option<String>,
    /// The admin adding the chord.
    pub created_by: Uuid,
}

/// Validate a chord fret shape: exactly [`STRING_COUNT`] values, each
/// between [`FRET_MIN`] and [`FRET_MAX`] inclusive.
pub fn validate_frets(frets: &[i32]) -> AppResult<()> {
    if frets.len() != STRING_COUNT {
        return Err(AppError::validation(format!(
            "A chord must have exactly {STRING_COUNT} fret values, got {}",
            frets.len()
        )));
    }
    for &fret in frets {
        if !(FRET_MIN..=FRET_MAX).contains(&fret) {
            return Err(AppError::validation(format!(
                "Fret value {fret} is out of range [{FRET_MIN}, {FRET_MAX}]"
            )));
        }
    }
    Ok(())
}
