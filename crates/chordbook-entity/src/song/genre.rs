//! Song genre enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Musical genre of a song.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type, Default)]
#[sqlx(type_name = "genre", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum Genre {
    Rock,
    Pop,
    Jazz,
    Classic,
    /// Fallback for anything outside the named genres.
    #[default]
    Other,
}

impl Genre {
    /// Return the genre as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rock => "rock",
            Self::Pop => "pop",
            Self::Jazz => "jazz",
            Self::Classic => "classic",
            Self::Other => "other",
        }
    }
}

impl fmt::Display for Genre {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Genre {
    type Err = chordbook_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "rock" => Ok(Self::Rock),
            "pop" => Ok(Self::Pop),
            "jazz" => Ok(Self::Jazz),
            "classic" => Ok(Self::Classic),
            "other" => Ok(Self::Other),
            _ => Err(chordbook_core::AppError::validation(format!(
                "Invalid genre: '{s}'. Expected one of: rock, pop, jazz, classic, other"
            ))),
        }
    }
}
