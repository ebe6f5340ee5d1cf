//! Saved-library domain entities (per-user bookmarks).

pub mod model;

pub use model::{SavedChord, SavedSong};
