//! Chord domain entities.

pub mod model;

pub use model::{Chord, CreateChord, FRET_MAX, FRET_MIN, STRING_COUNT, validate_frets};
