//! Song domain entities.

pub mod genre;
pub mod model;

pub use genre::Genre;
pub use model::{CreateSong, Song};
