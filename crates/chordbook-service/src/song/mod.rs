//! Song catalog use cases.

pub mod service;

pub use service::{CreateSongRequest, SongService, SongWithChords};
