//! Saved-library use cases (per-user bookmarks).

pub mod service;

pub use service::LibraryService;
