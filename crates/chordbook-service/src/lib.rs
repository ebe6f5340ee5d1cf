//! # chordbook-service
//!
//! Business logic service layer for Chordbook. Each service orchestrates
//! repositories, the media store, and authentication to implement
//! application-level use cases.
//!
//! Services follow constructor injection — all dependencies are provided
//! at construction time via `Arc` references.

pub mod auth;
pub mod chord;
pub mod context;
pub mod library;
pub mod media;
pub mod song;
pub mod user;

pub use auth::AuthService;
pub use chord::ChordService;
pub use context::RequestContext;
pub use library::LibraryService;
pub use media::MediaService;
pub use song::SongService;
pub use user::AdminUserService;
