//! Concrete repository implementations over the PostgreSQL pool.
//!
//! Repositories translate constraint violations into domain errors:
//! unique violations become `Conflict`, foreign-key violations on insert
//! become `NotFound` (the referenced row does not exist).

pub mod chord;
pub mod library;
pub mod song;
pub mod user;

pub use chord::ChordRepository;
pub use library::LibraryRepository;
pub use song::SongRepository;
pub use user::UserRepository;
