//! # chordbook-storage
//!
//! Media storage backends for Chordbook. Chord diagrams, sound samples,
//! and song sheets are stored as opaque byte blobs; only their retrieval
//! URLs live in the database.

pub mod local;

pub use local::LocalMediaStorage;
