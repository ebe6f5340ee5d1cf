//! # chordbook-api
//!
//! HTTP API layer for Chordbook. Maps already-parsed request data onto
//! the service layer and service errors onto HTTP status codes. All
//! domain logic lives below this crate.

pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::build_router;
pub use state::AppState;
