//! Authentication use cases: register, login, current-user lookup.

pub mod service;

pub use service::{AuthService, LoginResult};
