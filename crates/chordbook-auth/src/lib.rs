//! # chordbook-auth
//!
//! Authentication and authorization for the Chordbook catalog.
//!
//! ## Modules
//!
//! - `jwt` — signed, expiring session token creation and validation
//! - `password` — Argon2id password hashing and policy enforcement
//! - `rbac` — role-based access control enforcement

pub mod jwt;
pub mod password;
pub mod rbac;

pub use jwt::{Claims, JwtDecoder, JwtEncoder};
pub use password::{PasswordHasher, PasswordValidator};
pub use rbac::{Permission, RbacEnforcer, RbacPolicies};
