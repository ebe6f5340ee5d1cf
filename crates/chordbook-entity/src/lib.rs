//! # chordbook-entity
//!
//! Domain entity models for Chordbook. Every struct in this crate
//! represents a database table row or a domain value object. All entities
//! derive `Debug`, `Clone`, `Serialize`, `Deserialize`, and database
//! entities additionally derive `sqlx::FromRow`.

pub mod chord;
pub mod library;
pub mod song;
pub mod user;
