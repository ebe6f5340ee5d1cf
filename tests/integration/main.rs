//! Integration tests for the Chordbook HTTP API.
//!
//! These tests exercise the full router against a real PostgreSQL
//! database. They are skipped (pass vacuously) when
//! `CHORDBOOK_TEST_DATABASE_URL` is not set.

mod helpers;

mod auth_test;
mod chord_test;
mod song_test;
