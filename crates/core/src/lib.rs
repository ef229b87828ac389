//! Database-agnostic domain layer for the investment goals API.
//!
//! Storage-specific concerns (Diesel, SQLite, connection pooling) live in
//! `invest-goals-storage-sqlite`, which implements the repository trait
//! defined here.

pub mod errors;
pub mod goals;

pub use errors::{DatabaseError, Error, Result, ValidationError};
