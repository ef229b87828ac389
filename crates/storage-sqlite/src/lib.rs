//! SQLite storage implementation for the investment goals API.
//!
//! This crate is the only place in the application where Diesel dependencies
//! exist. It contains:
//! - Database connection pooling and management
//! - Embedded Diesel migrations
//! - The repository implementation for the goal entity
//! - Database-specific model types (with Diesel derives)
//!
//! The domain crate (`invest-goals-core`) is database-agnostic and talks to
//! this crate exclusively through its repository trait.

pub mod db;
pub mod errors;
pub mod goals;
pub mod schema;

// Re-export database utilities
pub use db::{create_pool, get_connection, get_db_path, init, run_migrations, DbConnection, DbPool};

// Re-export storage errors
pub use errors::StorageError;

// Re-export the repository implementation
pub use goals::GoalRepository;

// Re-export from invest-goals-core for convenience
pub use invest_goals_core::errors::{DatabaseError, Error, Result};
