//! SQLite storage implementation for goals.

mod model;
mod repository;

pub use model::{GoalDB, GoalRowChanges};
pub use repository::GoalRepository;
