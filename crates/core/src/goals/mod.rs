//! Goals module - domain models, validation, services, and traits.

mod goals_model;
mod goals_service;
mod goals_traits;

pub use goals_model::{
    monthly_value, Goal, GoalChanges, GoalDraft, GoalFilters, GoalPatch, Month, NewGoal,
};
pub use goals_service::GoalService;
pub use goals_traits::{GoalRepositoryTrait, GoalServiceTrait};
