use async_trait::async_trait;

use crate::errors::Result;
use crate::goals::goals_model::{Goal, GoalDraft, GoalFilters, GoalPatch, NewGoal};

/// Trait for goal repository operations.
///
/// Absent records are reported as `Ok(None)` (or `Ok(false)` for deletes),
/// never as errors; `Err` is reserved for storage failures.
#[async_trait]
pub trait GoalRepositoryTrait: Send + Sync {
    fn list_goals(&self, filter: &GoalFilters) -> Result<Vec<Goal>>;
    fn find_goal(&self, goal_id: i32) -> Result<Option<Goal>>;
    async fn insert_goal(&self, draft: GoalDraft) -> Result<Goal>;
    async fn replace_goal(&self, goal_id: i32, draft: GoalDraft) -> Result<Option<Goal>>;
    async fn delete_goal(&self, goal_id: i32) -> Result<bool>;
}

/// Trait for goal service operations.
#[async_trait]
pub trait GoalServiceTrait: Send + Sync {
    fn list_goals(&self, filter: &GoalFilters) -> Result<Vec<Goal>>;
    fn get_goal(&self, goal_id: i32) -> Result<Option<Goal>>;
    async fn create_goal(&self, input: NewGoal) -> Result<Goal>;
    async fn replace_goal(&self, goal_id: i32, input: NewGoal) -> Result<Option<Goal>>;
    async fn patch_goal(&self, goal_id: i32, patch: GoalPatch) -> Result<Option<Goal>>;
    async fn delete_goal(&self, goal_id: i32) -> Result<bool>;
}
