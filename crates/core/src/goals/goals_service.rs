use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::Result;
use crate::goals::goals_model::{Goal, GoalFilters, GoalPatch, NewGoal};
use crate::goals::goals_traits::{GoalRepositoryTrait, GoalServiceTrait};

/// Validates payloads, derives the monthly value, and delegates persistence
/// to the repository.
pub struct GoalService<T: GoalRepositoryTrait> {
    goal_repo: Arc<T>,
}

impl<T: GoalRepositoryTrait> GoalService<T> {
    pub fn new(goal_repo: Arc<T>) -> Self {
        GoalService { goal_repo }
    }
}

#[async_trait]
impl<T: GoalRepositoryTrait> GoalServiceTrait for GoalService<T> {
    fn list_goals(&self, filter: &GoalFilters) -> Result<Vec<Goal>> {
        self.goal_repo.list_goals(filter)
    }

    fn get_goal(&self, goal_id: i32) -> Result<Option<Goal>> {
        self.goal_repo.find_goal(goal_id)
    }

    async fn create_goal(&self, input: NewGoal) -> Result<Goal> {
        let draft = input.validate()?;
        self.goal_repo.insert_goal(draft).await
    }

    async fn replace_goal(&self, goal_id: i32, input: NewGoal) -> Result<Option<Goal>> {
        let draft = input.validate()?;
        self.goal_repo.replace_goal(goal_id, draft).await
    }

    async fn patch_goal(&self, goal_id: i32, patch: GoalPatch) -> Result<Option<Goal>> {
        let changes = patch.validate()?;

        // Read-then-write without a transaction: concurrent patches to the
        // same id are last-write-wins.
        let Some(current) = self.goal_repo.find_goal(goal_id)? else {
            return Ok(None);
        };
        let draft = changes.apply(&current);
        self.goal_repo.replace_goal(goal_id, draft).await
    }

    async fn delete_goal(&self, goal_id: i32) -> Result<bool> {
        self.goal_repo.delete_goal(goal_id).await
    }
}
