use std::sync::Arc;

use async_trait::async_trait;
use diesel::prelude::*;

use invest_goals_core::goals::{Goal, GoalDraft, GoalFilters, GoalRepositoryTrait};
use invest_goals_core::Result;

use super::model::{GoalDB, GoalRowChanges};
use crate::db::{get_connection, DbPool};
use crate::errors::StorageError;
use crate::schema::investment_goals;
use crate::schema::investment_goals::dsl::*;

pub struct GoalRepository {
    pool: Arc<DbPool>,
}

impl GoalRepository {
    pub fn new(pool: Arc<DbPool>) -> Self {
        GoalRepository { pool }
    }
}

#[async_trait]
impl GoalRepositoryTrait for GoalRepository {
    fn list_goals(&self, filter: &GoalFilters) -> Result<Vec<Goal>> {
        let mut conn = get_connection(&self.pool)?;

        // Filter clauses are assembled conditionally; the pattern values are
        // always bound parameters.
        let mut query = investment_goals.into_boxed();
        if let Some(name_filter) = filter.name.as_deref() {
            // SQLite LIKE is ASCII case-insensitive, which matches the
            // case-insensitive substring semantics of the list filter.
            query = query.filter(name.like(format!("%{}%", name_filter)));
        }
        if let Some(month_filter) = filter.month {
            // Month codes are quote-delimited inside the stored JSON array
            // and none is a substring of another.
            query = query.filter(months.like(format!("%\"{}\"%", month_filter)));
        }

        let rows = query
            .order(id.desc())
            .load::<GoalDB>(&mut conn)
            .map_err(StorageError::from)?;
        rows.into_iter().map(GoalDB::into_domain).collect()
    }

    fn find_goal(&self, goal_id: i32) -> Result<Option<Goal>> {
        let mut conn = get_connection(&self.pool)?;
        let row = investment_goals
            .find(goal_id)
            .first::<GoalDB>(&mut conn)
            .optional()
            .map_err(StorageError::from)?;
        row.map(GoalDB::into_domain).transpose()
    }

    async fn insert_goal(&self, draft: GoalDraft) -> Result<Goal> {
        let mut conn = get_connection(&self.pool)?;
        let new_row = GoalRowChanges::from_draft(&draft)?;

        let row = diesel::insert_into(investment_goals::table)
            .values(&new_row)
            .returning(GoalDB::as_returning())
            .get_result::<GoalDB>(&mut conn)
            .map_err(StorageError::from)?;
        row.into_domain()
    }

    async fn replace_goal(&self, goal_id: i32, draft: GoalDraft) -> Result<Option<Goal>> {
        let mut conn = get_connection(&self.pool)?;
        let changes = GoalRowChanges::from_draft(&draft)?;

        let affected = diesel::update(investment_goals.find(goal_id))
            .set(&changes)
            .execute(&mut conn)
            .map_err(StorageError::from)?;
        if affected == 0 {
            return Ok(None);
        }

        let row = investment_goals
            .find(goal_id)
            .first::<GoalDB>(&mut conn)
            .map_err(StorageError::from)?;
        row.into_domain().map(Some)
    }

    async fn delete_goal(&self, goal_id: i32) -> Result<bool> {
        let mut conn = get_connection(&self.pool)?;
        let affected = diesel::delete(investment_goals.find(goal_id))
            .execute(&mut conn)
            .map_err(StorageError::from)?;
        Ok(affected > 0)
    }
}
