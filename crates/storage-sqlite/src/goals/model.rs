//! Database models for goals.

use diesel::prelude::*;

use crate::errors::StorageError;
use invest_goals_core::goals::{Goal, GoalDraft, Month};
use invest_goals_core::Result;

/// Database row for an investment goal. Months are persisted as a JSON
/// array of month codes in a TEXT column.
#[derive(Queryable, Identifiable, Selectable, PartialEq, Debug, Clone)]
#[diesel(table_name = crate::schema::investment_goals)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct GoalDB {
    pub id: i32,
    pub name: String,
    pub months: String,
    pub total_value: f64,
    pub monthly_value: f64,
}

/// Column values for inserting a new goal or overwriting the mutable
/// columns of an existing one. The id is never written.
#[derive(Insertable, AsChangeset, Debug, Clone)]
#[diesel(table_name = crate::schema::investment_goals)]
pub struct GoalRowChanges {
    pub name: String,
    pub months: String,
    pub total_value: f64,
    pub monthly_value: f64,
}

impl GoalDB {
    pub fn into_domain(self) -> Result<Goal> {
        let months: Vec<Month> = serde_json::from_str(&self.months)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        Ok(Goal {
            id: self.id,
            name: self.name,
            months,
            value: self.total_value,
            monthly_value: self.monthly_value,
        })
    }
}

impl GoalRowChanges {
    pub fn from_draft(draft: &GoalDraft) -> Result<Self> {
        let months = serde_json::to_string(&draft.months)
            .map_err(|e| StorageError::SerializationError(e.to_string()))?;
        Ok(GoalRowChanges {
            name: draft.name.clone(),
            months,
            total_value: draft.value,
            monthly_value: draft.monthly_value,
        })
    }
}
