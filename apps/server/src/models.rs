//! Wire-format models for the HTTP API, with OpenAPI schema derives.
//! Conversions to/from the core domain types keep the handlers thin.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use invest_goals_core::goals as core_goals;

/// A persisted investment goal as returned to clients.
#[derive(Serialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: i32,
    pub name: String,
    /// Month codes, e.g. "JAN".
    pub months: Vec<String>,
    pub value: f64,
    pub monthly_value: f64,
}

impl From<core_goals::Goal> for Goal {
    fn from(goal: core_goals::Goal) -> Self {
        Self {
            id: goal.id,
            name: goal.name,
            months: goal.months.iter().map(|m| m.code().to_string()).collect(),
            value: goal.value,
            monthly_value: goal.monthly_value,
        }
    }
}

/// Payload for creating or fully replacing a goal.
#[derive(Deserialize, Debug, Clone, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    pub name: String,
    pub months: Vec<String>,
    pub value: f64,
}

impl From<NewGoal> for core_goals::NewGoal {
    fn from(payload: NewGoal) -> Self {
        Self {
            name: payload.name,
            months: payload.months,
            value: payload.value,
        }
    }
}

/// Payload for a partial update; at least one field must be supplied.
#[derive(Deserialize, Debug, Clone, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct GoalPatch {
    pub name: Option<String>,
    pub months: Option<Vec<String>>,
    pub value: Option<f64>,
}

impl From<GoalPatch> for core_goals::GoalPatch {
    fn from(payload: GoalPatch) -> Self {
        Self {
            name: payload.name,
            months: payload.months,
            value: payload.value,
        }
    }
}

/// Confirmation or error message body.
#[derive(Serialize, Debug, Clone, ToSchema)]
pub struct Message {
    pub message: String,
}
