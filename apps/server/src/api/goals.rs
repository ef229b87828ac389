use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};

use crate::{
    error::{ApiError, ApiResult},
    main_lib::AppState,
    models::{Goal, GoalPatch, Message, NewGoal},
};
use invest_goals_core::goals::GoalFilters;

#[utoipa::path(get, path = "/investment-goals",
    params(
        ("name" = Option<String>, Query, description = "Case-insensitive substring filter on the name"),
        ("month" = Option<String>, Query, description = "Month code the goal's months must include"),
    ),
    responses((status = 200, body = [Goal]), (status = 500, body = Message)))]
pub(crate) async fn list_goals(
    State(state): State<Arc<AppState>>,
    Query(filter): Query<GoalFilters>,
) -> ApiResult<Json<Vec<Goal>>> {
    let goals = state.goal_service.list_goals(&filter)?;
    Ok(Json(goals.into_iter().map(Goal::from).collect()))
}

#[utoipa::path(post, path = "/investment-goals", request_body = NewGoal,
    responses((status = 201, body = Goal), (status = 400, body = Message), (status = 500, body = Message)))]
pub(crate) async fn create_goal(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewGoal>,
) -> ApiResult<(StatusCode, Json<Goal>)> {
    let goal = state.goal_service.create_goal(payload.into()).await?;
    Ok((StatusCode::CREATED, Json(Goal::from(goal))))
}

#[utoipa::path(get, path = "/investment-goals/{id}",
    responses((status = 200, body = Goal), (status = 404, body = Message), (status = 500, body = Message)))]
pub(crate) async fn get_goal(
    Path(goal_id): Path<i32>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Goal>> {
    let goal = state
        .goal_service
        .get_goal(goal_id)?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(Goal::from(goal)))
}

#[utoipa::path(put, path = "/investment-goals/{id}", request_body = NewGoal,
    responses((status = 200, body = Goal), (status = 400, body = Message), (status = 404, body = Message), (status = 500, body = Message)))]
pub(crate) async fn replace_goal(
    Path(goal_id): Path<i32>,
    State(state): State<Arc<AppState>>,
    Json(payload): Json<NewGoal>,
) -> ApiResult<Json<Goal>> {
    let goal = state
        .goal_service
        .replace_goal(goal_id, payload.into())
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(Goal::from(goal)))
}

#[utoipa::path(patch, path = "/investment-goals/{id}", request_body = GoalPatch,
    responses((status = 200, body = Goal), (status = 400, body = Message), (status = 404, body = Message), (status = 500, body = Message)))]
pub(crate) async fn patch_goal(
    Path(goal_id): Path<i32>,
    State(state): State<Arc<AppState>>,
    Json(payload): Json<GoalPatch>,
) -> ApiResult<Json<Goal>> {
    let goal = state
        .goal_service
        .patch_goal(goal_id, payload.into())
        .await?
        .ok_or(ApiError::NotFound)?;
    Ok(Json(Goal::from(goal)))
}

#[utoipa::path(delete, path = "/investment-goals/{id}",
    responses((status = 200, body = Message), (status = 404, body = Message), (status = 500, body = Message)))]
pub(crate) async fn delete_goal(
    Path(goal_id): Path<i32>,
    State(state): State<Arc<AppState>>,
) -> ApiResult<Json<Message>> {
    if !state.goal_service.delete_goal(goal_id).await? {
        return Err(ApiError::NotFound);
    }
    Ok(Json(Message {
        message: "Investment goal deleted.".to_string(),
    }))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_goals).post(create_goal))
        .route(
            "/{id}",
            get(get_goal)
                .put(replace_goal)
                .patch(patch_goal)
                .delete(delete_goal),
        )
}
