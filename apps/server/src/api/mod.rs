mod goals;
mod health;

use std::sync::Arc;

use axum::{routing::get, Json, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use utoipa::OpenApi;

use crate::main_lib::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Investment Goals API",
        description = "REST API for creating, listing, updating and deleting investment goals."
    ),
    paths(
        health::liveness,
        goals::list_goals,
        goals::create_goal,
        goals::get_goal,
        goals::replace_goal,
        goals::patch_goal,
        goals::delete_goal,
    ),
    components(schemas(
        crate::models::Goal,
        crate::models::NewGoal,
        crate::models::GoalPatch,
        crate::models::Message,
        health::LivenessInfo,
    ))
)]
struct ApiDoc;

pub fn app_router(state: Arc<AppState>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let openapi = ApiDoc::openapi();

    Router::new()
        .route("/", get(health::liveness))
        .nest("/investment-goals", goals::router())
        .route("/openapi.json", get(move || async move { Json(openapi) }))
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
