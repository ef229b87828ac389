use std::sync::Arc;

use axum::{extract::State, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::main_lib::AppState;

#[derive(Serialize, ToSchema)]
pub(crate) struct LivenessInfo {
    status: &'static str,
    service: &'static str,
    uptime: f64,
    timestamp: String,
}

/// Liveness info for the root route: process status, uptime in seconds,
/// and the current timestamp.
#[utoipa::path(get, path = "/", responses((status = 200, body = LivenessInfo)))]
pub(crate) async fn liveness(State(state): State<Arc<AppState>>) -> Json<LivenessInfo> {
    Json(LivenessInfo {
        status: "healthy",
        service: "investment-goals-api",
        uptime: state.started_at.elapsed().as_secs_f64(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}
