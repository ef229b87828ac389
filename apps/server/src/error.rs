use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use invest_goals_core::errors::Error as CoreError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("Investment goal not found.")]
    NotFound,
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::Core(CoreError::Validation(e)) => (StatusCode::BAD_REQUEST, e.to_string()),
            ApiError::Core(e) => {
                // Full detail stays server-side; clients get a fixed message.
                tracing::error!(error = %e, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Could not process the investment goal request.".to_string(),
                )
            }
            ApiError::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
        };
        let body = Json(ErrorBody { message });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
