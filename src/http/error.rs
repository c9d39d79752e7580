use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::any::Any;
use tracing::error;

const AGGREGATION_FAILED: &str = "Failed to fetch and organize data for all buildings";

/// Failure while serving the schedule. The detail is logged, never returned.
#[derive(Debug)]
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        error!(error = ?self.0, "Error fetching and organizing data for all buildings");
        aggregation_failed()
    }
}

fn aggregation_failed() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": AGGREGATION_FAILED })),
    )
        .into_response()
}

/// Turns a panic inside a handler into the same 500 an [`AppError`] renders.
pub fn handle_panic(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic payload"
    };
    error!(panic = detail, "Request handler panicked while building the room schedule");
    aggregation_failed()
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError(err)
    }
}
