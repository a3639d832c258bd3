use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

pub const NOT_FOUND_MESSAGE: &str = "Route not found";
pub const RETRY_LATER_MESSAGE: &str =
    "Unable to process your request right now. Please retry later.";

#[derive(Debug)]
pub enum AppError {
    NotFound,
    BadRequest(String),
    Internal(String),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::NotFound => write!(f, "Not Found"),
            AppError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            AppError::Internal(msg) => write!(f, "Internal Error: {msg}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::NotFound => (StatusCode::NOT_FOUND, NOT_FOUND_MESSAGE),
            AppError::BadRequest(msg) => {
                tracing::debug!("Bad request: {msg}");
                (StatusCode::BAD_REQUEST, "Invalid request body")
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, RETRY_LATER_MESSAGE)
            }
        };

        let body = json!({ "ok": false, "message": message });
        (status, axum::Json(body)).into_response()
    }
}
