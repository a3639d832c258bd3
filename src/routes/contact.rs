use axum::body::Bytes;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

use crate::error::AppError;
use crate::state::SharedState;
use crate::submission::pipeline::SubmitOutcome;
use crate::submission::{parser, pipeline};

pub async fn submit(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Response, AppError> {
    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok());

    let payload = parser::parse_body(content_type, &body).map_err(AppError::BadRequest)?;

    let response = match pipeline::run(state.store.as_ref(), &payload).await {
        SubmitOutcome::Accepted { message, .. } => (
            StatusCode::CREATED,
            Json(json!({ "ok": true, "message": message })),
        )
            .into_response(),
        SubmitOutcome::Rejected { errors } => (
            StatusCode::BAD_REQUEST,
            Json(json!({ "ok": false, "errors": errors })),
        )
            .into_response(),
        SubmitOutcome::StorageFailure => {
            return Err(AppError::Internal("contact submission was not stored".to_string()));
        }
    };

    Ok(response)
}
