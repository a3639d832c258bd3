pub mod contact;
pub mod health;

use axum::routing::{get, post};
use axum::Router;

use crate::error::AppError;
use crate::state::SharedState;

pub fn api_routes() -> Router<SharedState> {
    Router::new()
        .route("/api/health", get(health::health))
        .route("/api/contact", post(contact::submit))
}

/// Uniform JSON 404 for unknown routes and unsupported methods.
pub async fn not_found() -> AppError {
    AppError::NotFound
}
