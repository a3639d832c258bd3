pub mod config;
pub mod error;
pub mod models;
pub mod routes;
pub mod state;
pub mod store;
pub mod submission;

use std::sync::Arc;
use std::time::Instant;

use axum::handler::HandlerWithoutStateExt;
use axum::http::{HeaderName, HeaderValue};
use axum::Router;
use tower::ServiceBuilder;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::state::{AppState, SharedState};
use crate::store::SubmissionStore;

pub fn build_app(config: Config, store: Arc<dyn SubmissionStore>) -> Router {
    let static_dir = config.static_dir.clone();
    let max_body_size = config.max_body_size;

    let state: SharedState = Arc::new(AppState {
        config,
        store,
        started_at: Instant::now(),
    });

    let router = Router::new()
        .merge(routes::api_routes())
        .method_not_allowed_fallback(routes::not_found);

    // Static assets only answer paths the API does not claim.
    let router = match static_dir {
        Some(dir) => router.fallback_service(
            ServeDir::new(dir)
                .call_fallback_on_method_not_allowed(true)
                .not_found_service(routes::not_found.into_service()),
        ),
        None => router.fallback(routes::not_found),
    };

    // Security headers
    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(SetResponseHeaderLayer::overriding(
                    HeaderName::from_static("x-content-type-options"),
                    HeaderValue::from_static("nosniff"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    HeaderName::from_static("x-frame-options"),
                    HeaderValue::from_static("DENY"),
                ))
                .layer(SetResponseHeaderLayer::overriding(
                    HeaderName::from_static("referrer-policy"),
                    HeaderValue::from_static("strict-origin-when-cross-origin"),
                ))
                .layer(RequestBodyLimitLayer::new(max_body_size)),
        )
        .with_state(state)
}
