use axum::extract::State;
use axum::Json;
use serde_json::{json, Value};

use crate::state::SharedState;

/// Liveness probe. Never touches the record store.
pub async fn health(State(state): State<SharedState>) -> Json<Value> {
    let uptime = state.started_at.elapsed().as_secs_f64();
    Json(json!({ "status": "ok", "uptime": uptime }))
}
