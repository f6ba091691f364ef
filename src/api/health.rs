//! Health and liveness endpoints

use axum::Json;
use serde_json::{json, Value};

/// GET /health
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

/// GET /live
pub async fn live() -> Json<Value> {
    Json(json!({ "status": "alive" }))
}
