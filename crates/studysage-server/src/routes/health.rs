//! Liveness route.

use std::sync::Arc;

use axum::routing::get;
use axum::{Json, Router};

use crate::state::AppState;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/", get(home))
}

/// GET / — liveness check.
async fn home() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Backend is running!" }))
}
