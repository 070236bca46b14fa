use axum::routing::get;
use axum::{Json, Router};
use models::HealthResponse;

use crate::http::method_not_allowed_handler;

pub fn router() -> Router {
    Router::new().route("/health", get(health).fallback(method_not_allowed_handler))
}

/// Liveness only; there are no dependencies to probe.
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}
