use axum::routing::get;
use axum::{Json, Router};
use models::RootResponse;

use crate::http::method_not_allowed_handler;

pub fn router() -> Router {
    Router::new().route("/", get(root).fallback(method_not_allowed_handler))
}

async fn root() -> Json<RootResponse> {
    Json(RootResponse::good_morning())
}
