mod health_check;
mod root;

use axum::Router;

pub fn router() -> Router {
    Router::new()
        .merge(root::router())
        .merge(health_check::router())
}
