use crate::config::Config;
use anyhow::Context;
use axum::http::Uri;
use axum::response::IntoResponse;
use axum::{body::Body, http::Request, Router};
use std::future::Future;
use std::net::TcpListener;
use tower::ServiceBuilder;
use tower_request_id::{RequestId, RequestIdLayer};
use tracing::info_span;

/// Defines a common error type to use for all request handlers
mod error;

/// Contains all the routes of the application
mod routes;

pub use error::{Error, ErrorBody};

use tower_http::trace::TraceLayer;

/// Builds the complete application: route table, fallbacks and request tracing.
pub fn router() -> Router {
    Router::new()
        .merge(routes::router())
        .fallback(not_found_handler)
        .layer(
            ServiceBuilder::new().layer(RequestIdLayer).layer(
                TraceLayer::new_for_http().make_span_with(|request: &Request<Body>| {
                    let request_id = request
                        .extensions()
                        .get::<RequestId>()
                        .map(ToString::to_string)
                        .unwrap_or_else(|| "unknown".into());

                    info_span!(
                        "request",
                        id = %request_id,
                        method = %request.method(),
                        uri = %request.uri()
                    )
                }),
            ),
        )
}

/// Binds the configured address and serves until Ctrl+C (or SIGTERM on unix).
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let addr = config.socket_addr()?;

    let listener = TcpListener::bind(addr).with_context(|| format!("failed to bind {}", addr))?;

    run(listener, shutdown_signal()).await
}

/// Serves on an already bound listener until `shutdown` resolves.
///
/// In-flight requests are allowed to complete before this returns, and the
/// listener is dropped on return.
pub async fn run<F>(listener: TcpListener, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()>,
{
    let addr = listener
        .local_addr()
        .context("failed to read listener address")?;

    let server = axum::Server::from_tcp(listener)
        .context("failed to adopt listener")?
        .serve(router().into_make_service());

    tracing::info!("listening on http://{}", addr);

    server
        .with_graceful_shutdown(shutdown)
        .await
        .context("error running HTTP server")?;

    tracing::info!("server stopped");

    Ok(())
}

async fn not_found_handler(_: Uri) -> impl IntoResponse {
    Error::NotFound
}

pub(crate) async fn method_not_allowed_handler() -> impl IntoResponse {
    Error::MethodNotAllowed
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to listen for Ctrl+C: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!("failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("received SIGTERM, shutting down"),
    }
}
