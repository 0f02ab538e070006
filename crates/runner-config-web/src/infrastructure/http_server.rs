//! HTTP server: router construction and the serve loop.
//!
//! Each request runs in its own Tokio task.  The only state shared between
//! requests is [`AppState`], which is read-only after startup.  Shutdown is
//! graceful: the caller passes a future (Ctrl+C in `main.rs`) and in-flight
//! requests finish before [`run_server`] returns.

use std::future::Future;
use std::sync::Arc;

use anyhow::Context;
use axum::body::Body;
use axum::extract::DefaultBodyLimit;
use axum::http::Request;
use axum::routing::{get, post};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::{info, info_span, Level};
use uuid::Uuid;

use crate::application::ConfigWriter;
use crate::domain::ServerConfig;
use crate::infrastructure::handlers::{self, AppState};
use crate::infrastructure::writer::FsConfigWriter;

/// Builds the editor's router.
///
/// | Method | Path     | Handler                  |
/// |--------|----------|--------------------------|
/// | GET    | `/`      | [`handlers::choose_file`]|
/// | POST   | `/open/` | [`handlers::open_file`]  |
/// | POST   | `/edit/` | [`handlers::edit_file`]  |
pub fn create_router(state: AppState, max_body_bytes: usize) -> Router {
    Router::new()
        .route("/", get(handlers::choose_file))
        .route("/open/", post(handlers::open_file))
        .route("/edit/", post(handlers::edit_file))
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    info_span!(
                        "request",
                        id = %Uuid::new_v4(),
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                })
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}

/// Binds `config.bind_addr` and serves until `shutdown` resolves.
///
/// # Errors
///
/// Returns an error if the listener cannot be bound (port in use, missing
/// permission) or the server fails while accepting connections.
pub async fn run_server<F>(config: ServerConfig, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind HTTP listener on {}", config.bind_addr))?;
    let local_addr = listener
        .local_addr()
        .context("listener has no local address")?;

    let writer: Arc<dyn ConfigWriter> = Arc::new(FsConfigWriter::new(config.output_dir.clone()));
    match &config.output_dir {
        Some(dir) => info!("saving configs to {}", dir.display()),
        None => info!("saving configs to the working directory"),
    }

    let app = create_router(AppState::new(writer), config.max_upload_bytes);

    info!("Started app on http://{local_addr} ... ctrl-c to shut down.");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await
        .context("HTTP server failed")?;

    Ok(())
}
