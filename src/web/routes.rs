use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use super::handlers::{embed_handler, extract_handler, health_check};
use super::state::AppState;

/// Build the application router.
///
/// Stored images are served under `/display`, mirroring the directory they are
/// written to.
pub fn router(state: Arc<AppState>, max_upload_bytes: usize) -> Router {
    let display = ServeDir::new(state.store.display_dir());

    Router::new()
        .route("/embed", post(embed_handler))
        .route("/extract", post(extract_handler))
        .route("/api/health", get(health_check))
        .nest_service("/display", display)
        .layer(DefaultBodyLimit::max(max_upload_bytes))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
