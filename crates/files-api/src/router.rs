//! Route definitions for the Files Manager HTTP API.

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware as axum_middleware,
    routing::{get, put},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Headroom for the JSON envelope around a base64 payload.
const BODY_ENVELOPE_BYTES: usize = 64 * 1024;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let body_limit = body_limit(state.config.storage.max_upload_size_bytes);
    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .merge(file_routes())
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Base64 inflates content by 4/3.
fn body_limit(max_upload_size_bytes: u64) -> usize {
    let max = usize::try_from(max_upload_size_bytes).unwrap_or(usize::MAX);
    (max / 3)
        .saturating_mul(4)
        .saturating_add(4)
        .saturating_add(BODY_ENVELOPE_BYTES)
}

/// File create, lookup, listing, visibility and content
fn file_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/files",
            get(handlers::file::list_files).post(handlers::file::create_file),
        )
        .route("/files/{id}", get(handlers::file::get_file))
        .route("/files/{id}/publish", put(handlers::file::publish_file))
        .route("/files/{id}/unpublish", put(handlers::file::unpublish_file))
        .route("/files/{id}/data", get(handlers::file::get_file_data))
}
