//! HTTP server setup and configuration.
//!
//! This module provides the router and application state used by both
//! the production server and integration tests.

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use crate::api;
use crate::services::ResizePipeline;

/// Request body ceiling (10 MiB), enforced before the pipeline runs.
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<ResizePipeline>,
}

/// Create application state with the production image codec.
pub fn create_app_state() -> AppState {
    AppState {
        pipeline: Arc::new(ResizePipeline::new()),
    }
}

/// Build the API router with all endpoints and middleware.
///
/// This is the core router used by both production and tests.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/resize_image", post(handle_resize))
        // Health check
        .route("/health", get(|| async { "OK" }))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
}

// Wrapper handler to extract the pipeline for the underlying API handler

async fn handle_resize(
    axum::extract::State(state): axum::extract::State<AppState>,
    headers: axum::http::HeaderMap,
    body: axum::body::Bytes,
) -> Result<axum::response::Response, crate::error::ApiError> {
    api::handle_resize(axum::extract::State(state.pipeline), headers, body)
        .await
        .map(axum::response::IntoResponse::into_response)
}
