//! API module
//!
//! Contains HTTP request handlers and the router that wires them together.

pub mod health;
pub mod hmpi;

use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// Build the application router with tracing and CORS layers applied
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check and hello world
        .route("/", get(health::hello_world))
        .route("/api/health", get(health::health_check))
        // Pollution index API
        .route("/api/hmpi/calculate", post(hmpi::calculate))
        .route("/api/hmpi/standards", get(hmpi::list_standards))
        .layer(
            TraceLayer::new_for_http().make_span_with(|request: &axum::http::Request<_>| {
                tracing::info_span!(
                    "http_request",
                    method = %request.method(),
                    uri = %request.uri(),
                )
            }),
        )
        .layer(CorsLayer::permissive()) // Allow all origins for development
        .with_state(state)
}
