//! Liveness endpoints

use crate::state::AppState;
use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

/// Greeting returned by `GET /`
#[derive(Debug, Serialize)]
pub struct HelloResponse {
    /// Greeting text
    pub message: String,
    /// Always "ok"
    pub status: String,
}

/// Health payload returned by `GET /api/health`
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Always "healthy" while the server is serving
    pub status: String,
    /// Crate version
    pub version: String,
    /// Human-readable status
    pub message: String,
    /// HPI at or above which samples are classified as unsafe
    #[serde(rename = "criticalHpi")]
    pub critical_hpi: f64,
}

/// GET / - Hello world
pub async fn hello_world() -> Json<HelloResponse> {
    Json(HelloResponse {
        message: "Hello from HMPI Backend!".to_string(),
        status: "ok".to_string(),
    })
}

/// GET /api/health - Health check
pub async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        message: "Backend is healthy".to_string(),
        critical_hpi: state.config.calculation.critical_hpi,
    })
}
