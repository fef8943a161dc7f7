//! Request handlers

mod catalog;

pub use catalog::*;

use crate::state::AppState;
use axum::{extract::State, Json};
use bookstore_core::BookApi;
use serde::Serialize;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    /// REST backend status: `healthy` or `unreachable`
    pub backend: String,
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let backend = match state.api.health().await {
        Ok(health) if !health.status.is_empty() => health.status,
        Ok(_) => "healthy".to_string(),
        Err(err) => {
            tracing::warn!(%err, "Backend health check failed");
            "unreachable".to_string()
        }
    };

    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        backend,
    })
}
