//! HTTP API handlers.

use std::sync::Arc;

use axum::{response::IntoResponse, Json};
use serde::Serialize;
use utoipa::ToSchema;

use crate::config::Settings;
use crate::metrics;

/// Application state shared with handlers.
///
/// Holds no mutable domain state, only the settings snapshot.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Immutable settings snapshot.
    pub settings: Arc<Settings>,
}

impl AppState {
    /// Create new app state.
    pub fn new(settings: Arc<Settings>) -> Self {
        Self { settings }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Arc::new(Settings::default()))
    }
}

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Status: "ok".
    pub status: &'static str,
}

/// Greeting response.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    /// Greeting message.
    pub message: &'static str,
}

/// Health check handler - always returns 200.
#[utoipa::path(
    get,
    path = "/healthz",
    responses((status = 200, description = "Service is alive", body = HealthResponse))
)]
pub async fn healthz() -> impl IntoResponse {
    metrics::inc_requests("/healthz");
    Json(HealthResponse { status: "ok" })
}

/// Greeting handler - always returns 200.
#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Greeting", body = MessageResponse))
)]
pub async fn root() -> impl IntoResponse {
    metrics::inc_requests("/");
    Json(MessageResponse {
        message: "Hello from FastAPI",
    })
}
