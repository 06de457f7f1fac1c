//! System endpoints: health check.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use chrono::Utc;
use serde::Serialize;
use utoipa::ToSchema;

use crate::app_state::AppState;

/// Health check response.
#[derive(Debug, Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always `"healthy"` when the process can answer.
    pub status: String,
    /// Current server time (RFC 3339).
    pub timestamp: String,
    /// Crate version.
    pub version: String,
}

/// `GET /health`: Service health status.
#[utoipa::path(
    get,
    path = "/health",
    tag = "System",
    summary = "Health check",
    description = "Returns service health status, version, and current timestamp.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse),
    )
)]
pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
            timestamp: Utc::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }),
    )
}

/// System routes mounted at the root level (not under /api).
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_handler))
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn health_reports_version() {
        let response = health_handler().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);

        let Ok(bytes) = axum::body::to_bytes(response.into_body(), usize::MAX).await else {
            panic!("body read failed");
        };
        let Ok(json) = serde_json::from_slice::<serde_json::Value>(&bytes) else {
            panic!("body is not json");
        };
        assert_eq!(json.get("status"), Some(&serde_json::json!("healthy")));
        assert_eq!(
            json.get("version"),
            Some(&serde_json::json!(env!("CARGO_PKG_VERSION")))
        );
    }
}
