//! Request and response bodies for the website endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Request body for `POST /api/analyze`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct AnalyzeRequest {
    /// Website to analyze, e.g. `https://acme.com`.
    #[serde(default)]
    pub url: Option<String>,
}

/// Request body for `PUT /api/nurdd/{id}`.
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateDescriptionRequest {
    /// Replacement description.
    #[serde(default)]
    pub description: Option<String>,
}

/// Confirmation body, e.g. for `DELETE /api/nurdd/{id}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    /// Confirmation text.
    pub message: String,
}
