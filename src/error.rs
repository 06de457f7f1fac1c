//! API error types with HTTP status code mapping.
//!
//! [`ApiError`] is the central error type for request handling. Each variant
//! maps to one HTTP status code, and every error reaches the client as the
//! flat JSON body `{"error": "<message>"}`.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use utoipa::ToSchema;

use crate::scraper::ScrapeError;

/// Message returned to the client for any [`ApiError::Internal`].
pub const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

/// JSON error response body.
///
/// ```json
/// { "error": "Website not found" }
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct ErrorResponse {
    /// Human-readable error message.
    pub error: String,
}

/// Server-side error enum with HTTP status code mapping.
///
/// | Variant      | Cause                                   | HTTP Status |
/// |--------------|-----------------------------------------|-------------|
/// | `Validation` | missing or malformed input              | 400         |
/// | `NotFound`   | id has no matching row                  | 404         |
/// | `Upstream`   | scraper reported or produced bad output | 500         |
/// | `Dependency` | datastore call failed                   | 500         |
/// | `Internal`   | anything unexpected                     | 500         |
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Request validation failed.
    #[error("{0}")]
    Validation(String),

    /// No record matches the requested id.
    #[error("{0}")]
    NotFound(String),

    /// The scraper reported an error or its output was unusable.
    #[error("{0}")]
    Upstream(String),

    /// The datastore rejected or failed a call.
    #[error("{0}")]
    Dependency(String),

    /// Unexpected failure. The detail is logged, never returned.
    #[error("internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Returns the HTTP status code for this variant.
    #[must_use]
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Upstream(_) | Self::Dependency(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Returns the message the client sees for this error.
    #[must_use]
    pub fn client_message(&self) -> String {
        match self {
            Self::Internal(_) => INTERNAL_ERROR_MESSAGE.to_string(),
            other => other.to_string(),
        }
    }
}

impl From<ScrapeError> for ApiError {
    fn from(err: ScrapeError) -> Self {
        match err {
            ScrapeError::Spawn { .. } | ScrapeError::Io(_) => Self::Internal(err.to_string()),
            ScrapeError::Reported(message) => Self::Upstream(message),
            ScrapeError::Unparsable | ScrapeError::Timeout(_) | ScrapeError::ExitStatus(_) => {
                Self::Upstream(err.to_string())
            }
        }
    }
}

impl From<sqlx::Error> for ApiError {
    fn from(err: sqlx::Error) -> Self {
        Self::Dependency(err.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::warn!(error = %self, %status, "request rejected");
        }
        let body = ErrorResponse {
            error: self.client_message(),
        };
        (status, axum::Json(body)).into_response()
    }
}
