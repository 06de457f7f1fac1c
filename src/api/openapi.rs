//! OpenAPI document for the REST surface.

use utoipa::OpenApi;

use super::dto::{AnalyzeRequest, MessageResponse, UpdateDescriptionRequest};
use super::handlers::system::HealthResponse;
use crate::domain::{AnalyzedWebsite, WebsiteId};
use crate::error::ErrorResponse;

/// Generated OpenAPI specification.
#[derive(Debug, OpenApi)]
#[openapi(
    paths(
        crate::api::handlers::website::analyze,
        crate::api::handlers::website::list_websites,
        crate::api::handlers::website::update_description,
        crate::api::handlers::website::delete_website,
        crate::api::handlers::system::health_handler,
    ),
    components(schemas(
        AnalyzedWebsite,
        WebsiteId,
        AnalyzeRequest,
        UpdateDescriptionRequest,
        MessageResponse,
        ErrorResponse,
        HealthResponse,
    )),
    tags(
        (name = "Websites", description = "Analyze websites and manage stored results"),
        (name = "System", description = "Service health"),
    )
)]
pub struct ApiDoc;

/// Swagger UI at `/swagger-ui`, serving the document at `/api-docs/openapi.json`.
#[cfg(feature = "swagger-ui")]
#[must_use]
pub fn swagger_ui() -> utoipa_swagger_ui::SwaggerUi {
    utoipa_swagger_ui::SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi())
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route() {
        let Ok(doc) = serde_json::to_value(ApiDoc::openapi()) else {
            panic!("openapi serialization failed");
        };
        let Some(paths) = doc.get("paths") else {
            panic!("paths missing");
        };
        for path in ["/api/analyze", "/api/data", "/api/nurdd/{id}", "/health"] {
            assert!(paths.get(path).is_some(), "{path} missing from openapi");
        }
        let Some(item) = paths.get("/api/nurdd/{id}") else {
            panic!("item missing");
        };
        assert!(item.get("put").is_some());
        assert!(item.get("delete").is_some());
    }
}
