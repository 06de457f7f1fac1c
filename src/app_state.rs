//! Shared application state injected into all Axum handlers.

use std::sync::Arc;

use crate::service::WebsiteService;

/// Shared application state available to all handlers via Axum's
/// `State` extractor.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Website service for all business logic.
    pub website_service: Arc<WebsiteService>,
}

impl AppState {
    /// Wraps a service for sharing across handlers.
    #[must_use]
    pub fn new(website_service: WebsiteService) -> Self {
        Self {
            website_service: Arc::new(website_service),
        }
    }
}
