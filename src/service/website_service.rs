//! Website service: analyze, list, edit and delete records.

use std::sync::Arc;

use chrono::Utc;

use crate::domain::{AnalyzedWebsite, InvalidSiteUrl, NewWebsite, SiteUrl, WebsiteId};
use crate::error::ApiError;
use crate::persistence::WebsiteStore;
use crate::scraper::Scraper;

/// Message for update/delete on an id with no row.
pub const NOT_FOUND_MESSAGE: &str = "Website not found";

/// Orchestration layer for all record operations.
///
/// Stateless coordinator over a [`Scraper`] and a [`WebsiteStore`]. The
/// analyze flow is strictly ordered: validate → scrape → insert. A record
/// only appears once the whole chain succeeds, so failures leave no rows.
#[derive(Debug, Clone)]
pub struct WebsiteService {
    scraper: Arc<dyn Scraper>,
    store: Arc<dyn WebsiteStore>,
}

impl WebsiteService {
    /// Creates a new `WebsiteService`.
    #[must_use]
    pub fn new(scraper: Arc<dyn Scraper>, store: Arc<dyn WebsiteStore>) -> Self {
        Self { scraper, store }
    }

    /// Scrapes `raw_url` and stores the result as a new record.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Validation`] if the URL is missing or malformed.
    /// - [`ApiError::Upstream`] if the scraper reports an error, times out
    ///   or prints something other than a reply object.
    /// - [`ApiError::Dependency`] if the insert fails.
    /// - [`ApiError::Internal`] if the scraper cannot be started.
    pub async fn analyze(&self, raw_url: Option<&str>) -> Result<AnalyzedWebsite, ApiError> {
        let raw_url = raw_url.ok_or_else(|| validation(&InvalidSiteUrl::Missing))?;
        let url = SiteUrl::parse(raw_url).map_err(|e| validation(&e))?;
        tracing::info!(url = %url, "analyzing website");

        let profile = self.scraper.scrape(&url).await?;

        let record = self
            .store
            .insert(NewWebsite::new(url, profile, Utc::now()))
            .await?;

        tracing::info!(id = %record.id, url = %record.url, brandname = %record.brandname, "website stored");
        Ok(record)
    }

    /// Returns all records, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Dependency`] on datastore failure.
    pub async fn list(&self) -> Result<Vec<AnalyzedWebsite>, ApiError> {
        self.store.list().await
    }

    /// Replaces the description of record `id`.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Validation`] if `description` is missing or blank.
    /// - [`ApiError::NotFound`] if no record has this id.
    /// - [`ApiError::Dependency`] on datastore failure.
    pub async fn update_description(
        &self,
        id: WebsiteId,
        description: Option<&str>,
    ) -> Result<AnalyzedWebsite, ApiError> {
        let description = description
            .filter(|d| !d.trim().is_empty())
            .ok_or_else(|| ApiError::Validation("Description is required".to_string()))?;

        let updated = self
            .store
            .update_description(id, description)
            .await?
            .ok_or_else(|| ApiError::NotFound(NOT_FOUND_MESSAGE.to_string()))?;

        tracing::info!(%id, "description updated");
        Ok(updated)
    }

    /// Permanently deletes record `id`.
    ///
    /// # Errors
    ///
    /// - [`ApiError::NotFound`] if no record has this id.
    /// - [`ApiError::Dependency`] on datastore failure.
    pub async fn delete(&self, id: WebsiteId) -> Result<(), ApiError> {
        if !self.store.delete(id).await? {
            return Err(ApiError::NotFound(NOT_FOUND_MESSAGE.to_string()));
        }
        tracing::info!(%id, "website deleted");
        Ok(())
    }
}

fn validation(err: &InvalidSiteUrl) -> ApiError {
    ApiError::Validation(err.to_string())
}
