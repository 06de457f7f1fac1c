//! Test doubles shared by unit tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

use crate::domain::{AnalyzedWebsite, BrandProfile, NewWebsite, SiteUrl, WebsiteId};
use crate::error::ApiError;
use crate::persistence::WebsiteStore;
use crate::scraper::{ScrapeError, Scraper, ScraperReply};

/// Scraper that "prints" a fixed stdout for every URL.
#[derive(Debug)]
pub(crate) struct ScriptedScraper {
    stdout: String,
    calls: AtomicUsize,
}

impl ScriptedScraper {
    pub(crate) fn printing(stdout: &str) -> Self {
        Self {
            stdout: stdout.to_string(),
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Scraper for ScriptedScraper {
    async fn scrape(&self, _url: &SiteUrl) -> Result<BrandProfile, ScrapeError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        ScraperReply::from_stdout(self.stdout.as_bytes())?.into_result()
    }
}

/// Scraper that panics, for exercising the panic boundary.
#[derive(Debug)]
pub(crate) struct PanickingScraper;

#[async_trait]
impl Scraper for PanickingScraper {
    #[allow(clippy::panic)]
    async fn scrape(&self, _url: &SiteUrl) -> Result<BrandProfile, ScrapeError> {
        panic!("scraper blew up");
    }
}

/// Store whose every call fails like an unreachable database.
#[derive(Debug)]
pub(crate) struct UnreachableStore;

fn unreachable_error() -> ApiError {
    ApiError::Dependency("connection refused".to_string())
}

#[async_trait]
impl WebsiteStore for UnreachableStore {
    async fn insert(&self, _website: NewWebsite) -> Result<AnalyzedWebsite, ApiError> {
        Err(unreachable_error())
    }

    async fn list(&self) -> Result<Vec<AnalyzedWebsite>, ApiError> {
        Err(unreachable_error())
    }

    async fn update_description(
        &self,
        _id: WebsiteId,
        _description: &str,
    ) -> Result<Option<AnalyzedWebsite>, ApiError> {
        Err(unreachable_error())
    }

    async fn delete(&self, _id: WebsiteId) -> Result<bool, ApiError> {
        Err(unreachable_error())
    }
}

pub(crate) const ACME_REPLY: &str = r#"{"brandname":"Acme","description":"Tools"}"#;
