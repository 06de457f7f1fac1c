//! The analyzed-website record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{SiteUrl, WebsiteId};

/// One row of the `nurdd` table.
///
/// `url`, `brandname` and `timestamp` are fixed at creation; only
/// `description` is editable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct AnalyzedWebsite {
    /// Datastore-assigned identifier.
    pub id: WebsiteId,
    /// URL as submitted.
    pub url: String,
    /// Brand name extracted by the scraper.
    pub brandname: String,
    /// Description extracted by the scraper, possibly edited since.
    pub description: String,
    /// Insert time, serialized as ISO-8601. Sole sort key for listing.
    pub timestamp: DateTime<Utc>,
}

/// Brand metadata produced by a successful scrape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BrandProfile {
    /// Brand or site name.
    pub brandname: String,
    /// Short site description.
    pub description: String,
}

/// Insert payload for a new record; the datastore assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWebsite {
    /// URL as submitted.
    pub url: String,
    /// Brand name.
    pub brandname: String,
    /// Description.
    pub description: String,
    /// Insert time.
    pub timestamp: DateTime<Utc>,
}

impl NewWebsite {
    /// Combines a validated URL with its scrape result, stamped at `timestamp`.
    #[must_use]
    pub fn new(url: SiteUrl, profile: BrandProfile, timestamp: DateTime<Utc>) -> Self {
        Self {
            url: url.into_string(),
            brandname: profile.brandname,
            description: profile.description,
            timestamp,
        }
    }

    /// Attaches the datastore-assigned id.
    #[must_use]
    pub fn with_id(self, id: WebsiteId) -> AnalyzedWebsite {
        AnalyzedWebsite {
            id,
            url: self.url,
            brandname: self.brandname,
            description: self.description,
            timestamp: self.timestamp,
        }
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_iso_timestamp() {
        let Ok(url) = SiteUrl::parse("https://acme.com") else {
            panic!("valid url");
        };
        let profile = BrandProfile {
            brandname: "Acme".to_string(),
            description: "Tools".to_string(),
        };
        let Some(ts) = DateTime::from_timestamp(1_700_000_000, 0) else {
            panic!("valid timestamp");
        };
        let record = NewWebsite::new(url, profile, ts).with_id(WebsiteId::new(1));

        let Ok(json) = serde_json::to_value(&record) else {
            panic!("serialization failed");
        };
        assert_eq!(
            json,
            serde_json::json!({
                "id": 1,
                "url": "https://acme.com",
                "brandname": "Acme",
                "description": "Tools",
                "timestamp": "2023-11-14T22:13:20Z",
            })
        );
    }
}
