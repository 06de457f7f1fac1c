//! Domain layer: the analyzed-website record and its value types.
//!
//! A record is created once from a successful scrape, may have its
//! description edited, and may be deleted. Nothing else about it changes.

pub mod site_url;
pub mod website;
pub mod website_id;

pub use site_url::{InvalidSiteUrl, SiteUrl};
pub use website::{AnalyzedWebsite, BrandProfile, NewWebsite};
pub use website_id::WebsiteId;
