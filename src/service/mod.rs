//! Service layer: business logic orchestration.
//!
//! [`WebsiteService`] validates input, runs the scraper and persists
//! results through the [`crate::persistence::WebsiteStore`].

pub mod website_service;

pub use website_service::WebsiteService;
