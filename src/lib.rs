//! # nurdd-server
//!
//! REST backend for the nurdd website analyzer.
//!
//! A client submits a website URL; the server runs an external scraper
//! process against it, decodes the brand name and description the scraper
//! prints as JSON, and stores the result in the `nurdd` table. The dashboard
//! lists, edits and deletes stored rows through the same API. Scraping
//! itself is delegated to the external program; this service is glue.
//!
//! ## Architecture
//!
//! ```text
//! Clients (dashboard, HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── WebsiteService (service/)
//!     │       │
//!     │       ├── Scraper (scraper/) ──► child process: <cmd> <url>
//!     │       │
//!     │       └── WebsiteStore (persistence/)
//!     │
//!     └── PostgreSQL `nurdd` table (or in-memory store)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod persistence;
pub mod scraper;
pub mod service;

#[cfg(test)]
pub(crate) mod test_support;
