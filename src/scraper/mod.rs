//! External scraper boundary.
//!
//! The scraper is an out-of-process program invoked as
//! `<command> <args...> <url>`. It must print exactly one JSON object to
//! stdout, either `{"brandname", "description"}` or `{"error"}`, and send
//! diagnostics to stderr. [`ProcessScraper`] enforces that contract with a
//! timeout, a concurrency bound and kill-on-drop cancellation.

pub mod process;
pub mod reply;

use std::fmt;
use std::process::ExitStatus;
use std::time::Duration;

use async_trait::async_trait;

use crate::domain::{BrandProfile, SiteUrl};

pub use process::ProcessScraper;
pub use reply::ScraperReply;

/// Failure of a single scrape.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    /// The scraper program could not be started.
    #[error("failed to start scraper `{program}`: {source}")]
    Spawn {
        /// Program that failed to start.
        program: String,
        /// Underlying OS error.
        #[source]
        source: std::io::Error,
    },

    /// Reading the child's output or waiting on it failed.
    #[error("scraper i/o failed: {0}")]
    Io(#[from] std::io::Error),

    /// The scraper ran past its deadline and was killed.
    #[error("scraper timed out after {}s", .0.as_secs_f64())]
    Timeout(Duration),

    /// The scraper printed `{"error": ...}`.
    #[error("{0}")]
    Reported(String),

    /// Stdout was not a single JSON object in either reply shape.
    #[error("failed to parse scraper output")]
    Unparsable,

    /// The scraper printed a result but exited unsuccessfully.
    #[error("scraper exited with status {}", exit_code(.0))]
    ExitStatus(ExitStatus),
}

/// Numeric exit code, or `"signal"` when the child was killed by one.
fn exit_code(status: &ExitStatus) -> String {
    status
        .code()
        .map_or_else(|| "signal".to_string(), |code| code.to_string())
}

/// Something that turns a URL into brand metadata.
#[async_trait]
pub trait Scraper: Send + Sync + fmt::Debug {
    /// Scrapes `url`.
    ///
    /// # Errors
    ///
    /// Returns a [`ScrapeError`] when the scraper cannot run, reports an
    /// error, or produces output outside the reply contract.
    async fn scrape(&self, url: &SiteUrl) -> Result<BrandProfile, ScrapeError>;
}
