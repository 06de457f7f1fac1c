//! Child-process scraper.

use std::process::{Output, Stdio};
use std::time::Duration;

use async_trait::async_trait;
use tokio::process::Command;
use tokio::sync::Semaphore;

use super::{ScrapeError, Scraper, ScraperReply};
use crate::config::ScraperConfig;
use crate::domain::{BrandProfile, SiteUrl};

/// Runs the configured scraper program once per URL.
///
/// At most `max_concurrency` children run at a time; further calls wait
/// for a slot. The child is killed when its deadline passes or when the
/// calling future is dropped (for example on client disconnect).
#[derive(Debug)]
pub struct ProcessScraper {
    program: String,
    args: Vec<String>,
    timeout: Option<Duration>,
    slots: Semaphore,
}

impl ProcessScraper {
    /// Creates a scraper from configuration.
    #[must_use]
    pub fn new(config: &ScraperConfig) -> Self {
        let permits = config.max_concurrency.clamp(1, Semaphore::MAX_PERMITS);
        Self {
            program: config.command.clone(),
            args: config.args.clone(),
            timeout: config.timeout,
            slots: Semaphore::new(permits),
        }
    }

    /// Number of scraper processes that could start right now.
    #[must_use]
    pub fn available_slots(&self) -> usize {
        self.slots.available_permits()
    }

    async fn run(&self, url: &SiteUrl) -> Result<Output, ScrapeError> {
        let child = Command::new(&self.program)
            .args(&self.args)
            .arg(url.as_str())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| ScrapeError::Spawn {
                program: self.program.clone(),
                source,
            })?;
        tracing::debug!(url = %url, pid = child.id(), "scraper started");

        // Dropping this future drops the child, which kills it.
        let output = child.wait_with_output();
        let output = match self.timeout {
            Some(limit) => tokio::time::timeout(limit, output)
                .await
                .map_err(|_| ScrapeError::Timeout(limit))?,
            None => output.await,
        };
        Ok(output?)
    }
}

#[async_trait]
impl Scraper for ProcessScraper {
    async fn scrape(&self, url: &SiteUrl) -> Result<BrandProfile, ScrapeError> {
        let _slot = self
            .slots
            .acquire()
            .await
            .map_err(std::io::Error::other)?;

        let output = match self.run(url).await {
            Ok(output) => output,
            Err(err) => {
                tracing::warn!(url = %url, error = %err, "scraper run failed");
                return Err(err);
            }
        };

        for line in String::from_utf8_lossy(&output.stderr)
            .lines()
            .filter(|l| !l.trim().is_empty())
        {
            tracing::warn!(url = %url, line, "scraper stderr");
        }

        let reply = match ScraperReply::from_stdout(&output.stdout) {
            Ok(reply) => reply,
            Err(err) => {
                tracing::warn!(
                    url = %url,
                    status = %output.status,
                    stdout_bytes = output.stdout.len(),
                    "scraper output is not a reply object"
                );
                return Err(err);
            }
        };

        let profile = reply.into_result()?;
        if !output.status.success() {
            return Err(ScrapeError::ExitStatus(output.status));
        }
        tracing::debug!(url = %url, brandname = %profile.brandname, "scrape succeeded");
        Ok(profile)
    }
}
