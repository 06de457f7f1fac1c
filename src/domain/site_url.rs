//! Loose validation for submitted website URLs.
//!
//! This is a sanity check, not full URL conformance: the input must start
//! with a literal `http://` or `https://`, contain no whitespace or control
//! characters, and parse as a URL whose host contains a dot.

use std::fmt;

use url::Url;

/// Rejected URL input, with the reason shown to the client.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidSiteUrl {
    /// No URL was supplied.
    #[error("URL is required")]
    Missing,

    /// The input does not look like `scheme://host.tld`.
    #[error("invalid URL: {0}")]
    Malformed(String),
}

/// A submitted URL that passed validation.
///
/// Keeps the caller's exact input, so the stored `url` equals the
/// submitted string rather than a normalized form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteUrl {
    raw: String,
}

impl SiteUrl {
    /// Validates `input`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidSiteUrl::Missing`] for an empty string and
    /// [`InvalidSiteUrl::Malformed`] when the input does not start with
    /// `http://` or `https://`, contains whitespace or control characters,
    /// or its host has no dot.
    pub fn parse(input: &str) -> Result<Self, InvalidSiteUrl> {
        if input.trim().is_empty() {
            return Err(InvalidSiteUrl::Missing);
        }
        let malformed = || InvalidSiteUrl::Malformed(input.to_string());

        // Checked on the raw input; the URL parser would repair these.
        let stray = input.chars().any(|c| c.is_whitespace() || c.is_control());
        if stray || !has_http_prefix(input) {
            return Err(malformed());
        }

        let parsed = Url::parse(input).map_err(|_| malformed())?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(malformed());
        }
        let host = parsed.host_str().ok_or_else(malformed)?;
        let dotted = host.contains('.') && !host.starts_with('.') && !host.ends_with('.');
        if !dotted {
            return Err(malformed());
        }

        Ok(Self {
            raw: input.to_string(),
        })
    }

    /// Returns the URL exactly as submitted.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// Consumes the wrapper, returning the submitted string.
    #[must_use]
    pub fn into_string(self) -> String {
        self.raw
    }
}

fn has_http_prefix(input: &str) -> bool {
    ["http://", "https://"].iter().any(|prefix| {
        input
            .get(..prefix.len())
            .is_some_and(|head| head.eq_ignore_ascii_case(prefix))
    })
}

impl fmt::Display for SiteUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl AsRef<str> for SiteUrl {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}
