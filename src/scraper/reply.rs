//! Decoding of the scraper's stdout.

use serde::Deserialize;

use super::ScrapeError;
use crate::domain::BrandProfile;

/// The single JSON object a scraper prints.
///
/// The error shape is tried first, so an object carrying an `error` string
/// is always a failure even if it also has brand fields.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum ScraperReply {
    /// `{"error": "..."}`
    Failure {
        /// Message reported by the scraper.
        error: String,
    },
    /// `{"brandname": "...", "description": "..."}`
    Success {
        /// Extracted brand name.
        brandname: String,
        /// Extracted description.
        description: String,
    },
}

impl ScraperReply {
    /// Parses raw stdout. Surrounding whitespace is allowed; anything else
    /// besides one JSON object is not.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Unparsable`] when stdout matches neither shape.
    pub fn from_stdout(stdout: &[u8]) -> Result<Self, ScrapeError> {
        serde_json::from_slice(stdout).map_err(|_| ScrapeError::Unparsable)
    }

    /// Converts the reply into a result.
    ///
    /// # Errors
    ///
    /// Returns [`ScrapeError::Reported`] for the failure shape.
    pub fn into_result(self) -> Result<BrandProfile, ScrapeError> {
        match self {
            Self::Failure { error } => Err(ScrapeError::Reported(error)),
            Self::Success {
                brandname,
                description,
            } => Ok(BrandProfile {
                brandname,
                description,
            }),
        }
    }
}
