//! Type-safe website record identifier.
//!
//! [`WebsiteId`] wraps the integer identity the datastore assigns on
//! insert, so record ids cannot be confused with other integers.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Identifier of a stored [`super::AnalyzedWebsite`].
///
/// Assigned by the datastore on insert, immutable afterwards and never
/// reused after deletion.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, ToSchema,
)]
#[serde(transparent)]
pub struct WebsiteId(i64);

impl WebsiteId {
    /// Wraps a raw datastore id.
    #[must_use]
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Returns the raw datastore id.
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for WebsiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for WebsiteId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

impl From<i64> for WebsiteId {
    fn from(raw: i64) -> Self {
        Self(raw)
    }
}

impl From<WebsiteId> for i64 {
    fn from(id: WebsiteId) -> Self {
        id.0
    }
}
