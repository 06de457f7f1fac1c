//! In-process implementation of [`WebsiteStore`].
//!
//! Rows live in a `BTreeMap` behind a [`tokio::sync::RwLock`]. Ids come
//! from a monotonically increasing counter and are never reused, matching
//! an identity column.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{WebsiteStore, newest_first};
use crate::domain::{AnalyzedWebsite, NewWebsite, WebsiteId};
use crate::error::ApiError;

/// Process-local store. Contents are lost on restart.
#[derive(Debug)]
pub struct MemoryWebsiteStore {
    rows: RwLock<BTreeMap<WebsiteId, AnalyzedWebsite>>,
    last_id: AtomicI64,
}

impl MemoryWebsiteStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rows: RwLock::new(BTreeMap::new()),
            last_id: AtomicI64::new(0),
        }
    }

    /// Returns the number of stored rows.
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    /// Returns `true` if the store holds no rows.
    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

impl Default for MemoryWebsiteStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WebsiteStore for MemoryWebsiteStore {
    async fn insert(&self, website: NewWebsite) -> Result<AnalyzedWebsite, ApiError> {
        let id = WebsiteId::new(self.last_id.fetch_add(1, Ordering::Relaxed).saturating_add(1));
        let record = website.with_id(id);
        self.rows.write().await.insert(id, record.clone());
        Ok(record)
    }

    async fn list(&self) -> Result<Vec<AnalyzedWebsite>, ApiError> {
        let mut rows: Vec<AnalyzedWebsite> = self.rows.read().await.values().cloned().collect();
        rows.sort_by(newest_first);
        Ok(rows)
    }

    async fn update_description(
        &self,
        id: WebsiteId,
        description: &str,
    ) -> Result<Option<AnalyzedWebsite>, ApiError> {
        let mut rows = self.rows.write().await;
        Ok(rows.get_mut(&id).map(|row| {
            row.description = description.to_string();
            row.clone()
        }))
    }

    async fn delete(&self, id: WebsiteId) -> Result<bool, ApiError> {
        Ok(self.rows.write().await.remove(&id).is_some())
    }
}
