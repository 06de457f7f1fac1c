//! Persistence layer: storage of analyzed-website records.
//!
//! [`WebsiteStore`] is the seam between the service and the datastore.
//! [`PostgresWebsiteStore`] is the production implementation over
//! `sqlx::PgPool`; [`MemoryWebsiteStore`] keeps rows in process memory.
//! Every call is atomic for the single row it touches; there are no
//! multi-row transactions and no optimistic concurrency checks.

pub mod memory;
pub mod postgres;

use std::fmt;

use async_trait::async_trait;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::config::DatabaseConfig;
use crate::domain::{AnalyzedWebsite, NewWebsite, WebsiteId};
use crate::error::ApiError;

pub use memory::MemoryWebsiteStore;
pub use postgres::PostgresWebsiteStore;

/// CRUD access to the `nurdd` table.
#[async_trait]
pub trait WebsiteStore: Send + Sync + fmt::Debug {
    /// Inserts a row and returns it with its assigned id.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Dependency`] on datastore failure.
    async fn insert(&self, website: NewWebsite) -> Result<AnalyzedWebsite, ApiError>;

    /// Returns every row, newest `timestamp` first.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Dependency`] on datastore failure.
    async fn list(&self) -> Result<Vec<AnalyzedWebsite>, ApiError>;

    /// Replaces the description of row `id`. `None` when no row matches.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Dependency`] on datastore failure.
    async fn update_description(
        &self,
        id: WebsiteId,
        description: &str,
    ) -> Result<Option<AnalyzedWebsite>, ApiError>;

    /// Deletes row `id`. `false` when no row matched.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Dependency`] on datastore failure.
    async fn delete(&self, id: WebsiteId) -> Result<bool, ApiError>;
}

/// Opens a PostgreSQL connection pool.
///
/// # Errors
///
/// Returns a [`sqlx::Error`] if the database cannot be reached.
pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .acquire_timeout(config.connect_timeout)
        .connect(&config.url)
        .await
}

/// Applies the embedded migrations under `migrations/`.
///
/// # Errors
///
/// Returns a [`sqlx::migrate::MigrateError`] if a migration fails.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Newest first; ties broken by the later id.
pub(crate) fn newest_first(a: &AnalyzedWebsite, b: &AnalyzedWebsite) -> std::cmp::Ordering {
    b.timestamp.cmp(&a.timestamp).then_with(|| b.id.cmp(&a.id))
}
