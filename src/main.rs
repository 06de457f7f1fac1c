//! nurdd-server entry point.
//!
//! Loads configuration, wires the scraper and datastore into the service,
//! and starts the Axum HTTP server.

use std::sync::Arc;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use nurdd_server::api;
use nurdd_server::app_state::AppState;
use nurdd_server::config::{LogFormat, ServerConfig, StoreBackend};
use nurdd_server::persistence::{self, MemoryWebsiteStore, PostgresWebsiteStore, WebsiteStore};
use nurdd_server::scraper::{ProcessScraper, Scraper};
use nurdd_server::service::WebsiteService;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = ServerConfig::from_env().context("invalid configuration")?;

    // Initialize tracing
    init_tracing(config.log_format);
    tracing::info!(addr = %config.listen_addr, "starting nurdd-server");

    // Build datastore
    let store: Arc<dyn WebsiteStore> = match config.store_backend {
        StoreBackend::Postgres => {
            let pool = persistence::connect(&config.database)
                .await
                .context("failed to connect to database")?;
            if config.database.run_migrations {
                persistence::run_migrations(&pool)
                    .await
                    .context("failed to run migrations")?;
            }
            Arc::new(PostgresWebsiteStore::new(pool))
        }
        StoreBackend::Memory => {
            tracing::warn!("using in-memory store; records are lost on restart");
            Arc::new(MemoryWebsiteStore::new())
        }
    };

    // Build scraper
    tracing::info!(
        command = %config.scraper.command,
        args = ?config.scraper.args,
        timeout = ?config.scraper.timeout,
        max_concurrency = config.scraper.max_concurrency,
        "scraper configured"
    );
    let scraper: Arc<dyn Scraper> = Arc::new(ProcessScraper::new(&config.scraper));

    // Build application
    let app_state = AppState::new(WebsiteService::new(scraper, store));
    let app = api::build_app(app_state, api::cors_layer(config.frontend_origin.clone()));

    // Start server
    let listener = tokio::net::TcpListener::bind(config.listen_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.listen_addr))?;
    tracing::info!(addr = %config.listen_addr, "server listening");

    axum::serve(listener, app).await?;

    Ok(())
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    match format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init(),
        LogFormat::Pretty => tracing_subscriber::fmt().with_env_filter(filter).init(),
    }
}
