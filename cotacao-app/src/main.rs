//! # Cotacao Application
//!
//! Binary that wires together all the components:
//! - Load configuration from environment
//! - Initialize the upstream fetcher and, optionally, the SQLite store
//! - Create the quote service
//! - Start the HTTP server

mod config;

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cotacao_hex::{QuoteService, inbound::HttpServer, outbound::AwesomeApiFetcher};
use cotacao_repo::SqliteStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing subscriber
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,cotacao_app=debug,cotacao_hex=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = config::Config::from_env()?;

    tracing::info!("Starting quote relay server on port {}", config.port);

    let mut service = QuoteService::new(AwesomeApiFetcher::new());

    if let Some(database_url) = &config.database_url {
        tracing::info!("Quote persistence enabled, using database: {}", database_url);
        let store = SqliteStore::new(database_url).await?;
        service = service.with_store(Arc::new(store));
    } else {
        tracing::info!("Quote persistence disabled, running as a plain relay");
    }

    // Create and run the HTTP server
    let server = HttpServer::new(service);
    let addr = format!("0.0.0.0:{}", config.port);

    server.run(&addr).await?;

    Ok(())
}
