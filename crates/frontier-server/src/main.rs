//! Frontier server entry point.

use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use frontier_ext_file::{CsvPriceSource, InMemoryPriceSource};
use frontier_server::{Server, ServerConfig, SharedSource};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,frontier=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Frontier Server v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config/frontier.toml".to_string());

    let server_config = if std::path::Path::new(&config_path).exists() {
        info!("Loading configuration from {}", config_path);
        ServerConfig::from_file(&config_path)?
    } else {
        info!("Using default configuration");
        ServerConfig::default()
    };

    // Price source
    let source: SharedSource = match &server_config.prices_file {
        Some(path) => {
            let csv = CsvPriceSource::new(path)?;
            info!(path = %path, assets = csv.len(), "loaded price file");
            Arc::new(csv)
        }
        None => {
            info!("No prices file configured; only raw-input endpoints will succeed");
            Arc::new(InMemoryPriceSource::new())
        }
    };

    // Start server
    let server = Server::new(server_config, source);
    server.start().await?;

    Ok(())
}
