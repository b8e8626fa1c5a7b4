//! # Frontier Server
//!
//! REST server for the Frontier mean-variance engine.
//!
//! ## Endpoints
//!
//! - `GET /health`, `GET /api/v1/health`
//! - `GET /api/v1/assets`: assets known to the price source
//! - `POST /api/v1/statistics`: per-asset statistics
//! - `POST /api/v1/frontier`: bundle for caller-supplied returns and covariance
//! - `POST /api/v1/frontier/assets`: bundle for assets served by the price source
//!
//! ## Usage
//!
//! ```ignore
//! use frontier_server::Server;
//!
//! let server = Server::new(config, source);
//! server.start().await?;
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;

use std::net::SocketAddr;

use axum::Router;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

pub use config::ServerConfig;
pub use error::ApiError;
pub use handlers::{AppState, SharedSource};

/// The Frontier server.
pub struct Server {
    config: ServerConfig,
    source: SharedSource,
}

impl Server {
    /// Create a new server.
    pub fn new(config: ServerConfig, source: SharedSource) -> Self {
        Self { config, source }
    }

    /// Build the router.
    pub fn router(&self) -> Router {
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        routes::create_router(AppState::new(self.source.clone(), &self.config))
            .layer(TraceLayer::new_for_http())
            .layer(cors)
    }

    /// Start the server.
    pub async fn start(&self) -> Result<(), std::io::Error> {
        let addr = SocketAddr::new(
            self.config.host.parse().unwrap_or([0, 0, 0, 0].into()),
            self.config.port,
        );

        info!("Starting Frontier server on {}", addr);

        let listener = TcpListener::bind(addr).await?;
        axum::serve(listener, self.router()).await
    }
}
