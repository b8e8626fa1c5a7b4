//! Server configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use frontier_engine::EngineConfig;
use frontier_stats::StatisticsConfig;

/// Server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    #[serde(default = "default_host")]
    pub host: String,

    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,

    /// Daily closes in long CSV format
    pub prices_file: Option<String>,

    /// Risk-free rate used when a request omits one (decimal fraction)
    #[serde(default)]
    pub risk_free_rate: f64,

    /// Upper bound on statistics provider calls, in milliseconds
    #[serde(default = "default_request_timeout_ms")]
    pub request_timeout_ms: u64,

    /// Curve sampling
    #[serde(default)]
    pub engine: EngineConfig,

    /// Historical window and annualization
    #[serde(default)]
    pub statistics: StatisticsConfig,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8080
}

fn default_request_timeout_ms() -> u64 {
    30_000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            prices_file: None,
            risk_free_rate: 0.0,
            request_timeout_ms: default_request_timeout_ms(),
            engine: EngineConfig::default(),
            statistics: StatisticsConfig::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &str) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }

    /// The request timeout as a [`Duration`].
    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}
