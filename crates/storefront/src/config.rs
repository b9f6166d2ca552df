//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `STOREFRONT_DATA_DIR` - Directory for persisted blobs (default: data)
//! - `PREDICT_API_URL` - Upstream price-prediction endpoint; when absent
//!   every prediction is served from the fixed fallback
//! - `PREDICT_TIMEOUT_SECS` - Upstream call timeout (default: 7)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Default timeout for the prediction upstream, in seconds.
pub const DEFAULT_PREDICT_TIMEOUT_SECS: u64 = 7;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Directory holding the persisted cart and order blobs
    pub data_dir: PathBuf,
    /// Price-prediction upstream configuration
    pub predict: PredictConfig,
}

/// Price-prediction upstream configuration.
#[derive(Debug, Clone)]
pub struct PredictConfig {
    /// Upstream endpoint URL. `None` forces fallback-always behavior.
    pub upstream_url: Option<String>,
    /// Timeout for a single upstream call.
    pub timeout: Duration,
}

impl Default for PredictConfig {
    fn default() -> Self {
        Self {
            upstream_url: None,
            timeout: Duration::from_secs(DEFAULT_PREDICT_TIMEOUT_SECS),
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a provided variable fails to parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("STOREFRONT_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("STOREFRONT_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("STOREFRONT_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("STOREFRONT_PORT".to_string(), e.to_string()))?;
        let data_dir = PathBuf::from(get_env_or_default("STOREFRONT_DATA_DIR", "data"));
        let predict = PredictConfig::from_env()?;

        Ok(Self {
            host,
            port,
            data_dir,
            predict,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl PredictConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let timeout_secs = match get_optional_env("PREDICT_TIMEOUT_SECS") {
            Some(raw) => raw.parse::<u64>().map_err(|e| {
                ConfigError::InvalidEnvVar("PREDICT_TIMEOUT_SECS".to_string(), e.to_string())
            })?,
            None => DEFAULT_PREDICT_TIMEOUT_SECS,
        };

        Ok(Self {
            upstream_url: get_optional_env("PREDICT_API_URL"),
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
