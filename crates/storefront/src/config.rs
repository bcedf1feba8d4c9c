//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional; the storefront runs with defaults out of
//! the box.
//!
//! - `CAMISETA_HOST` - Bind address (default: 127.0.0.1)
//! - `CAMISETA_PORT` - Listen port (default: 3000)
//! - `CAMISETA_STORAGE_PATH` - JSON state file (default: camiseta_state.json)
//! - `CAMISETA_CACHE_TTL_SECS` - Per-entry cache expiry (default: 900)
//! - `VIACEP_BASE_URL` - Address lookup host (default: <https://viacep.com.br>)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Default per-entry time-to-live for cached selections: 15 minutes.
const DEFAULT_CACHE_TTL_SECS: u64 = 15 * 60;

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
    /// Path of the JSON file backing the selection store
    pub storage_path: PathBuf,
    /// Time-to-live applied to every cached selection entry
    pub cache_ttl: Duration,
    /// ViaCEP configuration
    pub viacep: ViaCepConfig,
}

/// ViaCEP address lookup configuration.
#[derive(Debug, Clone)]
pub struct ViaCepConfig {
    /// Base URL of the lookup service (scheme + host, no trailing slash)
    pub base_url: String,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("CAMISETA_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("CAMISETA_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("CAMISETA_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("CAMISETA_PORT".to_string(), e.to_string()))?;
        let storage_path =
            PathBuf::from(get_env_or_default("CAMISETA_STORAGE_PATH", "camiseta_state.json"));
        let cache_ttl_secs = match get_optional_env("CAMISETA_CACHE_TTL_SECS") {
            Some(raw) => raw.parse::<u64>().map_err(|e| {
                ConfigError::InvalidEnvVar("CAMISETA_CACHE_TTL_SECS".to_string(), e.to_string())
            })?,
            None => DEFAULT_CACHE_TTL_SECS,
        };
        let viacep = ViaCepConfig::from_env()?;

        Ok(Self {
            host,
            port,
            storage_path,
            cache_ttl: Duration::from_secs(cache_ttl_secs),
            viacep,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl ViaCepConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let base_url = get_env_or_default("VIACEP_BASE_URL", "https://viacep.com.br");

        // Catch malformed overrides at startup rather than on first lookup
        url::Url::parse(&base_url)
            .map_err(|e| ConfigError::InvalidEnvVar("VIACEP_BASE_URL".to_string(), e.to_string()))?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
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
