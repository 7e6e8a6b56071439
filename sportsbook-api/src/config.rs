//! Server configuration

use std::env;
use std::path::PathBuf;
use thiserror::Error;

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_FIXTURE_DIR: &str = "data";

/// Settings read from the environment at startup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Port to bind on all interfaces
    pub port: u16,
    /// Directory holding `{sport}_prematch.json` and `{sport}_result.json`
    pub fixture_dir: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            fixture_dir: PathBuf::from(DEFAULT_FIXTURE_DIR),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// Reads:
    /// - INTERNAL_PORT: port to listen on (default 8080)
    /// - FIXTURE_DIR: fixture directory (default `data`)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(env::var("INTERNAL_PORT").ok(), env::var("FIXTURE_DIR").ok())
    }

    fn from_vars(port: Option<String>, fixture_dir: Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(port) = port.filter(|p| !p.trim().is_empty()) {
            config.port = port
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(port.clone()))?;
        }

        if let Some(dir) = fixture_dir.filter(|d| !d.is_empty()) {
            config.fixture_dir = PathBuf::from(dir);
        }

        Ok(config)
    }
}

/// Errors that can occur when loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("INTERNAL_PORT must be a port number, got {0:?}")]
    InvalidPort(String),
}
