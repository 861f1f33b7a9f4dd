//! Service configuration.
//!
//! Configuration is loaded from environment variables with fallback to defaults.

use std::{
    env,
    net::{IpAddr, Ipv4Addr, SocketAddr},
    path::{Path, PathBuf},
    time::Duration,
};
use thiserror::Error;

/// Default catalog seed file name inside the data directory
pub const DEFAULT_SEED_FILE: &str = "catalog.json";

/// Quote service configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Interface to bind
    pub host: IpAddr,

    /// HTTP port
    pub port: u16,

    /// Directory holding the catalog seed
    pub data_dir: PathBuf,

    /// Seed file name, relative to `data_dir`
    pub seed_file: String,

    /// Upper bound on handling a single request
    pub request_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        let current_dir = env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self {
            host: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: 8000,
            data_dir: locate_data_directory(&current_dir),
            seed_file: DEFAULT_SEED_FILE.to_string(),
            request_timeout: Duration::from_secs(10),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = match lookup("QUOTE_HOST") {
            Some(v) => v
                .parse()
                .map_err(|_| ConfigError::InvalidValue("QUOTE_HOST".to_string()))?,
            None => defaults.host,
        };

        let port = match lookup("QUOTE_PORT") {
            Some(v) => v
                .parse()
                .map_err(|_| ConfigError::InvalidValue("QUOTE_PORT".to_string()))?,
            None => defaults.port,
        };

        let request_timeout = match lookup("QUOTE_REQUEST_TIMEOUT_SECS") {
            Some(v) => {
                let secs: u64 = v.parse().map_err(|_| {
                    ConfigError::InvalidValue("QUOTE_REQUEST_TIMEOUT_SECS".to_string())
                })?;
                if secs == 0 {
                    return Err(ConfigError::InvalidValue(
                        "QUOTE_REQUEST_TIMEOUT_SECS".to_string(),
                    ));
                }
                Duration::from_secs(secs)
            }
            None => defaults.request_timeout,
        };

        let seed_file = lookup("QUOTE_SEED_FILE")
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.seed_file);

        Ok(Self {
            host,
            port,
            data_dir: lookup("QUOTE_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            seed_file,
            request_timeout,
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub fn seed_path(&self) -> PathBuf {
        self.data_dir.join(&self.seed_file)
    }
}

/// Locates the data directory: `./data`, then `../data` (when running from a
/// subdirectory), then the relative path `data`.
fn locate_data_directory(current_dir: &Path) -> PathBuf {
    if current_dir.join("data").exists() {
        return current_dir.join("data");
    }

    if let Some(parent) = current_dir.parent() {
        if parent.join("data").exists() {
            return parent.join("data");
        }
    }

    PathBuf::from("data")
}

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}")]
    InvalidValue(String),
}
