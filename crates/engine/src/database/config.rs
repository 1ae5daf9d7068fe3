//! Service configuration via `geoaddr.toml`
//!
//! On first start a commented default `geoaddr.toml` is written into the data
//! directory. To change settings, edit the file and restart.

use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use geoaddr_core::{Error, LongitudePolicy, Result};

/// Config file name placed in the data directory.
pub const CONFIG_FILE_NAME: &str = "geoaddr.toml";

/// HTTP listener settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ServerConfig {
    /// Socket address to listen on (default: "127.0.0.1:8000")
    #[serde(default = "default_bind")]
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
        }
    }
}

/// Application log settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// Log file name, relative to the data directory (default: "log.txt")
    #[serde(default = "default_log_file")]
    pub file: String,
    /// Default filter when `RUST_LOG` is unset (default: "info")
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            file: default_log_file(),
            level: default_log_level(),
        }
    }
}

/// Store write policy.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StoreConfig {
    /// Report update/delete of a missing id as not-found instead of success.
    #[serde(default)]
    pub require_existing_id: bool,
}

/// Record validation policy.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ValidationConfig {
    /// Accept record longitudes in [-180, 180] instead of [-90, 90].
    #[serde(default)]
    pub geographic_longitude: bool,
}

/// Service configuration loaded from `geoaddr.toml`.
///
/// # Example
///
/// ```toml
/// database = "addresses.db"
/// busy_timeout_ms = 5000
///
/// [server]
/// bind = "127.0.0.1:8000"
///
/// [store]
/// require_existing_id = false
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeoaddrConfig {
    /// SQLite file name, relative to the data directory.
    #[serde(default = "default_database")]
    pub database: String,
    /// How long a connection waits on a locked database, in milliseconds.
    #[serde(default = "default_busy_timeout_ms")]
    pub busy_timeout_ms: u64,
    /// HTTP listener.
    #[serde(default)]
    pub server: ServerConfig,
    /// Application log.
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Store write policy.
    #[serde(default)]
    pub store: StoreConfig,
    /// Record validation policy.
    #[serde(default)]
    pub validation: ValidationConfig,
}

fn default_database() -> String {
    "addresses.db".to_string()
}

fn default_busy_timeout_ms() -> u64 {
    5000
}

fn default_bind() -> String {
    "127.0.0.1:8000".to_string()
}

fn default_log_file() -> String {
    "log.txt".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for GeoaddrConfig {
    fn default() -> Self {
        Self {
            database: default_database(),
            busy_timeout_ms: default_busy_timeout_ms(),
            server: ServerConfig::default(),
            logging: LoggingConfig::default(),
            store: StoreConfig::default(),
            validation: ValidationConfig::default(),
        }
    }
}

impl GeoaddrConfig {
    /// Parse the bind string into a socket address.
    ///
    /// # Errors
    ///
    /// Returns an error if `server.bind` is not a valid `host:port`.
    pub fn bind_addr(&self) -> Result<SocketAddr> {
        self.server.bind.parse().map_err(|e| {
            Error::Config(format!(
                "Invalid server.bind '{}' in {}: {}",
                self.server.bind, CONFIG_FILE_NAME, e
            ))
        })
    }

    /// Busy timeout as a `Duration`.
    pub fn busy_timeout(&self) -> Duration {
        Duration::from_millis(self.busy_timeout_ms)
    }

    /// Longitude policy selected by `validation.geographic_longitude`.
    pub fn longitude_policy(&self) -> LongitudePolicy {
        if self.validation.geographic_longitude {
            LongitudePolicy::Geographic
        } else {
            LongitudePolicy::Legacy
        }
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# geoaddr configuration

# SQLite database file, relative to the data directory.
database = "addresses.db"

# Milliseconds a request waits on a locked database before failing.
busy_timeout_ms = 5000

[server]
bind = "127.0.0.1:8000"

[logging]
# Append-only application log, relative to the data directory.
file = "log.txt"
# Used when RUST_LOG is not set.
level = "info"

[store]
# false: updating or deleting a missing id still reports success.
# true:  it is reported as 404 not found.
require_existing_id = false

[validation]
# false: record longitudes must lie in [-90, 90] (historical behavior).
# true:  record longitudes may use the full [-180, 180] range.
geographic_longitude = false
"#
    }

    /// Read and parse config from a file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        let config: GeoaddrConfig = toml::from_str(&content).map_err(|e| {
            Error::Config(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        // Validate the bind address eagerly
        config.bind_addr()?;
        Ok(config)
    }

    /// Write the default config file if it does not already exist.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if !path.exists() {
            std::fs::write(path, Self::default_toml()).map_err(|e| {
                Error::Config(format!(
                    "Failed to write default config file '{}': {}",
                    path.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }
}
