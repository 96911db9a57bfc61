//! # Configuration Utilities
//!
//! TOML configuration for the web server. Every field has a default, so an
//! empty file (or no file at all) gives a working setup.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Load a TOML configuration file and deserialize it into the specified type.
///
/// # Arguments
/// - `path`: Path to the TOML configuration file
///
/// # Returns
/// - `Ok(T)`: Successfully loaded and parsed configuration
/// - `Err`: File I/O or parsing error
///
/// # Example
/// ```ignore
/// let config: WebConfig = load_config("config/server.toml")?;
/// ```
pub fn load_config<T>(path: &str) -> Result<T>
where
    T: for<'de> Deserialize<'de>,
{
    let content =
        fs::read_to_string(path).with_context(|| format!("Failed to read config {}", path))?;
    let config: T =
        toml::from_str(&content).with_context(|| format!("Failed to parse config {}", path))?;
    Ok(config)
}

/// Top-level web server configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct WebConfig {
    pub server: ServerInfo,
    pub storage: StorageConfig,
}

/// Where the HTTP listener binds.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerInfo {
    /// Listen address (e.g., "0.0.0.0:5000")
    pub address: SocketAddr,
}

impl Default for ServerInfo {
    fn default() -> Self {
        Self {
            address: SocketAddr::from(([0, 0, 0, 0], 5000)),
        }
    }
}

/// Output directory and upload limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory carrier images are written to and served from
    pub display_dir: PathBuf,
    /// Largest accepted request body, in bytes
    pub max_upload_bytes: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            display_dir: PathBuf::from("display"),
            max_upload_bytes: 10 * 1024 * 1024,
        }
    }
}

impl WebConfig {
    /// Replace the listen port with the value of `port`, when one is given.
    ///
    /// Used for the `PORT` environment variable.
    pub fn with_port_override(mut self, port: Option<&str>) -> Result<Self> {
        if let Some(port) = port {
            let port: u16 = port
                .trim()
                .parse()
                .with_context(|| format!("Invalid PORT value '{}'", port))?;
            self.server.address.set_port(port);
        }
        Ok(self)
    }
}
