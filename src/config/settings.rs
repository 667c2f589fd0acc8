//! Configuration settings structure
//!
//! Defines the main settings structure and loading logic for the gateway.

use crate::{Error, Result, types::StreamingServer};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Main configuration settings for the gateway
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Server configuration
    pub server: ServerSettings,
    /// Upstream provider configuration
    pub provider: ProviderSettings,
    /// Logging configuration
    pub logging: LoggingSettings,
}

/// HTTP server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Prefix the provider routes are mounted under
    pub mount_path: String,
}

/// Upstream provider client configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ProviderSettings {
    /// Base URL of the upstream FlixHQ extension service
    pub base_url: String,
    /// Timeout for a single upstream call, in seconds
    pub timeout_secs: u64,
    /// User agent sent upstream
    pub user_agent: String,
    /// Server used when a watch request names none
    pub default_server: StreamingServer,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Log level
    pub level: String,
    /// Enable verbose logging
    pub verbose: bool,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            host: "::".to_string(),
            port: 3000,
            mount_path: "/movies".to_string(),
        }
    }
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8080/flixhq".to_string(),
            timeout_secs: 30,
            user_agent: concat!("flixhq-gateway/", env!("CARGO_PKG_VERSION")).to_string(),
            default_server: StreamingServer::UpCloud,
        }
    }
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            verbose: false,
        }
    }
}

impl ProviderSettings {
    /// Upstream call timeout
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Settings {
    /// Create new settings with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load settings from a TOML file; missing keys keep their defaults
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load settings from environment variables
    pub fn from_env() -> Result<Self> {
        Self::default().merge_with_env()
    }

    /// Override values with process environment variables
    pub fn merge_with_env(self) -> Result<Self> {
        self.merge_with(|key| std::env::var(key).ok())
    }

    /// Override values using the given variable lookup
    pub fn merge_with<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(host) = lookup("FLIXHQ_SERVER_HOST") {
            self.server.host = host;
        }

        if let Some(port) = lookup("FLIXHQ_SERVER_PORT") {
            self.server.port = port
                .parse()
                .map_err(|e| Error::config(format!("Invalid port: {}", e)))?;
        }

        if let Some(mount_path) = lookup("FLIXHQ_MOUNT_PATH") {
            self.server.mount_path = mount_path;
        }

        if let Some(base_url) = lookup("FLIXHQ_PROVIDER_URL") {
            self.provider.base_url = base_url;
        }

        if let Some(timeout) = lookup("FLIXHQ_PROVIDER_TIMEOUT") {
            self.provider.timeout_secs = timeout
                .parse()
                .map_err(|e| Error::config(format!("Invalid provider timeout: {}", e)))?;
        }

        if let Some(server) = lookup("FLIXHQ_DEFAULT_SERVER") {
            self.provider.default_server = server
                .parse()
                .map_err(|e| Error::config(format!("Invalid default server: {}", e)))?;
        }

        if let Some(level) = lookup("FLIXHQ_LOG_LEVEL") {
            self.logging.level = level;
        }

        Ok(self)
    }

    /// Check the settings are usable
    pub fn validate(&self) -> Result<()> {
        if self.server.host.trim().is_empty() {
            return Err(Error::config("Server host must not be empty"));
        }

        let mount = &self.server.mount_path;
        if !mount.is_empty() && !mount.starts_with('/') {
            return Err(Error::config(format!(
                "Mount path must start with '/': {}",
                mount
            )));
        }

        let base_url = url::Url::parse(&self.provider.base_url)
            .map_err(|e| Error::config(format!("Invalid provider URL: {}", e)))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(Error::config(format!(
                "Provider URL must use http or https: {}",
                self.provider.base_url
            )));
        }

        if self.provider.timeout_secs == 0 {
            return Err(Error::config("Provider timeout must be positive"));
        }

        Ok(())
    }

    /// Effective tracing filter directive
    pub fn log_filter(&self) -> &str {
        if self.logging.verbose {
            "debug"
        } else {
            &self.logging.level
        }
    }
}
