//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables or defaults. With no environment set,
//! the defaults talk to the public Steingass API.

use super::error::{Error, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Public entries endpoint of the Steingass dictionary.
pub const DEFAULT_DICTIONARY_API_URL: &str = "https://steingass.theobeers.com/api/entries";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Remote dictionary API configuration.
    pub dictionary: DictionaryConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the remote dictionary API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DictionaryConfig {
    /// Entries endpoint; query parameters are appended to it.
    pub api_url: String,

    /// Request timeout in seconds. `None` leaves the HTTP client default
    /// (no timeout) in place.
    pub timeout_secs: Option<u64>,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_DICTIONARY_API_URL.to_string(),
            timeout_secs: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "steingass-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            dictionary: DictionaryConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables are expected to be prefixed with `MCP_`.
    /// For example: `MCP_SERVER_NAME`, `MCP_LOG_LEVEL`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(url) = std::env::var("MCP_DICTIONARY_API_URL") {
            info!("Dictionary API endpoint overridden: {}", url);
            config.dictionary.api_url = url;
        }

        if let Ok(timeout) = std::env::var("MCP_DICTIONARY_TIMEOUT_SECS") {
            match timeout.parse::<u64>() {
                Ok(secs) => config.dictionary.timeout_secs = Some(secs),
                Err(_) => warn!(
                    "Ignoring invalid MCP_DICTIONARY_TIMEOUT_SECS value '{}'",
                    timeout
                ),
            }
        }

        config
    }

    /// Check values that cannot be validated at parse time.
    pub fn validate(&self) -> Result<()> {
        let url = &self.dictionary.api_url;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(Error::config(format!(
                "dictionary API URL must be http(s), got '{}'",
                url
            )));
        }
        if url.contains('?') {
            return Err(Error::config(format!(
                "dictionary API URL must not carry a query string, got '{}'",
                url
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_default_points_at_public_api() {
        let config = Config::default();
        assert_eq!(config.server.name, "steingass-mcp");
        assert_eq!(
            config.dictionary.api_url,
            "https://steingass.theobeers.com/api/entries"
        );
        assert!(config.dictionary.timeout_secs.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_dictionary_settings_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_DICTIONARY_API_URL", "http://localhost:9000/api/entries");
            std::env::set_var("MCP_DICTIONARY_TIMEOUT_SECS", "15");
        }
        let config = Config::from_env();
        assert_eq!(
            config.dictionary.api_url,
            "http://localhost:9000/api/entries"
        );
        assert_eq!(config.dictionary.timeout_secs, Some(15));
        unsafe {
            std::env::remove_var("MCP_DICTIONARY_API_URL");
            std::env::remove_var("MCP_DICTIONARY_TIMEOUT_SECS");
        }
    }

    #[test]
    fn test_invalid_timeout_is_ignored() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("MCP_DICTIONARY_TIMEOUT_SECS", "soon");
        }
        let config = Config::from_env();
        assert!(config.dictionary.timeout_secs.is_none());
        unsafe {
            std::env::remove_var("MCP_DICTIONARY_TIMEOUT_SECS");
        }
    }

    #[test]
    fn test_validate_rejects_bad_urls() {
        let mut config = Config::default();
        config.dictionary.api_url = "ftp://example.com/entries".to_string();
        assert!(config.validate().is_err());

        config.dictionary.api_url = "https://example.com/entries?x=1".to_string();
        assert!(config.validate().is_err());
    }
}
