//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure populated from
//! environment variables (and a `.env` file when present), falling back to
//! defaults for everything except the Cloudflare API token.

use super::error::{Error, Result};
use super::transport::TransportConfig;
use crate::domains::cloudflare::CF_API_BASE;
use serde::{Deserialize, Serialize};

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Cloudflare API credentials.
    pub credentials: CredentialsConfig,

    /// Cloudflare API endpoint settings.
    pub api: ApiConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Cloudflare API credentials.
#[derive(Clone, Default, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Bearer token used for every API call. Required.
    pub api_token: String,

    /// Zone used by record tools when the caller does not pass one.
    pub zone_id: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field("api_token", &"[REDACTED]")
            .field("zone_id", &self.zone_id)
            .finish()
    }
}

/// Cloudflare API endpoint settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the v4 API, without trailing slash.
    pub base_url: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: CF_API_BASE.to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "cloudflare-mcp".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            credentials: CredentialsConfig::default(),
            api: ApiConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Reads `CLOUDFLARE_API_TOKEN` (required), `CLOUDFLARE_ZONE_ID`,
    /// `CLOUDFLARE_API_BASE_URL` and the `MCP_`-prefixed server settings.
    /// Fails when no API token is available.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(timestamps) = std::env::var("MCP_LOG_TIMESTAMPS") {
            config.logging.with_timestamps = timestamps.parse().unwrap_or(true);
        }

        // Load transport configuration from environment
        config.transport = TransportConfig::from_env();

        config.credentials.api_token = std::env::var("CLOUDFLARE_API_TOKEN")
            .ok()
            .filter(|t| !t.trim().is_empty())
            .ok_or_else(|| {
                Error::config(
                    "Cloudflare API token is required. Set the CLOUDFLARE_API_TOKEN environment variable.",
                )
            })?;

        config.credentials.zone_id = std::env::var("CLOUDFLARE_ZONE_ID")
            .ok()
            .filter(|z| !z.is_empty());

        if let Ok(base_url) = std::env::var("CLOUDFLARE_API_BASE_URL") {
            config.api.base_url = base_url;
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    fn clear_cloudflare_env() {
        unsafe {
            std::env::remove_var("CLOUDFLARE_API_TOKEN");
            std::env::remove_var("CLOUDFLARE_ZONE_ID");
            std::env::remove_var("CLOUDFLARE_API_BASE_URL");
        }
    }

    #[test]
    fn test_credentials_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_cloudflare_env();
        unsafe {
            std::env::set_var("CLOUDFLARE_API_TOKEN", "test_token_12345");
            std::env::set_var("CLOUDFLARE_ZONE_ID", "zone_abc");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.credentials.api_token, "test_token_12345");
        assert_eq!(config.credentials.zone_id.as_deref(), Some("zone_abc"));
        assert_eq!(config.api.base_url, CF_API_BASE);

        clear_cloudflare_env();
    }

    #[test]
    fn test_zone_id_is_optional() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_cloudflare_env();
        unsafe {
            std::env::set_var("CLOUDFLARE_API_TOKEN", "test_token");
        }

        let config = Config::from_env().unwrap();
        assert!(config.credentials.zone_id.is_none());

        clear_cloudflare_env();
    }

    #[test]
    fn test_missing_token_is_config_error() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_cloudflare_env();

        let result = Config::from_env();
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn test_blank_token_is_config_error() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_cloudflare_env();
        unsafe {
            std::env::set_var("CLOUDFLARE_API_TOKEN", "   ");
        }

        assert!(Config::from_env().is_err());

        clear_cloudflare_env();
    }

    #[test]
    fn test_base_url_override() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        clear_cloudflare_env();
        unsafe {
            std::env::set_var("CLOUDFLARE_API_TOKEN", "test_token");
            std::env::set_var("CLOUDFLARE_API_BASE_URL", "http://localhost:9999/client/v4");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.api.base_url, "http://localhost:9999/client/v4");

        clear_cloudflare_env();
    }

    #[test]
    fn test_credentials_redacted_in_debug() {
        let creds = CredentialsConfig {
            api_token: "super_secret_token".to_string(),
            zone_id: Some("zone1".to_string()),
        };
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_token"));
        assert!(debug_str.contains("zone1"));
    }
}
