//! Service configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `DIXM_HOST` - Bind address (default: 0.0.0.0)
//! - `DIXM_PORT` - Listen port (default: 8080)
//! - `DIXM_SEED_ON_STARTUP` - Seed every collection at start (default: true)
//! - `DIXM_STRICT_COLLECTIONS` - Reject products with unknown collection tags (default: false)
//! - `DIXM_LOG_FORMAT` - `json` or `pretty` (default: json)
//! - `RUST_LOG` - Tracing filter (default: info)

use std::net::{IpAddr, SocketAddr};

use thiserror::Error;

use dixm_infra::CatalogPolicy;
use dixm_observability::LogFormat;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub host: IpAddr,
    pub port: u16,
    pub seed_on_startup: bool,
    pub strict_collections: bool,
    pub log_format: LogFormat,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 8080,
            seed_on_startup: true,
            strict_collections: false,
            log_format: LogFormat::Json,
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Missing .env is fine.
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup (unset keys use defaults).
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let host = match lookup("DIXM_HOST") {
            Some(v) => v
                .parse::<IpAddr>()
                .map_err(|e| invalid("DIXM_HOST", e.to_string()))?,
            None => defaults.host,
        };
        let port = match lookup("DIXM_PORT") {
            Some(v) => v
                .parse::<u16>()
                .map_err(|e| invalid("DIXM_PORT", e.to_string()))?,
            None => defaults.port,
        };
        let seed_on_startup = match lookup("DIXM_SEED_ON_STARTUP") {
            Some(v) => parse_bool("DIXM_SEED_ON_STARTUP", &v)?,
            None => defaults.seed_on_startup,
        };
        let strict_collections = match lookup("DIXM_STRICT_COLLECTIONS") {
            Some(v) => parse_bool("DIXM_STRICT_COLLECTIONS", &v)?,
            None => defaults.strict_collections,
        };
        let log_format = match lookup("DIXM_LOG_FORMAT") {
            Some(v) => v
                .parse::<LogFormat>()
                .map_err(|e| invalid("DIXM_LOG_FORMAT", e))?,
            None => defaults.log_format,
        };

        Ok(Self {
            host,
            port,
            seed_on_startup,
            strict_collections,
            log_format,
        })
    }

    /// Returns the socket address for binding the server.
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    pub const fn catalog_policy(&self) -> CatalogPolicy {
        CatalogPolicy {
            strict_collections: self.strict_collections,
        }
    }
}

fn invalid(key: &str, msg: impl Into<String>) -> ConfigError {
    ConfigError::InvalidEnvVar(key.to_string(), msg.into())
}

fn parse_bool(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(invalid(key, format!("expected a boolean, got '{other}'"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let config = ApiConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ApiConfig::default());
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
        assert!(!config.catalog_policy().strict_collections);
    }

    #[test]
    fn reads_every_variable() {
        let config = ApiConfig::from_lookup(lookup_from(&[
            ("DIXM_HOST", "127.0.0.1"),
            ("DIXM_PORT", "3000"),
            ("DIXM_SEED_ON_STARTUP", "false"),
            ("DIXM_STRICT_COLLECTIONS", "YES"),
            ("DIXM_LOG_FORMAT", "pretty"),
        ]))
        .unwrap();

        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
        assert!(!config.seed_on_startup);
        assert!(config.strict_collections);
        assert_eq!(config.log_format, LogFormat::Pretty);
    }

    #[test]
    fn invalid_port_is_reported_with_its_key() {
        let err = ApiConfig::from_lookup(lookup_from(&[("DIXM_PORT", "99999")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(key, _) if key == "DIXM_PORT"));
    }

    #[test]
    fn invalid_bool_is_rejected() {
        let err = ApiConfig::from_lookup(lookup_from(&[("DIXM_SEED_ON_STARTUP", "maybe")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(key, _) if key == "DIXM_SEED_ON_STARTUP"));
    }
}
