//! Service Configuration Settings
//!
//! Configuration for the orders service, loaded from environment variables.
//! Every variable is optional; defaults suit local development.
//!
//! | Variable                  | Default       |
//! |---------------------------|---------------|
//! | `ORDERS_APP_NAME`         | `Orders API`  |
//! | `ORDERS_BIND_ADDRESS`     | `0.0.0.0`     |
//! | `ORDERS_HTTP_PORT`        | `8000`        |
//! | `ORDERS_API_PREFIX`       | `/api/v1`     |
//! | `ORDERS_SEED_SAMPLE_DATA` | `true`        |

use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// API prefix did not start with `/` or ended with `/`.
    #[error("Invalid API prefix '{0}': must start with '/' and not end with '/'")]
    InvalidApiPrefix(String),
}

/// Complete service configuration.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Application name reported by the health endpoint.
    pub app_name: String,
    /// Bind address for the HTTP server.
    pub bind_address: String,
    /// HTTP server port.
    pub http_port: u16,
    /// URL prefix for order routes, e.g. `/api/v1`.
    pub api_prefix: String,
    /// Whether to seed sample orders at startup.
    pub seed_sample_data: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: "Orders API".to_string(),
            bind_address: "0.0.0.0".to_string(),
            http_port: 8000,
            api_prefix: "/api/v1".to_string(),
            seed_sample_data: true,
        }
    }
}

impl Settings {
    /// Create configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `ORDERS_API_PREFIX` is malformed.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let api_prefix =
            std::env::var("ORDERS_API_PREFIX").unwrap_or_else(|_| defaults.api_prefix.clone());
        validate_api_prefix(&api_prefix)?;

        Ok(Self {
            app_name: std::env::var("ORDERS_APP_NAME").unwrap_or(defaults.app_name),
            bind_address: std::env::var("ORDERS_BIND_ADDRESS").unwrap_or(defaults.bind_address),
            http_port: parse_env_u16("ORDERS_HTTP_PORT", defaults.http_port),
            api_prefix,
            seed_sample_data: parse_env_bool("ORDERS_SEED_SAMPLE_DATA", defaults.seed_sample_data),
        })
    }
}

fn validate_api_prefix(prefix: &str) -> Result<(), ConfigError> {
    if prefix.starts_with('/') && !prefix.ends_with('/') {
        Ok(())
    } else {
        Err(ConfigError::InvalidApiPrefix(prefix.to_string()))
    }
}

fn parse_env_u16(key: &str, default: u16) -> u16 {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

fn parse_env_bool(key: &str, default: bool) -> bool {
    std::env::var(key).map_or(default, |v| v.to_lowercase() != "false" && v != "0")
}
