//! Users API configuration.

use std::env;
use std::path::PathBuf;

use common::{ServiceConfig, DEFAULT_HOST, DEFAULT_LOG_FILTER, DEFAULT_PORT};

/// Service name reported in logs
pub const SERVICE_NAME: &str = "users-api";

/// Users API configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UsersApiConfig {
    /// Bind address and logging
    pub service: ServiceConfig,
    /// Optional JSON file with users loaded at startup
    pub seed_file: Option<PathBuf>,
}

impl UsersApiConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            service: ServiceConfig {
                service_name: SERVICE_NAME.to_string(),
                host: lookup("USERS_API_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
                port: lookup("USERS_API_PORT")
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(DEFAULT_PORT),
                log_level: lookup("RUST_LOG").unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string()),
            },
            seed_file: lookup("USERS_SEED_FILE")
                .filter(|path| !path.is_empty())
                .map(PathBuf::from),
        }
    }

    /// Apply command-line values on top of the environment.
    pub fn with_overrides(
        mut self,
        host: Option<String>,
        port: Option<u16>,
        seed_file: Option<PathBuf>,
    ) -> Self {
        if let Some(host) = host {
            self.service.host = host;
        }
        if let Some(port) = port {
            self.service.port = port;
        }
        if seed_file.is_some() {
            self.seed_file = seed_file;
        }
        self
    }
}

impl Default for UsersApiConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                service_name: SERVICE_NAME.to_string(),
                ..ServiceConfig::default()
            },
            seed_file: None,
        }
    }
}
