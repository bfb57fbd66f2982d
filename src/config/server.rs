//! HTTP server settings.

use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;

use super::error::ValidationError;

/// Bind address, timeouts, and the web-client origin used for CORS and
/// checkout redirects.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,

    /// Listen port.
    pub port: u16,

    /// Deployment environment; selects log output format.
    pub environment: Environment,

    /// Fallback tracing filter when RUST_LOG is unset.
    pub log_level: String,

    /// Per-request timeout in seconds. Capped at 300.
    pub request_timeout_secs: u64,

    /// Origin of the web client.
    pub client_origin: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            environment: Environment::Development,
            log_level: "info,club_sphere=debug,sqlx=warn".to_string(),
            request_timeout_secs: 30,
            client_origin: "http://localhost:5173".to_string(),
        }
    }
}

impl ServerConfig {
    /// Address the listener binds; fails when the host does not parse.
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|_| ValidationError::InvalidPort)
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if !(1..=300).contains(&self.request_timeout_secs) {
            return Err(ValidationError::InvalidTimeout);
        }
        let origin_is_http = self.client_origin.starts_with("http://")
            || self.client_origin.starts_with("https://");
        if !origin_is_http {
            return Err(ValidationError::InvalidClientOrigin);
        }
        Ok(())
    }
}
