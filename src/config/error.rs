//! Configuration failure types.

use thiserror::Error;

/// Startup configuration failures. Either the environment could not be
/// read into the config shape, or a section failed validation.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read configuration: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("configuration invalid: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Per-section validation failures. The payload names the offending
/// setting without echoing its value.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("missing required setting {0}")]
    MissingRequired(&'static str),

    #[error("server port must be non-zero")]
    InvalidPort,

    #[error("request timeout outside the allowed range")]
    InvalidTimeout,

    #[error("database URL must use a postgres scheme")]
    InvalidDatabaseUrl,

    #[error("pool min_connections exceeds max_connections")]
    InvalidPoolSize,

    #[error("pool size above the allowed maximum of 100")]
    PoolSizeTooLarge,

    #[error("client origin must be an http(s) URL")]
    InvalidClientOrigin,

    #[error("service account is not base64-encoded JSON")]
    InvalidServiceAccount,

    #[error("service account JSON carries no project_id")]
    MissingProjectId,

    #[error("payment secret key has the wrong prefix")]
    InvalidPaymentKey,

    #[error("webhook secret has the wrong prefix")]
    InvalidWebhookSecret,
}
