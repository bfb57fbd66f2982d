//! Typed configuration loaded from the environment.
//!
//! Variables are read with the `CLUB_SPHERE` prefix and `__` between
//! nesting levels, so `CLUB_SPHERE__DATABASE__URL` lands in
//! `database.url`. A `.env` file is honored in development. Every
//! section validates itself before the server starts.

mod auth;
mod database;
mod error;
mod payment;
mod server;

pub use auth::AuthConfig;
pub use database::DatabaseConfig;
pub use error::{ConfigError, ValidationError};
pub use payment::PaymentConfig;
pub use server::{Environment, ServerConfig};

use serde::Deserialize;

/// All configuration sections. `server` falls back to defaults when
/// absent; the other sections carry required settings.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub auth: AuthConfig,
    pub payment: PaymentConfig,
}

impl AppConfig {
    /// Reads the environment (and `.env`, when present) into the typed
    /// config tree.
    ///
    /// # Errors
    ///
    /// Fails when a required variable is absent or a value does not
    /// parse into its field type. Semantic checks live in
    /// [`AppConfig::validate`].
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("CLUB_SPHERE")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Runs every section's semantic checks. Startup aborts on the
    /// first failure.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.server.validate()?;
        self.database.validate()?;
        self.auth.validate()?;
        self.payment.validate()?;
        Ok(())
    }

    pub fn is_production(&self) -> bool {
        self.server.is_production()
    }
}
