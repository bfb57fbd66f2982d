//! Authentication configuration

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;

/// Authentication configuration (Firebase identity tokens)
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthConfig {
    /// Base64-encoded Firebase service account JSON. Only the
    /// `project_id` field is read; the key material stays unused.
    pub service_account_b64: String,

    /// How long to cache the JWKS key set, in seconds
    #[serde(default = "default_jwks_cache_ttl")]
    pub jwks_cache_ttl_secs: u64,
}

#[derive(Deserialize)]
struct ServiceAccount {
    project_id: Option<String>,
}

impl AuthConfig {
    /// JWKS cache TTL as a Duration
    pub fn jwks_cache_ttl(&self) -> Duration {
        Duration::from_secs(self.jwks_cache_ttl_secs)
    }

    /// Decode the service account and extract the Firebase project id.
    pub fn project_id(&self) -> Result<String, ValidationError> {
        let json = BASE64
            .decode(self.service_account_b64.trim())
            .map_err(|_| ValidationError::InvalidServiceAccount)?;
        let account: ServiceAccount =
            serde_json::from_slice(&json).map_err(|_| ValidationError::InvalidServiceAccount)?;
        account
            .project_id
            .filter(|id| !id.is_empty())
            .ok_or(ValidationError::MissingProjectId)
    }

    /// Validate authentication configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.service_account_b64.is_empty() {
            return Err(ValidationError::MissingRequired(
                "AUTH__SERVICE_ACCOUNT_B64",
            ));
        }
        self.project_id()?;
        Ok(())
    }
}

fn default_jwks_cache_ttl() -> u64 {
    3600
}
