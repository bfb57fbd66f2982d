//! Firebase implementation of the `TokenVerifier` port.
//!
//! ID tokens are RS256 JWTs signed by Google's securetoken service.
//! Verification decodes the header for the key id, resolves the signing
//! key from a cached JWKS fetch, validates signature plus issuer,
//! audience, and expiry, then maps the claims onto `AuthenticatedUser`.

use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use jsonwebtoken::{
    decode, decode_header, jwk::JwkSet, Algorithm, DecodingKey, TokenData, Validation,
};
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::domain::foundation::{AuthError, AuthenticatedUser, EmailAddress, UserId};
use crate::ports::TokenVerifier;

const SECURETOKEN_JWKS_URL: &str =
    "https://www.googleapis.com/service_accounts/v1/jwk/securetoken@system.gserviceaccount.com";

const DEFAULT_KEY_TTL: Duration = Duration::from_secs(3600);

/// Settings for the Firebase verifier.
#[derive(Debug, Clone)]
pub struct FirebaseConfig {
    /// Firebase project id. Fixes both the expected issuer
    /// (`https://securetoken.google.com/<project-id>`) and the audience.
    pub project_id: String,

    /// Key-set endpoint. Tests point this at a local server.
    pub jwks_url: String,

    /// How long fetched keys stay valid. `None` means one hour.
    pub jwks_cache_duration: Option<Duration>,
}

impl FirebaseConfig {
    pub fn new(project_id: impl Into<String>) -> Self {
        Self {
            project_id: project_id.into(),
            jwks_url: SECURETOKEN_JWKS_URL.to_string(),
            jwks_cache_duration: None,
        }
    }

    pub fn with_cache_duration(mut self, duration: Duration) -> Self {
        self.jwks_cache_duration = Some(duration);
        self
    }

    fn issuer(&self) -> String {
        format!("https://securetoken.google.com/{}", self.project_id)
    }

    fn key_ttl(&self) -> Duration {
        self.jwks_cache_duration.unwrap_or(DEFAULT_KEY_TTL)
    }
}

/// Claims carried by a Firebase ID token. Only the fields the domain
/// needs are deserialized.
#[derive(Debug, Serialize, Deserialize)]
struct IdTokenClaims {
    /// Firebase UID.
    sub: String,

    iss: String,

    #[serde(default)]
    aud: Audience,

    /// Expiry, Unix epoch seconds.
    exp: i64,

    #[serde(default)]
    email: Option<String>,

    #[serde(default)]
    email_verified: Option<bool>,

    #[serde(default)]
    name: Option<String>,
}

/// The `aud` claim may be a string or an array of strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(untagged)]
enum Audience {
    #[default]
    None,
    One(String),
    Many(Vec<String>),
}

impl Audience {
    fn names(&self, project_id: &str) -> bool {
        match self {
            Audience::None => false,
            Audience::One(aud) => aud == project_id,
            Audience::Many(auds) => auds.iter().any(|aud| aud == project_id),
        }
    }
}

/// One JWKS fetch plus the instant it goes stale.
struct CachedKeys {
    keys: JwkSet,
    stale_at: Instant,
}

impl CachedKeys {
    fn fresh(keys: JwkSet, ttl: Duration) -> Self {
        Self {
            keys,
            stale_at: Instant::now() + ttl,
        }
    }

    fn is_stale(&self) -> bool {
        Instant::now() >= self.stale_at
    }
}

/// Production `TokenVerifier`. Keys are fetched lazily on the first
/// verification, never at startup.
pub struct FirebaseTokenVerifier {
    config: FirebaseConfig,
    http_client: reqwest::Client,
    keys: Arc<RwLock<Option<CachedKeys>>>,
}

impl FirebaseTokenVerifier {
    pub fn new(config: FirebaseConfig) -> Result<Self, AuthError> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| AuthError::service_unavailable(format!("http client: {}", e)))?;

        Ok(Self {
            config,
            http_client,
            keys: Arc::new(RwLock::new(None)),
        })
    }

    /// Current key set, refetched once the cached copy goes stale.
    async fn signing_keys(&self) -> Result<JwkSet, AuthError> {
        if let Some(cached) = self.keys.read().await.as_ref() {
            if !cached.is_stale() {
                return Ok(cached.keys.clone());
            }
        }

        let fetched = self.fetch_keys().await?;
        let mut slot = self.keys.write().await;
        *slot = Some(CachedKeys::fresh(fetched.clone(), self.config.key_ttl()));
        Ok(fetched)
    }

    async fn fetch_keys(&self) -> Result<JwkSet, AuthError> {
        tracing::debug!(url = %self.config.jwks_url, "Refreshing signing keys");

        let response = self
            .http_client
            .get(&self.config.jwks_url)
            .send()
            .await
            .map_err(|e| AuthError::service_unavailable(format!("key fetch: {}", e)))?;

        if !response.status().is_success() {
            return Err(AuthError::service_unavailable(format!(
                "key endpoint answered {}",
                response.status()
            )));
        }

        let keys: JwkSet = response
            .json()
            .await
            .map_err(|e| AuthError::service_unavailable(format!("key parse: {}", e)))?;

        tracing::debug!(count = keys.keys.len(), "Signing keys refreshed");
        Ok(keys)
    }

    fn key_for(&self, token: &str, keys: &JwkSet) -> Result<DecodingKey, AuthError> {
        let header = decode_header(token).map_err(|e| {
            tracing::debug!("Undecodable token header: {}", e);
            AuthError::InvalidToken
        })?;

        let kid = header.kid.as_ref().ok_or_else(|| {
            tracing::warn!("ID token carries no key id");
            AuthError::InvalidToken
        })?;

        let jwk = keys.find(kid).ok_or_else(|| {
            tracing::warn!(%kid, "Key id not present in the key set");
            AuthError::InvalidToken
        })?;

        DecodingKey::from_jwk(jwk).map_err(|e| {
            tracing::warn!("Unusable signing key: {}", e);
            AuthError::InvalidToken
        })
    }

    /// Signature, issuer, audience, and expiry checks. Firebase signs
    /// with RS256 only.
    fn decode_claims(
        &self,
        token: &str,
        key: &DecodingKey,
    ) -> Result<TokenData<IdTokenClaims>, AuthError> {
        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_issuer(&[self.config.issuer()]);
        validation.set_audience(&[&self.config.project_id]);
        validation.validate_exp = true;
        validation.set_required_spec_claims(&["exp", "iss", "sub"]);

        decode::<IdTokenClaims>(token, key, &validation).map_err(|e| {
            use jsonwebtoken::errors::ErrorKind;
            match e.kind() {
                ErrorKind::ExpiredSignature => AuthError::TokenExpired,
                _ => {
                    tracing::warn!("Token rejected: {}", e);
                    AuthError::InvalidToken
                }
            }
        })
    }
}

#[async_trait]
impl TokenVerifier for FirebaseTokenVerifier {
    async fn verify(&self, token: &str) -> Result<AuthenticatedUser, AuthError> {
        let keys = self.signing_keys().await?;
        let key = self.key_for(token, &keys)?;
        let claims = self.decode_claims(token, &key)?.claims;

        // Issuer and audience re-checked against the raw claims.
        if claims.iss != self.config.issuer() || !claims.aud.names(&self.config.project_id) {
            tracing::warn!(iss = %claims.iss, "Claims disagree with the validated token");
            return Err(AuthError::InvalidToken);
        }

        // Memberships and payments are keyed by email, so the claim is
        // required and must parse.
        let email = claims
            .email
            .ok_or(AuthError::InvalidToken)
            .and_then(|raw| EmailAddress::new(raw).map_err(|_| AuthError::InvalidToken))
            .map_err(|e| {
                tracing::warn!("Token carries no usable email claim");
                e
            })?;

        let user_id = UserId::new(&claims.sub).map_err(|_| {
            tracing::warn!(sub = %claims.sub, "Unusable subject claim");
            AuthError::InvalidToken
        })?;

        Ok(AuthenticatedUser::new(
            user_id,
            email,
            claims.name,
            claims.email_verified.unwrap_or(false),
        ))
    }
}

impl std::fmt::Debug for FirebaseTokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FirebaseTokenVerifier")
            .field("project_id", &self.config.project_id)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ════════════════════════════════════════════════════════════════════════════
    // Configuration
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn issuer_and_key_endpoint_derive_from_the_project() {
        let config = FirebaseConfig::new("club-sphere-prod");
        assert_eq!(
            config.issuer(),
            "https://securetoken.google.com/club-sphere-prod"
        );
        assert!(config.jwks_url.contains("googleapis.com"));
        assert_eq!(config.key_ttl(), Duration::from_secs(3600));
    }

    #[test]
    fn cache_duration_override_wins() {
        let config =
            FirebaseConfig::new("club-sphere-prod").with_cache_duration(Duration::from_secs(300));
        assert_eq!(config.key_ttl(), Duration::from_secs(300));
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Audience Claim
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn string_audience_must_equal_the_project() {
        let aud = Audience::One("club-sphere-prod".to_string());
        assert!(aud.names("club-sphere-prod"));
        assert!(!aud.names("other-project"));
    }

    #[test]
    fn array_audience_needs_one_matching_entry() {
        let aud = Audience::Many(vec!["proj-1".to_string(), "proj-2".to_string()]);
        assert!(aud.names("proj-2"));
        assert!(!aud.names("proj-3"));
    }

    #[test]
    fn absent_audience_never_matches() {
        assert!(!Audience::None.names("club-sphere-prod"));
    }

    // ════════════════════════════════════════════════════════════════════════════
    // Key Cache
    // ════════════════════════════════════════════════════════════════════════════

    #[test]
    fn fresh_keys_are_not_stale() {
        let cached = CachedKeys::fresh(JwkSet { keys: vec![] }, Duration::from_secs(3600));
        assert!(!cached.is_stale());
    }

    #[test]
    fn keys_go_stale_after_their_ttl() {
        let cached = CachedKeys::fresh(JwkSet { keys: vec![] }, Duration::from_millis(1));
        std::thread::sleep(Duration::from_millis(10));
        assert!(cached.is_stale());
    }

    #[test]
    fn verifier_is_shareable_across_tasks() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<FirebaseTokenVerifier>();
    }
}
