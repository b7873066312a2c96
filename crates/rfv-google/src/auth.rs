//! Service-account OAuth for the Docs and Drive APIs.
//!
//! Flow: sign an RS256 JWT assertion with the service account's private key,
//! exchange it at the token endpoint
//! (`grant_type=urn:ietf:params:oauth:grant-type:jwt-bearer`) and cache the
//! returned access token until shortly before it expires.
//!
//! Credentials are resolved lazily, on the first request that needs a token:
//! inline JSON (`GOOGLE_SERVICE_ACCOUNT_INFO`) wins over a key file path
//! (`GOOGLE_SERVICE_ACCOUNT_FILE`).

use std::fmt;
use std::path::Path;
use std::time::{Duration, Instant};

use jsonwebtoken::{Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

use crate::errors::{GoogleError, Result};

/// OAuth scopes requested for document publishing.
pub const SCOPES: &[&str] = &[
    "https://www.googleapis.com/auth/documents",
    "https://www.googleapis.com/auth/drive.file",
    "https://www.googleapis.com/auth/drive",
];

/// Default Google OAuth token URL.
pub const DEFAULT_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";

const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Assertion lifetime in seconds.
const ASSERTION_TTL_SECS: i64 = 3600;

/// Refresh cached tokens this long before they expire.
const TOKEN_REFRESH_BUFFER: Duration = Duration::from_secs(5 * 60);

fn default_token_uri() -> String {
    DEFAULT_TOKEN_URL.to_string()
}

/// The fields of a service-account key file this crate uses.
#[derive(Clone, Deserialize)]
pub struct ServiceAccountKey {
    /// Service account email (`iss` of the assertion).
    pub client_email: String,
    /// PEM-encoded RSA private key.
    pub private_key: String,
    /// Key id, sent as the JWT `kid` header.
    #[serde(default)]
    pub private_key_id: Option<String>,
    /// Token endpoint.
    #[serde(default = "default_token_uri")]
    pub token_uri: String,
}

impl fmt::Debug for ServiceAccountKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceAccountKey")
            .field("client_email", &self.client_email)
            .field("private_key_id", &self.private_key_id)
            .field("token_uri", &self.token_uri)
            .finish_non_exhaustive()
    }
}

impl ServiceAccountKey {
    /// Parse key JSON.
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).map_err(|e| GoogleError::Credentials(e.to_string()))
    }

    /// Read and parse a key file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            GoogleError::Credentials(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_json(&raw)
    }

    /// Resolve credentials: inline JSON first, then a key file that exists.
    pub fn resolve(info: Option<&str>, file: Option<&str>) -> Result<Self> {
        if let Some(raw) = info.filter(|s| !s.trim().is_empty()) {
            return Self::from_json(raw);
        }
        if let Some(path) = file.map(Path::new).filter(|p| p.exists()) {
            return Self::from_file(path);
        }
        Err(GoogleError::MissingConfig(
            "Google service account credentials are not configured".into(),
        ))
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct AssertionClaims {
    iss: String,
    scope: String,
    aud: String,
    iat: i64,
    exp: i64,
}

/// Sign the JWT assertion for a token request issued at `now` (Unix seconds).
pub fn build_assertion(key: &ServiceAccountKey, audience: &str, now: i64) -> Result<String> {
    let mut header = Header::new(Algorithm::RS256);
    header.kid.clone_from(&key.private_key_id);

    let claims = AssertionClaims {
        iss: key.client_email.clone(),
        scope: SCOPES.join(" "),
        aud: audience.to_string(),
        iat: now,
        exp: now + ASSERTION_TTL_SECS,
    };

    let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())
        .map_err(|e| GoogleError::Credentials(format!("private key: {e}")))?;
    Ok(jsonwebtoken::encode(&header, &claims, &encoding_key)?)
}

#[derive(Deserialize)]
struct TokenResponse {
    access_token: String,
    #[serde(default = "default_expires_in")]
    expires_in: u64,
}

fn default_expires_in() -> u64 {
    3600
}

struct CachedToken {
    token: String,
    refresh_at: Instant,
}

/// Issues and caches service-account access tokens.
pub struct ServiceAccountAuth {
    client: reqwest::Client,
    service_account_info: Option<String>,
    service_account_file: Option<String>,
    token_url: Option<String>,
    cached: Mutex<Option<CachedToken>>,
}

impl fmt::Debug for ServiceAccountAuth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ServiceAccountAuth")
            .field("inline_credentials", &self.service_account_info.is_some())
            .field("service_account_file", &self.service_account_file)
            .field("token_url", &self.token_url)
            .finish_non_exhaustive()
    }
}

impl ServiceAccountAuth {
    /// Create an authenticator. Nothing is read until a token is needed.
    pub fn new(
        client: reqwest::Client,
        service_account_info: Option<String>,
        service_account_file: Option<String>,
        token_url: Option<String>,
    ) -> Self {
        Self {
            client,
            service_account_info,
            service_account_file,
            token_url,
            cached: Mutex::new(None),
        }
    }

    /// A valid access token, from cache when possible.
    pub async fn access_token(&self) -> Result<String> {
        let mut cached = self.cached.lock().await;
        if let Some(token) = cached.as_ref() {
            if Instant::now() < token.refresh_at {
                return Ok(token.token.clone());
            }
            debug!("cached google access token is stale");
        }

        let fresh = self.fetch_token().await?;
        let token = fresh.token.clone();
        *cached = Some(fresh);
        Ok(token)
    }

    #[instrument(skip_all)]
    async fn fetch_token(&self) -> Result<CachedToken> {
        let key = ServiceAccountKey::resolve(
            self.service_account_info.as_deref(),
            self.service_account_file.as_deref(),
        )?;
        let token_url = self.token_url.as_deref().unwrap_or(&key.token_uri);
        let assertion = build_assertion(&key, token_url, chrono::Utc::now().timestamp())?;

        info!(client_email = %key.client_email, "requesting google access token");
        let response = self
            .client
            .post(token_url)
            .form(&[("grant_type", JWT_BEARER_GRANT), ("assertion", assertion.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let error_text = response.text().await.unwrap_or_default();
            return Err(GoogleError::Auth {
                message: format!("token exchange failed: {status} - {error_text}"),
            });
        }

        let data: TokenResponse = response.json().await?;
        let lifetime = Duration::from_secs(data.expires_in).saturating_sub(TOKEN_REFRESH_BUFFER);
        Ok(CachedToken {
            token: data.access_token,
            refresh_at: Instant::now() + lifetime,
        })
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::ServiceAccountKey;

    pub const PRIVATE_KEY: &str = include_str!("../tests/fixtures/test_key.pem");
    pub const PUBLIC_KEY: &str = include_str!("../tests/fixtures/test_key.pub.pem");

    pub fn key_json(token_uri: &str) -> String {
        serde_json::json!({
            "type": "service_account",
            "client_email": "recorder@rollforvibes.iam.gserviceaccount.com",
            "private_key_id": "kid-1",
            "private_key": PRIVATE_KEY,
            "token_uri": token_uri,
        })
        .to_string()
    }

    pub fn key(token_uri: &str) -> ServiceAccountKey {
        ServiceAccountKey::from_json(&key_json(token_uri)).unwrap()
    }
}
