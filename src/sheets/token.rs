//! Token Provider Module
//!
//! Mints short-lived bearer tokens for the Sheets API by signing an RS256
//! JWT with the service account key and exchanging it at the token endpoint.
//! Tokens are cached until shortly before expiry.

use chrono::Utc;
use jsonwebtoken::{encode, Algorithm, EncodingKey, Header};
use serde::{Deserialize, Serialize};
use tokio::sync::Mutex;
use tracing::debug;

use crate::error::{FetchError, Result};
use crate::sheets::ServiceAccountKey;

/// Read-only spreadsheet scope requested for minted tokens.
const SHEETS_SCOPE: &str = "https://www.googleapis.com/auth/spreadsheets.readonly";

/// JWT-bearer grant type for the token exchange.
const JWT_BEARER_GRANT: &str = "urn:ietf:params:oauth:grant-type:jwt-bearer";

/// Lifetime requested for each assertion, in seconds.
const ASSERTION_LIFETIME_SECS: i64 = 3600;

/// Tokens are refreshed once they are within this margin of expiry.
const REFRESH_MARGIN_SECS: i64 = 60;

/// Claims of the service account assertion JWT.
#[derive(Debug, Serialize)]
struct AssertionClaims {
    iss: String,
    scope: String,
    aud: String,
    iat: i64,
    exp: i64,
}

/// Response body of the token endpoint.
#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    expires_in: i64,
}

#[derive(Debug, Clone)]
struct CachedToken {
    access_token: String,
    expires_at: i64,
}

// == Token Provider ==
/// Caches and refreshes bearer tokens for a single service account.
pub struct TokenProvider {
    client_email: String,
    token_uri: String,
    encoding_key: EncodingKey,
    http: reqwest::Client,
    cached: Mutex<Option<CachedToken>>,
}

impl TokenProvider {
    // == Constructor ==
    /// Builds a provider from a parsed service account key.
    ///
    /// The private key PEM is validated here so an unusable key surfaces as
    /// a configuration error at startup, before any remote call.
    pub fn new(key: ServiceAccountKey) -> Result<Self> {
        let encoding_key = EncodingKey::from_rsa_pem(key.private_key.as_bytes())
            .map_err(|e| FetchError::Config(format!("invalid service account private key: {}", e)))?;

        Ok(Self {
            client_email: key.client_email,
            token_uri: key.token_uri,
            encoding_key,
            http: reqwest::Client::new(),
            cached: Mutex::new(None),
        })
    }

    // == Token ==
    /// Returns a bearer token, minting a fresh one if the cached token is
    /// absent or about to expire.
    pub async fn token(&self) -> Result<String> {
        let mut guard = self.cached.lock().await;

        if let Some(cached) = guard.as_ref() {
            if Utc::now().timestamp() + REFRESH_MARGIN_SECS < cached.expires_at {
                return Ok(cached.access_token.clone());
            }
        }

        let minted = self.mint().await?;
        let token = minted.access_token.clone();
        *guard = Some(minted);
        Ok(token)
    }

    /// Signs an assertion and exchanges it for an access token.
    async fn mint(&self) -> Result<CachedToken> {
        let now = Utc::now().timestamp();
        let claims = AssertionClaims {
            iss: self.client_email.clone(),
            scope: SHEETS_SCOPE.to_string(),
            aud: self.token_uri.clone(),
            iat: now,
            exp: now + ASSERTION_LIFETIME_SECS,
        };

        let assertion = encode(&Header::new(Algorithm::RS256), &claims, &self.encoding_key)
            .map_err(|e| FetchError::Remote(format!("failed to sign token assertion: {}", e)))?;

        let response = self
            .http
            .post(&self.token_uri)
            .form(&[
                ("grant_type", JWT_BEARER_GRANT),
                ("assertion", assertion.as_str()),
            ])
            .send()
            .await
            .map_err(|e| FetchError::Remote(format!("token endpoint unreachable: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(FetchError::Remote(format!(
                "token endpoint returned {}: {}",
                status, body
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| FetchError::Remote(format!("malformed token response: {}", e)))?;

        debug!("Minted access token for {}", self.client_email);

        Ok(CachedToken {
            access_token: token.access_token,
            expires_at: now + token.expires_in,
        })
    }
}
