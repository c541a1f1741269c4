use std::time::Duration;

use chrono::Utc;
use reqwest::Client;

use crate::{
    config::Config,
    error::{AoideError, Result},
    info,
    types::{Token, TokenResponse},
};

/// Obtains and caches an OAuth2 client-credentials bearer token.
///
/// The client owns the token exclusively: callers only ever see the
/// bearer string via [`AuthClient::bearer_token`], which transparently
/// requests a fresh token when none is cached or the cached one has
/// expired. There is no retry; a failed token request surfaces as
/// [`AoideError::Auth`] and the next call starts over.
pub struct AuthClient {
    http: Client,
    auth_url: String,
    client_id: String,
    client_secret: String,
    token: Option<Token>,
    debug: bool,
}

impl AuthClient {
    /// Builds an auth client from the application configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AoideError::Config`] if the underlying HTTP client
    /// cannot be constructed.
    pub fn new(config: &Config) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()
            .map_err(|e| AoideError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(AuthClient {
            http,
            auth_url: config.auth_url.clone(),
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            token: None,
            debug: config.debug,
        })
    }

    /// Returns a currently valid bearer token, refreshing if needed.
    ///
    /// A cached token that has not reached its expiry is returned without
    /// any network traffic; otherwise exactly one token request is issued
    /// before the caller's downstream API call proceeds.
    ///
    /// # Errors
    ///
    /// Returns [`AoideError::Auth`] if the token endpoint responds with a
    /// non-2xx status or malformed JSON, and [`AoideError::Timeout`] if
    /// the request exceeds the configured timeout.
    pub async fn bearer_token(&mut self) -> Result<String> {
        let now = Utc::now().timestamp();
        if let Some(token) = &self.token {
            if !token.is_expired(now) {
                return Ok(token.access_token.clone());
            }
        }

        let token = self.request_token(now).await?;
        let access_token = token.access_token.clone();
        self.token = Some(token);
        Ok(access_token)
    }

    async fn request_token(&self, now: i64) -> Result<Token> {
        if self.debug {
            info!("POST {}", self.auth_url);
        }

        let response = self
            .http
            .post(&self.auth_url)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(&[("grant_type", "client_credentials")])
            .send()
            .await
            .map_err(|e| AoideError::transport(e, "requesting access token"))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AoideError::Auth(format!(
                "token endpoint returned {status}: {body}"
            )));
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|e| AoideError::Auth(format!("malformed token response: {e}")))?;

        Ok(Token {
            access_token: token.access_token,
            expires_at: now + token.expires_in,
        })
    }
}
