//! Bearer-token lifecycle for the Retailer API.
//!
//! The token is obtained through a `client_credentials` grant against the
//! marketplace login endpoint. [`Authenticator`] owns the credentials and the
//! current token; the API client holds it and asks for a fresh token whenever
//! a request comes back 401.

use std::fmt;

use reqwest::Client;
use tokio::sync::RwLock;

use crate::error::AuthError;

/// API credentials for the client-credentials grant.
///
/// Immutable for the process lifetime; owned exclusively by the
/// [`Authenticator`]. Supplied by the caller — the core reads no environment.
#[derive(Clone)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    #[must_use]
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The secret must never reach log output.
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Owns the bearer-token state and the exchange against the token endpoint.
#[derive(Debug)]
pub struct Authenticator {
    http: Client,
    token_url: String,
    credentials: Credentials,
    token: RwLock<Option<String>>,
}

impl Authenticator {
    pub(crate) fn new(
        http: Client,
        token_url: impl Into<String>,
        credentials: Credentials,
    ) -> Self {
        Self {
            http,
            token_url: token_url.into(),
            credentials,
            token: RwLock::new(None),
        }
    }

    /// Exchanges the stored credentials for a fresh bearer token.
    ///
    /// Any previously held token is dropped before the exchange starts, so a
    /// re-login never rides on state from an expired session. Callable
    /// repeatedly; every call produces a new token.
    ///
    /// # Errors
    ///
    /// - [`AuthError::Http`] if the token endpoint is unreachable or the
    ///   response body cannot be decoded.
    /// - [`AuthError::TokenEndpoint`] on a non-2xx answer.
    /// - [`AuthError::MissingAccessToken`] when the response JSON lacks an
    ///   `access_token` field.
    pub async fn authenticate(&self) -> Result<String, AuthError> {
        self.token.write().await.take();

        let response = self
            .http
            .post(&self.token_url)
            .form(&[
                ("client_id", self.credentials.client_id.as_str()),
                ("client_secret", self.credentials.client_secret.as_str()),
                ("grant_type", "client_credentials"),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AuthError::TokenEndpoint {
                status: status.as_u16(),
                body,
            });
        }

        let body: serde_json::Value = response.json().await?;
        let token = body
            .get("access_token")
            .and_then(serde_json::Value::as_str)
            .ok_or(AuthError::MissingAccessToken)?
            .to_owned();

        *self.token.write().await = Some(token.clone());
        tracing::debug!("bearer token refreshed");
        Ok(token)
    }

    /// The currently held bearer token, if a login has succeeded.
    pub async fn bearer_token(&self) -> Option<String> {
        self.token.read().await.clone()
    }
}
