//! HTTP client for the marketplace Retailer API.
//!
//! Wraps `reqwest` with the versioned media type, bearer-token injection,
//! and the single transparent re-authentication on a 401. Endpoint wrappers
//! live in [`crate::orders`] and [`crate::products`].

use std::time::Duration;

use reqwest::{Client, Method, StatusCode};
use serde_json::Value;

use crate::auth::{Authenticator, Credentials};
use crate::error::RetailerError;

const DEFAULT_BASE_URL: &str = "https://api.bol.com/retailer";
const DEMO_BASE_URL: &str = "https://api.bol.com/retailer-demo";
const DEFAULT_TOKEN_URL: &str = "https://login.bol.com/token";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Versioned JSON media type the Retailer API speaks.
const MEDIA_TYPE: &str = "application/vnd.retailer.v10+json";
const USER_AGENT: &str = concat!("orderboek/", env!("CARGO_PKG_VERSION"));

/// Client for the marketplace Retailer API.
///
/// Holds the HTTP client, the base URL, and the injected [`Authenticator`]
/// that owns all token state. Use [`RetailerClient::connect`] for
/// production, [`RetailerClient::connect_demo`] for the sandbox environment,
/// or [`RetailerClient::with_base_urls`] to point at a mock server in tests.
#[derive(Debug)]
pub struct RetailerClient {
    http: Client,
    base_url: String,
    auth: Authenticator,
}

/// Joins a base URL and an endpoint path with exactly one slash.
fn join_url(base_url: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

impl RetailerClient {
    /// Connects to the production Retailer API and performs the first login.
    ///
    /// # Errors
    ///
    /// Returns [`RetailerError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`RetailerError::Auth`] if the initial
    /// credential exchange fails.
    pub async fn connect(credentials: Credentials) -> Result<Self, RetailerError> {
        Self::with_base_urls(
            credentials,
            DEFAULT_TIMEOUT_SECS,
            DEFAULT_BASE_URL,
            DEFAULT_TOKEN_URL,
        )
        .await
    }

    /// Connects to the demo environment (sandboxed order data).
    ///
    /// # Errors
    ///
    /// Same failure modes as [`RetailerClient::connect`].
    pub async fn connect_demo(credentials: Credentials) -> Result<Self, RetailerError> {
        Self::with_base_urls(
            credentials,
            DEFAULT_TIMEOUT_SECS,
            DEMO_BASE_URL,
            DEFAULT_TOKEN_URL,
        )
        .await
    }

    /// Connects with custom API and token endpoints (for testing with
    /// wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`RetailerError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`RetailerError::Auth`] if the initial
    /// credential exchange fails.
    pub async fn with_base_urls(
        credentials: Credentials,
        timeout_secs: u64,
        base_url: &str,
        token_url: &str,
    ) -> Result<Self, RetailerError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(USER_AGENT)
            .build()?;

        let auth = Authenticator::new(http.clone(), token_url, credentials);
        auth.authenticate().await?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_owned(),
            auth,
        })
    }

    /// The injected authenticator owning the token state.
    #[must_use]
    pub fn authenticator(&self) -> &Authenticator {
        &self.auth
    }

    async fn send(
        &self,
        method: &Method,
        url: &str,
        body: Option<&Value>,
        token: &str,
    ) -> Result<reqwest::Response, RetailerError> {
        let mut request = self
            .http
            .request(method.clone(), url)
            .header(reqwest::header::ACCEPT, MEDIA_TYPE)
            .bearer_auth(token);
        if let Some(body) = body {
            request = request
                .header(reqwest::header::CONTENT_TYPE, MEDIA_TYPE)
                .json(body);
        }
        Ok(request.send().await?)
    }

    /// Issues a request with the current bearer token and parses the body.
    ///
    /// On a 401 the client re-authenticates exactly once and resends exactly
    /// once; a second 401 falls through to the generic non-2xx handling, so
    /// persistently invalid credentials never loop. Any other non-2xx is
    /// surfaced as [`RetailerError::Api`] when the error body is JSON, or
    /// [`RetailerError::UnexpectedStatus`] when it is not. An empty 2xx body
    /// yields [`Value::Null`].
    pub(crate) async fn request_json(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, RetailerError> {
        let url = join_url(&self.base_url, path);

        let token = match self.auth.bearer_token().await {
            Some(token) => token,
            None => self.auth.authenticate().await?,
        };
        let mut response = self.send(&method, &url, body.as_ref(), &token).await?;

        if response.status() == StatusCode::UNAUTHORIZED {
            tracing::debug!(%url, "bearer token rejected; re-authenticating once");
            let token = self.auth.authenticate().await?;
            response = self.send(&method, &url, body.as_ref(), &token).await?;
        }

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(match serde_json::from_str::<Value>(&text) {
                Ok(body) => RetailerError::Api {
                    status: status.as_u16(),
                    body,
                },
                Err(_) => RetailerError::UnexpectedStatus {
                    status: status.as_u16(),
                },
            });
        }

        if text.trim().is_empty() {
            return Ok(Value::Null);
        }
        serde_json::from_str(&text).map_err(|e| RetailerError::Deserialize {
            context: url,
            source: e,
        })
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
