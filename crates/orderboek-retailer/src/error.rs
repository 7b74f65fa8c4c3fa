use thiserror::Error;

/// Errors from the credential exchange against the token endpoint.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Network or TLS failure reaching the token endpoint, or an
    /// undecodable token response body.
    #[error("token endpoint error: {0}")]
    Http(#[from] reqwest::Error),

    /// The token endpoint answered with a non-2xx status.
    #[error("token endpoint returned status {status}: {body}")]
    TokenEndpoint { status: u16, body: String },

    /// The token response parsed as JSON but carried no `access_token` field.
    #[error("token response is missing the access_token field")]
    MissingAccessToken,
}

/// Errors returned by the Retailer API client.
#[derive(Debug, Error)]
pub enum RetailerError {
    /// The in-flight re-authentication failed.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered non-2xx with a JSON error body, surfaced verbatim.
    /// A 401 that survives the single re-authentication retry lands here.
    #[error("retailer API returned status {status}: {body}")]
    Api { status: u16, body: serde_json::Value },

    /// The API answered non-2xx and the body was not parseable JSON.
    #[error("retailer API returned status {status} with an unparseable body")]
    UnexpectedStatus { status: u16 },

    /// A 2xx response body did not match the expected shape.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },
}
