//! Client for the marketplace Retailer API.
//!
//! Wraps `reqwest` with bearer-token lifecycle management (client-credentials
//! grant, one transparent re-authentication on a 401) and typed
//! deserialization of the order and catalog endpoints. Token state lives in
//! an explicit [`Authenticator`] injected into the client — nothing mutates
//! ambient session state.

pub mod auth;
pub mod client;
pub mod error;
pub mod orders;
pub mod products;
pub mod types;

pub use auth::{Authenticator, Credentials};
pub use client::RetailerClient;
pub use error::{AuthError, RetailerError};
pub use orders::DEFAULT_TRANSPORTER_CODE;
pub use types::{CustomerDetails, Order, OrderItem, ProcessStatus, Product};
