//! Catalog-product endpoint for the Retailer API client.

use reqwest::Method;

use crate::client::RetailerClient;
use crate::error::RetailerError;
use crate::types::Product;

impl RetailerClient {
    /// Fetches catalog product details by EAN.
    ///
    /// The returned [`Product`] exposes title, description, and brand
    /// through its accessors; defaulting rules (empty title, `"Merkloos"`)
    /// are the sync engine's concern.
    ///
    /// # Errors
    ///
    /// - [`RetailerError::Auth`] if re-authentication fails.
    /// - [`RetailerError::Api`] / [`RetailerError::UnexpectedStatus`] on a
    ///   non-2xx answer.
    /// - [`RetailerError::Http`] on network failure.
    /// - [`RetailerError::Deserialize`] if the response shape is unexpected.
    pub async fn get_product(&self, ean: &str) -> Result<Product, RetailerError> {
        let body = self
            .request_json(Method::GET, &format!("content/catalog-products/{ean}"), None)
            .await?;
        serde_json::from_value(body).map_err(|e| RetailerError::Deserialize {
            context: format!("getProduct(ean={ean})"),
            source: e,
        })
    }
}
