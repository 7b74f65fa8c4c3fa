//! Order endpoints for the Retailer API client.

use reqwest::Method;

use crate::client::RetailerClient;
use crate::error::RetailerError;
use crate::types::{Order, OrdersResponse, ProcessStatus};

/// Transporter code pushed with shipment confirmations unless the caller
/// picks another carrier.
pub const DEFAULT_TRANSPORTER_CODE: &str = "TNT";

impl RetailerClient {
    /// Fetches the open orders.
    ///
    /// Returns an empty list when the seller has no open orders — the
    /// upstream reports that case with an empty body or an empty envelope.
    ///
    /// # Errors
    ///
    /// - [`RetailerError::Auth`] if re-authentication fails.
    /// - [`RetailerError::Api`] / [`RetailerError::UnexpectedStatus`] on a
    ///   non-2xx answer (including a 401 that survives the single retry).
    /// - [`RetailerError::Http`] on network failure.
    /// - [`RetailerError::Deserialize`] if the response shape is unexpected.
    pub async fn list_open_orders(&self) -> Result<Vec<Order>, RetailerError> {
        let body = self
            .request_json(Method::GET, "orders?status=OPEN", None)
            .await?;
        if body.is_null() {
            return Ok(Vec::new());
        }
        let envelope: OrdersResponse =
            serde_json::from_value(body).map_err(|e| RetailerError::Deserialize {
                context: "listOpenOrders".to_owned(),
                source: e,
            })?;
        Ok(envelope.orders)
    }

    /// Fetches one order by id, including the shipment and billing
    /// sub-objects used by the order-detail view.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`RetailerClient::list_open_orders`].
    pub async fn get_order(&self, order_id: &str) -> Result<Order, RetailerError> {
        let body = self
            .request_json(Method::GET, &format!("orders/{order_id}"), None)
            .await?;
        serde_json::from_value(body).map_err(|e| RetailerError::Deserialize {
            context: format!("getOrder(id={order_id})"),
            source: e,
        })
    }

    /// Pushes shipping information for an order item.
    ///
    /// Not on the sync path, but part of the client's public surface.
    ///
    /// # Errors
    ///
    /// Same failure modes as [`RetailerClient::list_open_orders`].
    pub async fn ship_order_item(
        &self,
        order_item_id: &str,
        track_and_trace: &str,
        transporter_code: &str,
    ) -> Result<ProcessStatus, RetailerError> {
        let payload = serde_json::json!({
            "transport": {
                "transporterCode": transporter_code,
                "trackAndTrace": track_and_trace,
            }
        });
        let body = self
            .request_json(
                Method::PUT,
                &format!("orders/{order_item_id}/shipment"),
                Some(payload),
            )
            .await?;
        if body.is_null() {
            return Ok(ProcessStatus::default());
        }
        serde_json::from_value(body).map_err(|e| RetailerError::Deserialize {
            context: format!("setShipment(orderItemId={order_item_id})"),
            source: e,
        })
    }

    /// [`RetailerClient::ship_order_item`] with the
    /// [`DEFAULT_TRANSPORTER_CODE`].
    ///
    /// # Errors
    ///
    /// Same failure modes as [`RetailerClient::ship_order_item`].
    pub async fn ship_order_item_default(
        &self,
        order_item_id: &str,
        track_and_trace: &str,
    ) -> Result<ProcessStatus, RetailerError> {
        self.ship_order_item(order_item_id, track_and_trace, DEFAULT_TRANSPORTER_CODE)
            .await
    }
}
