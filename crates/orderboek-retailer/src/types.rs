//! Retailer API wire types.
//!
//! All types model the JSON shapes returned by the marketplace REST API.
//! Fields the upstream may omit carry `#[serde(default)]` — response bodies
//! are not schema-validated, and partial objects must still deserialize.

use serde::Deserialize;

/// Placeholder for address fields the order detail does not carry.
const MISSING: &str = "N/A";

/// Envelope for the order-list endpoint: `{ "orders": [...] }`.
///
/// The upstream omits the `orders` field (or the whole body) when the seller
/// has no open orders.
#[derive(Debug, Deserialize)]
pub struct OrdersResponse {
    #[serde(default)]
    pub orders: Vec<Order>,
}

/// A sales order.
///
/// The list endpoint returns a reduced shape; the detail endpoint adds the
/// `shipmentDetails` / `billingDetails` sub-objects. Both deserialize into
/// this type, with absent parts defaulted.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: String,
    /// Placement timestamp, carried verbatim from the API.
    #[serde(default)]
    pub order_placed_date_time: String,
    #[serde(default)]
    pub order_items: Vec<OrderItem>,
    #[serde(default)]
    pub shipment_details: Option<CustomerDetails>,
    #[serde(default)]
    pub billing_details: Option<CustomerDetails>,
}

/// A single line of an [`Order`].
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    #[serde(default)]
    pub order_item_id: Option<String>,
    pub ean: String,
    pub quantity: u32,
    #[serde(default)]
    pub fulfilment_method: String,
}

/// Shipment or billing address block on an order detail.
///
/// The two blocks share one wire shape. Every `*_or_default` accessor
/// substitutes `"N/A"` for an absent field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDetails {
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub surname: Option<String>,
    #[serde(default)]
    pub street_name: Option<String>,
    #[serde(default)]
    pub house_number: Option<String>,
    #[serde(default)]
    pub house_number_extension: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub zip_code: Option<String>,
    #[serde(default)]
    pub country_code: Option<String>,
}

impl CustomerDetails {
    fn field(value: &Option<String>) -> &str {
        value.as_deref().unwrap_or(MISSING)
    }

    /// `"{firstName} {surname}"`.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!(
            "{} {}",
            Self::field(&self.first_name),
            Self::field(&self.surname)
        )
    }

    /// `"{streetName} {houseNumber} {houseNumberExtension}"`.
    ///
    /// A missing extension contributes nothing; trailing whitespace is
    /// trimmed.
    #[must_use]
    pub fn address_line(&self) -> String {
        let line = format!(
            "{} {} {}",
            Self::field(&self.street_name),
            Self::field(&self.house_number),
            self.house_number_extension.as_deref().unwrap_or(""),
        );
        line.trim_end().to_owned()
    }

    #[must_use]
    pub fn city_or_default(&self) -> &str {
        Self::field(&self.city)
    }

    #[must_use]
    pub fn zip_code_or_default(&self) -> &str {
        Self::field(&self.zip_code)
    }

    #[must_use]
    pub fn country_code_or_default(&self) -> &str {
        Self::field(&self.country_code)
    }
}

/// A catalog product: attribute list plus contributing parties.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Product {
    #[serde(default)]
    pub attributes: Vec<ProductAttribute>,
    #[serde(default)]
    pub parties: Vec<ProductParty>,
}

/// One named attribute of a catalog product.
#[derive(Debug, Clone, Deserialize)]
pub struct ProductAttribute {
    pub id: String,
    #[serde(default)]
    pub values: Vec<AttributeValue>,
}

/// One value of a product attribute.
///
/// Values are not schema-validated; non-string values resolve to `None` at
/// the accessors.
#[derive(Debug, Clone, Deserialize)]
pub struct AttributeValue {
    #[serde(default)]
    pub value: serde_json::Value,
}

/// A party associated with a catalog product (brand, distributor, ...).
#[derive(Debug, Clone, Deserialize)]
pub struct ProductParty {
    #[serde(rename = "type")]
    pub party_type: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub name: String,
}

impl Product {
    fn attribute_value(&self, id: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.id == id)
            .and_then(|a| a.values.first())
            .and_then(|v| v.value.as_str())
    }

    /// The first value of the `Title` attribute, if the catalog carries one.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.attribute_value("Title")
    }

    /// The first value of the `Description` attribute, if present.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.attribute_value("Description")
    }

    /// The name of the first party with `type == "Brand"` and
    /// `role == "BRAND"`.
    #[must_use]
    pub fn brand(&self) -> Option<&str> {
        self.parties
            .iter()
            .find(|p| p.party_type == "Brand" && p.role == "BRAND")
            .map(|p| p.name.as_str())
    }
}

/// Acknowledgement returned by write endpoints such as the shipment push.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessStatus {
    #[serde(default)]
    pub process_status_id: Option<String>,
    #[serde(default)]
    pub event_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_name_defaults_missing_parts() {
        let details = CustomerDetails {
            first_name: Some("Jan".to_owned()),
            ..CustomerDetails::default()
        };
        assert_eq!(details.full_name(), "Jan N/A");
    }

    #[test]
    fn address_line_omits_missing_extension() {
        let details = CustomerDetails {
            street_name: Some("Dorpsstraat".to_owned()),
            house_number: Some("1".to_owned()),
            ..CustomerDetails::default()
        };
        assert_eq!(details.address_line(), "Dorpsstraat 1");
    }

    #[test]
    fn address_line_includes_extension_when_present() {
        let details = CustomerDetails {
            street_name: Some("Dorpsstraat".to_owned()),
            house_number: Some("1".to_owned()),
            house_number_extension: Some("bis".to_owned()),
            ..CustomerDetails::default()
        };
        assert_eq!(details.address_line(), "Dorpsstraat 1 bis");
    }

    #[test]
    fn product_title_resolves_first_title_value() {
        let product: Product = serde_json::from_value(serde_json::json!({
            "attributes": [
                { "id": "Description", "values": [{ "value": "A widget" }] },
                { "id": "Title", "values": [{ "value": "Widget" }, { "value": "Widget 2" }] },
            ],
        }))
        .unwrap();
        assert_eq!(product.title(), Some("Widget"));
        assert_eq!(product.description(), Some("A widget"));
    }

    #[test]
    fn product_title_ignores_non_string_values() {
        let product: Product = serde_json::from_value(serde_json::json!({
            "attributes": [{ "id": "Title", "values": [{ "value": 42 }] }],
        }))
        .unwrap();
        assert_eq!(product.title(), None);
    }

    #[test]
    fn brand_requires_matching_type_and_role() {
        let product: Product = serde_json::from_value(serde_json::json!({
            "parties": [
                { "type": "Brand", "role": "DISTRIBUTOR", "name": "Nope" },
                { "type": "Brand", "role": "BRAND", "name": "Acme" },
            ],
        }))
        .unwrap();
        assert_eq!(product.brand(), Some("Acme"));
    }

    #[test]
    fn orders_envelope_defaults_to_empty() {
        let envelope: OrdersResponse = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(envelope.orders.is_empty());
    }
}
