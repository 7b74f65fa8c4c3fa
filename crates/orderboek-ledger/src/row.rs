//! The flattened order-line record persisted to the ledger.

use serde::{Deserialize, Serialize};

/// Column headers, in persisted order. Column 0 is always the order id.
pub const HEADER: [&str; 12] = [
    "OrderID",
    "BestelDatum",
    "EanNummer",
    "Aantal",
    "Product",
    "Merk",
    "Verzendmethode",
    "Customer Name",
    "Customer Address",
    "City",
    "Postal Code",
    "Country",
];

/// One (order, item) observation — the unit of persistence.
///
/// Uniqueness in the ledger is keyed by `order_id` alone: once any line of
/// an order has been recorded, later syncs skip the whole order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LedgerRow {
    pub order_id: String,
    /// Placement timestamp exactly as the marketplace reported it.
    pub order_date: String,
    pub ean: String,
    pub quantity: u32,
    pub product_name: String,
    pub brand: String,
    pub fulfilment_method: String,
    pub customer_name: String,
    pub customer_address: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
}

impl LedgerRow {
    /// The row's fields in [`HEADER`] column order.
    #[must_use]
    pub fn fields(&self) -> [String; 12] {
        [
            self.order_id.clone(),
            self.order_date.clone(),
            self.ean.clone(),
            self.quantity.to_string(),
            self.product_name.clone(),
            self.brand.clone(),
            self.fulfilment_method.clone(),
            self.customer_name.clone(),
            self.customer_address.clone(),
            self.city.clone(),
            self.postal_code.clone(),
            self.country.clone(),
        ]
    }
}
