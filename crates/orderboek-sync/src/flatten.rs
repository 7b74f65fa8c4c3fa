//! Flattening of API order and product data into ledger rows.
//!
//! The pure half of a sync run: field resolution, the fulfilment-method
//! remap, and the defaulting rules live here so the engine loop stays all
//! control flow.

use orderboek_ledger::LedgerRow;
use orderboek_retailer::types::{CustomerDetails, Order, OrderItem, Product};

/// Sentinel brand for products with no registered brand party.
pub const BRANDLESS: &str = "Merkloos";

/// Remaps the retailer-fulfilled code `"FBR"` to `"VVB"`. Every other code
/// passes through unchanged.
#[must_use]
pub fn normalize_fulfilment_method(method: &str) -> String {
    if method == "FBR" {
        "VVB".to_owned()
    } else {
        method.to_owned()
    }
}

/// Resolves the product title, or an empty string when the catalog has none.
///
/// A missing title is a non-fatal data-integrity finding: it is logged and
/// the row is still produced.
#[must_use]
pub fn resolve_title(product: &Product, ean: &str) -> String {
    match product.title() {
        Some(title) if !title.is_empty() => title.to_owned(),
        _ => {
            tracing::warn!(ean, "no product title found");
            String::new()
        }
    }
}

/// Resolves the brand, or the [`BRANDLESS`] sentinel when no brand party
/// exists (also a non-fatal finding).
#[must_use]
pub fn resolve_brand(product: &Product, ean: &str) -> String {
    match product.brand() {
        Some(brand) if !brand.is_empty() => brand.to_owned(),
        _ => {
            tracing::warn!(ean, "no brand party found");
            BRANDLESS.to_owned()
        }
    }
}

/// Builds the persisted row for one order line.
///
/// Customer fields come from the order detail's shipment block, each
/// defaulting to `"N/A"` when absent.
#[must_use]
pub fn flatten_order_item(
    order: &Order,
    item: &OrderItem,
    product: &Product,
    detail: &Order,
) -> LedgerRow {
    let fallback = CustomerDetails::default();
    let shipment = detail.shipment_details.as_ref().unwrap_or(&fallback);

    LedgerRow {
        order_id: order.order_id.clone(),
        order_date: order.order_placed_date_time.clone(),
        ean: item.ean.clone(),
        quantity: item.quantity,
        product_name: resolve_title(product, &item.ean),
        brand: resolve_brand(product, &item.ean),
        fulfilment_method: normalize_fulfilment_method(&item.fulfilment_method),
        customer_name: shipment.full_name(),
        customer_address: shipment.address_line(),
        city: shipment.city_or_default().to_owned(),
        postal_code: shipment.zip_code_or_default().to_owned(),
        country: shipment.country_code_or_default().to_owned(),
    }
}
