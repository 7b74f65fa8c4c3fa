//! The order sync loop.

use std::collections::HashSet;

use orderboek_ledger::{LedgerRow, LedgerStore};
use orderboek_retailer::RetailerClient;

use crate::error::SyncError;
use crate::flatten::flatten_order_item;

/// One-shot order synchronization against the marketplace.
///
/// Fetches open orders, resolves product and customer details per order
/// line, filters orders already recorded in the ledger, and appends the
/// remainder in a single batch. Triggered on demand (the presentation
/// layer's refresh action); there is no scheduler.
pub struct OrderSync {
    client: RetailerClient,
    ledger: LedgerStore,
}

impl OrderSync {
    #[must_use]
    pub fn new(client: RetailerClient, ledger: LedgerStore) -> Self {
        Self { client, ledger }
    }

    /// The underlying API client, e.g. for the order-detail view.
    #[must_use]
    pub fn client(&self) -> &RetailerClient {
        &self.client
    }

    #[must_use]
    pub fn ledger(&self) -> &LedgerStore {
        &self.ledger
    }

    /// Rebuilds the seen-orders set from the ledger file.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Ledger`] if the ledger exists but cannot be
    /// read. A missing ledger yields an empty set.
    pub fn load_seen(&self) -> Result<HashSet<String>, SyncError> {
        Ok(self.ledger.load()?)
    }

    /// Runs one sync pass and returns the newly appended rows.
    ///
    /// Requests run strictly one at a time, and the product and order detail
    /// are fetched for every order line before the seen-order filter is
    /// applied. Rows reach the ledger in a single append after the whole
    /// loop has succeeded, so a failed run persists nothing.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Retailer`] if any API call fails, or
    /// [`SyncError::Ledger`] if the final append fails. Either way the
    /// ledger is left untouched by this run.
    pub async fn sync(&self, seen: &mut HashSet<String>) -> Result<Vec<LedgerRow>, SyncError> {
        match self.sync_inner(seen).await {
            Ok(rows) => Ok(rows),
            Err(e) => {
                tracing::error!(error = %e, "order sync aborted");
                Err(e)
            }
        }
    }

    async fn sync_inner(&self, seen: &mut HashSet<String>) -> Result<Vec<LedgerRow>, SyncError> {
        let orders = self.client.list_open_orders().await?;

        let mut rows = Vec::new();
        let mut new_ids: HashSet<String> = HashSet::new();
        for order in &orders {
            for item in &order.order_items {
                let product = self.client.get_product(&item.ean).await?;
                let detail = self.client.get_order(&order.order_id).await?;

                // Ids join the seen-set only after the loop, so an unseen
                // multi-item order yields one row per item.
                if seen.contains(&order.order_id) {
                    continue;
                }

                rows.push(flatten_order_item(order, item, &product, &detail));
                new_ids.insert(order.order_id.clone());
            }
        }

        self.ledger.append(&rows)?;
        seen.extend(new_ids);

        tracing::debug!(
            open_orders = orders.len(),
            new_rows = rows.len(),
            "order sync completed"
        );
        Ok(rows)
    }
}
