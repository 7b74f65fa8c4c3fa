//! Append-only delimited-text ledger of previously seen orders.
//!
//! The ledger is the system's durable cache: one semicolon-delimited line per
//! (order, item), a header row written on first use, rows only ever appended.
//! [`LedgerStore::load`] rebuilds the in-memory seen-orders set at startup;
//! [`LedgerStore::append`] persists the rows of one sync run in a single
//! batch.

pub mod error;
pub mod row;
pub mod store;

pub use error::LedgerError;
pub use row::{LedgerRow, HEADER};
pub use store::{decode_line, LedgerStore, DELIMITER};
