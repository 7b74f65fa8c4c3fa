use orderboek_ledger::LedgerError;
use orderboek_retailer::RetailerError;
use thiserror::Error;

/// Errors that abort a sync run.
///
/// Data-integrity findings (missing title, missing brand) are deliberately
/// not here — they are logged and the row is still produced.
#[derive(Debug, Error)]
pub enum SyncError {
    /// An API call failed (transport, auth after the single retry, or an
    /// unexpected response shape).
    #[error(transparent)]
    Retailer(#[from] RetailerError),

    /// The final ledger append failed.
    #[error(transparent)]
    Ledger(#[from] LedgerError),
}
