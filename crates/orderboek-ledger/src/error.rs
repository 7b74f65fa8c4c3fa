use thiserror::Error;

/// Errors from the ledger file.
#[derive(Debug, Error)]
pub enum LedgerError {
    /// The ledger file could not be read or written.
    #[error("ledger I/O error: {0}")]
    Io(#[from] std::io::Error),
}
