//! Ledger-specific errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrustError {
    #[error("corrupt ledger snapshot: {0}")]
    CorruptSnapshot(String),

    #[error("no record for address {0}")]
    RecordNotFound(String),
}
