//! Oracle-specific errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OracleError {
    #[error("oracle endpoint unreachable: {0}")]
    Unreachable(String),

    #[error("HTTP request to oracle failed: {0}")]
    RequestFailed(String),

    #[error("invalid response from oracle: {0}")]
    InvalidResponse(String),

    #[error("{0}")]
    Other(String),
}
