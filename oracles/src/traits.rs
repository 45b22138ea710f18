//! Oracle trait interfaces consumed by the verification pipeline.
//!
//! Every method is fallible I/O: implementations may be unreachable, time
//! out, or return garbage. The pipeline treats any error as a failed check
//! and carries on — an oracle can never abort a verification.

use crate::error::OracleError;
use async_trait::async_trait;
use drip_types::AgentAddress;

/// Result of probing an agent endpoint.
///
/// Any HTTP-level response — including error statuses — counts as alive;
/// only a connection failure or timeout counts as failed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Liveness {
    Alive,
    Failed,
}

/// Looks up the STX balance of an address.
#[async_trait]
pub trait BalanceOracle: Send + Sync {
    /// Balance in microSTX.
    async fn balance_ustx(&self, address: &AgentAddress) -> Result<u64, OracleError>;
}

/// Scans a repository for the expected agent configuration markers.
#[async_trait]
pub trait RepoOracle: Send + Sync {
    /// `repo` is an `owner/repo` reference.
    async fn has_expected_config(&self, repo: &str) -> Result<bool, OracleError>;
}

/// Probes an agent endpoint for liveness.
#[async_trait]
pub trait EndpointOracle: Send + Sync {
    async fn probe(&self, endpoint: &str) -> Result<Liveness, OracleError>;
}

/// Confirms ownership of a registered name.
#[async_trait]
pub trait NameOracle: Send + Sync {
    async fn owned_by(&self, name: &str, address: &AgentAddress) -> Result<bool, OracleError>;
}
