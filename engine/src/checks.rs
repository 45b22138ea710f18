//! The fixed, ordered table of verification checks.
//!
//! Every check is described by one [`CheckSpec`] — its recorded names, its
//! terminal flag, and which oracle it consults. The pipeline executes the
//! table with a single uniform loop instead of ad hoc branching per
//! evidence type.

/// Identifies which probe a check performs.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CheckId {
    /// Address format (pure, no oracle).
    Format,
    /// Minimum STX balance — the anti-Sybil stake floor.
    Stake,
    /// Repository contains the expected agent config (if repo supplied).
    RepoConfig,
    /// Agent endpoint responds to a probe (if endpoint supplied).
    EndpointLive,
    /// Agent controls the claimed name (if name supplied).
    NameOwned,
}

/// One row of the pipeline's check table.
#[derive(Clone, Copy, Debug)]
pub struct CheckSpec {
    pub id: CheckId,
    /// Name recorded in `checks_passed` on success.
    pub pass_name: &'static str,
    /// Name recorded in `checks_failed` on failure.
    ///
    /// `None` marks a bonus check whose failure records nothing.
    pub fail_name: Option<&'static str>,
    /// A terminal check stops the pipeline on failure.
    pub terminal: bool,
}

/// The pipeline's checks, in execution order.
pub const PIPELINE_CHECKS: [CheckSpec; 5] = [
    CheckSpec {
        id: CheckId::Format,
        pass_name: "valid_address",
        fail_name: Some("invalid_address"),
        terminal: true,
    },
    CheckSpec {
        id: CheckId::Stake,
        pass_name: "min_balance",
        fail_name: Some("insufficient_balance"),
        terminal: true,
    },
    CheckSpec {
        id: CheckId::RepoConfig,
        pass_name: "repo_config",
        fail_name: Some("repo_config_missing"),
        terminal: false,
    },
    CheckSpec {
        id: CheckId::EndpointLive,
        pass_name: "endpoint_alive",
        fail_name: Some("endpoint_down"),
        terminal: false,
    },
    CheckSpec {
        id: CheckId::NameOwned,
        pass_name: "name_owned",
        fail_name: None,
        terminal: false,
    },
];

/// The stake check's pass name — the decider requires it for eligibility.
pub const STAKE_PASS: &str = "min_balance";
