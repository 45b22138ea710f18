//! Per-agent trust record.

use drip_types::{AgentAddress, RewardAmounts, Timestamp, TrustLevel};
use serde::{Deserialize, Serialize};

/// The persistent record of a verified agent.
///
/// Invariants maintained by the ledger:
/// - `verification_count >= 1` for any existing record
/// - `last_activity >= first_seen`
/// - `repo`/`name` evidence is first-write-wins and never updated afterwards
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct TrustRecord {
    /// The agent's address.
    pub address: AgentAddress,
    /// Repository evidence supplied on first successful verification.
    pub repo: Option<String>,
    /// Name evidence supplied on first successful verification.
    pub name: Option<String>,
    /// Cached trust level from the most recent verification.
    ///
    /// Advisory only — the authoritative level is recomputed from
    /// `verification_count` on every call (see `level_rule`).
    pub trust_level: TrustLevel,
    /// Cumulative rewards actually disbursed to this agent (informational,
    /// never used for gating).
    pub total_airdropped: RewardAmounts,
    /// Number of successful verifications. Monotonically increasing.
    pub verification_count: u32,
    /// When this agent first passed verification.
    pub first_seen: Timestamp,
    /// When this agent last passed verification.
    pub last_activity: Timestamp,
}

impl TrustRecord {
    /// Create the record for an agent's first successful verification.
    pub fn first_verification(
        address: AgentAddress,
        repo: Option<String>,
        name: Option<String>,
        trust_level: TrustLevel,
        now: Timestamp,
    ) -> Self {
        Self {
            address,
            repo,
            name,
            trust_level,
            total_airdropped: RewardAmounts::ZERO,
            verification_count: 1,
            first_seen: now,
            last_activity: now,
        }
    }
}
