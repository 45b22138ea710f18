//! The per-request verification result.

use drip_types::{AgentAddress, RewardAmounts, TrustLevel};
use serde::Serialize;

/// Outcome of one verification request.
///
/// Ephemeral — never persisted. This is the engine's complete output
/// contract: the payer acts on `eligible`/`reward`, observers read the
/// check lists and reason.
#[derive(Clone, Debug, Serialize)]
pub struct VerificationResult {
    /// The identity that was verified.
    pub address: AgentAddress,
    /// Names of checks that passed, in pipeline order.
    pub checks_passed: Vec<&'static str>,
    /// Names of checks that failed, in pipeline order.
    pub checks_failed: Vec<&'static str>,
    /// Trust level resolved for this request.
    pub trust_level: TrustLevel,
    /// Whether any reward is granted.
    pub eligible: bool,
    /// Reward amounts; forced to zero when ineligible.
    pub reward: RewardAmounts,
    /// Human-readable explanation of the outcome.
    pub reason: String,
}

impl VerificationResult {
    /// Short tag for the payer's transfer memo.
    pub fn reason_tag(&self) -> String {
        format!("agent verification - {}", self.trust_level)
    }
}
