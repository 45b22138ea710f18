//! The eligibility decision.
//!
//! Pure function of the pipeline outcome, the resolved trust level, and
//! the rate-limit verdict. All three inputs are computed first so the
//! decision itself has no side effects and is trivially testable.

use crate::limits::DenyReason;
use crate::pipeline::PipelineOutcome;
use drip_types::{EngineParams, RewardAmounts, TrustLevel};

/// What the engine decided for one request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Decision {
    pub eligible: bool,
    pub reward: RewardAmounts,
    pub reason: String,
}

/// Decide eligibility and reward.
///
/// Eligible iff the rate limiter allows, the stake check passed, and
/// enough checks passed overall. A rate-limit denial wins over the
/// check-count reason so callers see the actual gate that fired.
pub fn decide(
    outcome: &PipelineOutcome,
    trust_level: TrustLevel,
    rate_verdict: &Result<(), DenyReason>,
    params: &EngineParams,
) -> Decision {
    if let Err(deny) = rate_verdict {
        return Decision {
            eligible: false,
            reward: RewardAmounts::ZERO,
            reason: deny.to_string(),
        };
    }

    let eligible = outcome.stake_passed()
        && outcome.checks_passed.len() >= params.min_checks_for_eligibility;

    if eligible {
        Decision {
            eligible: true,
            reward: params.reward_for(trust_level),
            reason: "verification passed".into(),
        }
    } else {
        Decision {
            eligible: false,
            reward: RewardAmounts::ZERO,
            reason: "insufficient checks passed".into(),
        }
    }
}
