//! The trust-level state machine.
//!
//! A pure function of (history, current checks). The stored `trust_level`
//! field on a record is never consulted here: repeat-verification tiers are
//! derived from `verification_count`, and first-timers from how many checks
//! passed this request. This keeps "what tier to reward" fully separable
//! from "whether to persist".

use crate::record::TrustRecord;
use drip_types::TrustLevel;

/// Verification count at which an agent becomes Established.
pub const ESTABLISHED_VERIFICATIONS: u32 = 5;

/// Verification count at which an agent becomes Trusted.
pub const TRUSTED_VERIFICATIONS: u32 = 2;

/// Checks passed in one request for a first-timer to reach Basic.
pub const BASIC_CHECKS: usize = 4;

/// Checks passed in one request for a first-timer to reach Pending.
pub const PENDING_CHECKS: usize = 2;

/// Compute the trust level for an agent given its history and the number of
/// checks passed in the current request.
///
/// Repeat agents are tiered by how often they have verified before. An
/// existing record below the Trusted threshold falls back to the fresh
/// count-based rule, so trust is recomputed from scratch on every call.
pub fn next_level(existing: Option<&TrustRecord>, checks_passed: usize) -> TrustLevel {
    if let Some(record) = existing {
        if record.verification_count >= ESTABLISHED_VERIFICATIONS {
            return TrustLevel::Established;
        }
        if record.verification_count >= TRUSTED_VERIFICATIONS {
            return TrustLevel::Trusted;
        }
    }

    if checks_passed >= BASIC_CHECKS {
        TrustLevel::Basic
    } else if checks_passed >= PENDING_CHECKS {
        TrustLevel::Pending
    } else {
        TrustLevel::Unknown
    }
}
