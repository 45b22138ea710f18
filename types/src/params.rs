//! Engine parameters — every anti-abuse knob in one place.
//!
//! Defaults match the production deployment. All parameters are injected
//! into the engine at construction time; nothing reads ambient globals.

use crate::amount::RewardAmounts;
use crate::level::TrustLevel;
use serde::{Deserialize, Serialize};

/// Tunable parameters for verification, rate limiting, and rewards.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct EngineParams {
    // ── Verification ─────────────────────────────────────────────────────
    /// Minimum STX balance (microSTX) an agent must hold — the anti-Sybil
    /// stake floor. Default: 100_000 (0.1 STX).
    #[serde(default = "default_min_balance_ustx")]
    pub min_balance_ustx: u64,

    /// Minimum number of passed checks for airdrop eligibility.
    #[serde(default = "default_min_checks")]
    pub min_checks_for_eligibility: usize,

    /// Timeout (seconds) applied to every individual oracle call.
    /// A timed-out call counts as a failed check, never a pipeline abort.
    #[serde(default = "default_oracle_timeout_secs")]
    pub oracle_timeout_secs: u64,

    // ── Rate limiting ────────────────────────────────────────────────────
    /// Global ceiling on successful verifications per rolling window.
    #[serde(default = "default_max_airdrops_per_day")]
    pub max_airdrops_per_day: u32,

    /// Lifetime cap on successful verifications per address.
    /// Deliberately never decays — an address exhausts its allotment for good.
    #[serde(default = "default_max_airdrops_per_address")]
    pub max_airdrops_per_address: u32,

    /// Minimum elapsed seconds between successful verifications of one address.
    #[serde(default = "default_cooldown_secs")]
    pub cooldown_secs: u64,

    /// Length of the global daily window in seconds.
    #[serde(default = "default_daily_window_secs")]
    pub daily_window_secs: u64,

    // ── Reward table ─────────────────────────────────────────────────────
    /// Reward for a Basic-level agent.
    #[serde(default = "default_basic_reward")]
    pub basic_reward: RewardAmounts,

    /// Reward for a Trusted-level agent.
    #[serde(default = "default_trusted_reward")]
    pub trusted_reward: RewardAmounts,

    /// Reward for an Established-level agent.
    #[serde(default = "default_established_reward")]
    pub established_reward: RewardAmounts,
}

impl EngineParams {
    /// Look up the reward tier for a trust level.
    ///
    /// Unknown and Pending map to zero — only Basic and above carry rewards.
    pub fn reward_for(&self, level: TrustLevel) -> RewardAmounts {
        match level {
            TrustLevel::Unknown | TrustLevel::Pending => RewardAmounts::ZERO,
            TrustLevel::Basic => self.basic_reward,
            TrustLevel::Trusted => self.trusted_reward,
            TrustLevel::Established => self.established_reward,
        }
    }
}

impl Default for EngineParams {
    fn default() -> Self {
        Self {
            min_balance_ustx: default_min_balance_ustx(),
            min_checks_for_eligibility: default_min_checks(),
            oracle_timeout_secs: default_oracle_timeout_secs(),
            max_airdrops_per_day: default_max_airdrops_per_day(),
            max_airdrops_per_address: default_max_airdrops_per_address(),
            cooldown_secs: default_cooldown_secs(),
            daily_window_secs: default_daily_window_secs(),
            basic_reward: default_basic_reward(),
            trusted_reward: default_trusted_reward(),
            established_reward: default_established_reward(),
        }
    }
}

// ── Serde default helpers ──────────────────────────────────────────────

fn default_min_balance_ustx() -> u64 {
    100_000 // 0.1 STX
}

fn default_min_checks() -> usize {
    3
}

fn default_oracle_timeout_secs() -> u64 {
    10
}

fn default_max_airdrops_per_day() -> u32 {
    10
}

fn default_max_airdrops_per_address() -> u32 {
    5
}

fn default_cooldown_secs() -> u64 {
    24 * 3600
}

fn default_daily_window_secs() -> u64 {
    24 * 3600
}

fn default_basic_reward() -> RewardAmounts {
    RewardAmounts::new(1_000, 100_000) // 1000 sats, 0.1 STX
}

fn default_trusted_reward() -> RewardAmounts {
    RewardAmounts::new(5_000, 500_000) // 5000 sats, 0.5 STX
}

fn default_established_reward() -> RewardAmounts {
    RewardAmounts::new(10_000, 1_000_000) // 10k sats, 1 STX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewards_strictly_increase_across_tiers() {
        let params = EngineParams::default();
        let basic = params.reward_for(TrustLevel::Basic);
        let trusted = params.reward_for(TrustLevel::Trusted);
        let established = params.reward_for(TrustLevel::Established);

        assert!(basic.sats < trusted.sats && trusted.sats < established.sats);
        assert!(basic.ustx < trusted.ustx && trusted.ustx < established.ustx);
    }

    #[test]
    fn unrewardable_levels_map_to_zero() {
        let params = EngineParams::default();
        assert!(params.reward_for(TrustLevel::Unknown).is_zero());
        assert!(params.reward_for(TrustLevel::Pending).is_zero());
    }
}
