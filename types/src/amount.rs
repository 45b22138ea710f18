//! Reward amounts in the two airdrop units.
//!
//! Rewards are paid in two independent units: sBTC satoshis (the scarce
//! unit) and microSTX (the native unit). Both are plain integers; the engine
//! never does unit conversion.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A pair of reward amounts: sBTC sats + microSTX.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RewardAmounts {
    /// sBTC amount in satoshis.
    pub sats: u64,
    /// STX amount in microSTX (1 STX = 1_000_000 ustx).
    pub ustx: u64,
}

impl RewardAmounts {
    pub const ZERO: Self = Self { sats: 0, ustx: 0 };

    pub fn new(sats: u64, ustx: u64) -> Self {
        Self { sats, ustx }
    }

    pub fn is_zero(&self) -> bool {
        self.sats == 0 && self.ustx == 0
    }

    /// Accumulate another reward into this one (saturating).
    pub fn accumulate(&mut self, other: RewardAmounts) {
        self.sats = self.sats.saturating_add(other.sats);
        self.ustx = self.ustx.saturating_add(other.ustx);
    }
}

impl fmt::Display for RewardAmounts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} sats + {} ustx", self.sats, self.ustx)
    }
}
