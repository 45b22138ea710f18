//! Progressive trust levels for verified agents.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordinal trust classification for an agent identity.
///
/// Levels are monotonic in practice (repeat verifications only move an agent
/// up), but the engine does not enforce that a stored level never regresses —
/// the level is recomputed from history on every verification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TrustLevel {
    /// Never seen.
    Unknown = 0,
    /// Verification in progress — some signals, not enough for a reward tier.
    Pending = 1,
    /// Passed initial verification.
    Basic = 2,
    /// Completed multiple verifications.
    Trusted = 3,
    /// Long-term contributor.
    Established = 4,
}

impl TrustLevel {
    /// All levels in ascending order, for histograms and tables.
    pub const ALL: [TrustLevel; 5] = [
        TrustLevel::Unknown,
        TrustLevel::Pending,
        TrustLevel::Basic,
        TrustLevel::Trusted,
        TrustLevel::Established,
    ];

    /// Uppercase name, matching the wire/stats representation.
    pub fn name(&self) -> &'static str {
        match self {
            TrustLevel::Unknown => "UNKNOWN",
            TrustLevel::Pending => "PENDING",
            TrustLevel::Basic => "BASIC",
            TrustLevel::Trusted => "TRUSTED",
            TrustLevel::Established => "ESTABLISHED",
        }
    }
}

impl fmt::Display for TrustLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_are_ordered() {
        assert!(TrustLevel::Unknown < TrustLevel::Pending);
        assert!(TrustLevel::Pending < TrustLevel::Basic);
        assert!(TrustLevel::Basic < TrustLevel::Trusted);
        assert!(TrustLevel::Trusted < TrustLevel::Established);
    }

    #[test]
    fn names_match_the_wire_representation() {
        assert_eq!(TrustLevel::Unknown.name(), "UNKNOWN");
        assert_eq!(TrustLevel::Established.to_string(), "ESTABLISHED");
    }
}
