//! Aggregate engine statistics, for operators and dashboards.

use drip_types::TrustLevel;
use serde::Serialize;
use std::collections::BTreeMap;

/// Snapshot of the engine's aggregate state.
#[derive(Clone, Debug, Serialize)]
pub struct EngineStats {
    /// Agents with at least one successful verification.
    pub total_verified: usize,
    /// Airdrops granted in the current daily window.
    pub daily_airdrops: u32,
    /// Configured daily cap.
    pub max_daily: u32,
    /// Record count per trust level, all levels present.
    pub trust_distribution: BTreeMap<&'static str, usize>,
}

impl EngineStats {
    pub fn from_parts(
        histogram: Vec<(TrustLevel, usize)>,
        total_verified: usize,
        daily_airdrops: u32,
        max_daily: u32,
    ) -> Self {
        let trust_distribution = histogram
            .into_iter()
            .map(|(level, count)| (level.name(), count))
            .collect();
        Self {
            total_verified,
            daily_airdrops,
            max_daily,
            trust_distribution,
        }
    }
}
