//! In-memory trust ledger with snapshot persistence.
//!
//! The ledger owns every [`TrustRecord`]. How snapshots reach durable
//! storage (file, database, nothing) is the host's concern — the ledger only
//! provides `to_bytes`/`from_bytes`.

use crate::error::TrustError;
use crate::record::TrustRecord;
use drip_types::{AgentAddress, RewardAmounts, Timestamp, TrustLevel};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The trust ledger — one record per agent that ever passed eligibility.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct TrustLedger {
    records: HashMap<AgentAddress, TrustRecord>,
}

impl TrustLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up an agent's record.
    pub fn get(&self, address: &AgentAddress) -> Option<&TrustRecord> {
        self.records.get(address)
    }

    /// Number of agents with at least one successful verification.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Commit a successful verification.
    ///
    /// First success creates the record with `verification_count = 1`;
    /// later successes increment the count, bump `last_activity`, and
    /// overwrite the cached trust level. Evidence is first-write-wins.
    pub fn record_verification(
        &mut self,
        address: &AgentAddress,
        repo: Option<&str>,
        name: Option<&str>,
        trust_level: TrustLevel,
        now: Timestamp,
    ) {
        match self.records.get_mut(address) {
            Some(record) => {
                record.verification_count += 1;
                record.last_activity = now;
                record.trust_level = trust_level;
            }
            None => {
                self.records.insert(
                    address.clone(),
                    TrustRecord::first_verification(
                        address.clone(),
                        repo.map(str::to_owned),
                        name.map(str::to_owned),
                        trust_level,
                        now,
                    ),
                );
            }
        }
    }

    /// Accumulate a completed disbursement into the agent's totals.
    ///
    /// Called by the host after the payer confirms a transfer. Totals are
    /// informational and never consulted for gating.
    pub fn credit_airdrop(
        &mut self,
        address: &AgentAddress,
        amounts: RewardAmounts,
    ) -> Result<(), TrustError> {
        let record = self
            .records
            .get_mut(address)
            .ok_or_else(|| TrustError::RecordNotFound(address.to_string()))?;
        record.total_airdropped.accumulate(amounts);
        Ok(())
    }

    /// Histogram of records by trust level, covering all levels (zeros included).
    pub fn level_histogram(&self) -> Vec<(TrustLevel, usize)> {
        TrustLevel::ALL
            .iter()
            .map(|&level| {
                let count = self
                    .records
                    .values()
                    .filter(|r| r.trust_level == level)
                    .count();
                (level, count)
            })
            .collect()
    }

    /// Serialize the ledger for persistence.
    pub fn to_bytes(&self) -> Vec<u8> {
        bincode::serialize(&self.records).unwrap_or_default()
    }

    /// Restore a ledger from a snapshot.
    pub fn from_bytes(data: &[u8]) -> Result<Self, TrustError> {
        let records: HashMap<AgentAddress, TrustRecord> = bincode::deserialize(data)
            .map_err(|e| TrustError::CorruptSnapshot(e.to_string()))?;
        Ok(Self { records })
    }
}
