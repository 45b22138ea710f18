//! The engine itself: wires the pipeline, the trust ledger, the rate
//! limiter, and the decider behind one lock.
//!
//! Oracle calls run before the lock is taken. The critical section covers
//! read-record, trust-level computation, rate check, decision, and commit,
//! so concurrent requests for the same agent serialize on the gate and at
//! most one can be awarded per cooldown window.

use crate::decider::{decide, Decision};
use crate::limits::RateLimiter;
use crate::pipeline::{self, OracleSet};
use crate::result::VerificationResult;
use crate::stats::EngineStats;
use drip_trust::{next_level, TrustError, TrustLedger};
use drip_types::{AgentAddress, EngineParams, Evidence, RewardAmounts, Timestamp, TrustLevel};

struct SharedState {
    ledger: TrustLedger,
    limiter: RateLimiter,
}

/// The airdrop decision engine.
///
/// Cheap to share behind an `Arc`; all methods take `&self`.
pub struct AirdropEngine {
    oracles: OracleSet,
    params: EngineParams,
    state: tokio::sync::Mutex<SharedState>,
}

impl AirdropEngine {
    pub fn new(oracles: OracleSet, params: EngineParams) -> Self {
        Self::with_ledger(oracles, params, TrustLedger::new(), Timestamp::now())
    }

    /// Construct with a pre-existing ledger (restored from a snapshot)
    /// and an explicit clock for the rate-limit window.
    pub fn with_ledger(
        oracles: OracleSet,
        params: EngineParams,
        ledger: TrustLedger,
        now: Timestamp,
    ) -> Self {
        Self {
            oracles,
            params,
            state: tokio::sync::Mutex::new(SharedState {
                ledger,
                limiter: RateLimiter::new(now),
            }),
        }
    }

    pub fn params(&self) -> &EngineParams {
        &self.params
    }

    /// Verify an agent identity against the wall clock.
    pub async fn verify(&self, address: AgentAddress, evidence: Evidence) -> VerificationResult {
        self.verify_at(address, evidence, Timestamp::now()).await
    }

    /// Verify an agent identity at an explicit instant.
    pub async fn verify_at(
        &self,
        address: AgentAddress,
        evidence: Evidence,
        now: Timestamp,
    ) -> VerificationResult {
        let outcome = pipeline::run(&self.oracles, &self.params, &address, &evidence).await;

        // A terminal failure never reaches the ledger: no record, no
        // trust level, no rate-limit charge.
        if let Some(reason) = outcome.terminal_failure.clone() {
            tracing::info!(%address, reason, "verification rejected");
            return VerificationResult {
                address,
                checks_passed: outcome.checks_passed,
                checks_failed: outcome.checks_failed,
                trust_level: TrustLevel::Unknown,
                eligible: false,
                reward: RewardAmounts::ZERO,
                reason,
            };
        }

        let (trust_level, decision) = {
            let mut guard = self.state.lock().await;
            let state = &mut *guard;

            let existing = state.ledger.get(&address);
            let trust_level = next_level(existing, outcome.checks_passed.len());
            let rate_verdict = state.limiter.check(existing, now, &self.params);
            let decision = decide(&outcome, trust_level, &rate_verdict, &self.params);

            if decision.eligible {
                state.ledger.record_verification(
                    &address,
                    evidence.repo.as_deref(),
                    evidence.name.as_deref(),
                    trust_level,
                    now,
                );
                state.limiter.increment();
            }

            (trust_level, decision)
        };

        let Decision {
            eligible,
            reward,
            reason,
        } = decision;

        tracing::info!(
            %address,
            level = %trust_level,
            eligible,
            passed = outcome.checks_passed.len(),
            "verification complete"
        );

        VerificationResult {
            address,
            checks_passed: outcome.checks_passed,
            checks_failed: outcome.checks_failed,
            trust_level,
            eligible,
            reward,
            reason,
        }
    }

    /// Report a completed disbursement back into the agent's totals.
    pub async fn credit_airdrop(
        &self,
        address: &AgentAddress,
        amounts: RewardAmounts,
    ) -> Result<(), TrustError> {
        let mut guard = self.state.lock().await;
        guard.ledger.credit_airdrop(address, amounts)
    }

    /// Aggregate statistics against the wall clock.
    pub async fn stats(&self) -> EngineStats {
        self.stats_at(Timestamp::now()).await
    }

    /// Aggregate statistics at an explicit instant.
    ///
    /// Read-only: an elapsed daily window is reported as zero without
    /// mutating the limiter.
    pub async fn stats_at(&self, now: Timestamp) -> EngineStats {
        let guard = self.state.lock().await;
        let window_elapsed =
            guard.limiter.window_start().elapsed_since(now) > self.params.daily_window_secs;
        let daily = if window_elapsed {
            0
        } else {
            guard.limiter.daily_count()
        };
        EngineStats::from_parts(
            guard.ledger.level_histogram(),
            guard.ledger.len(),
            daily,
            self.params.max_airdrops_per_day,
        )
    }

    /// Serialized ledger snapshot for persistence.
    pub async fn ledger_snapshot(&self) -> Vec<u8> {
        let guard = self.state.lock().await;
        guard.ledger.to_bytes()
    }
}
