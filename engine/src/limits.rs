//! Anti-abuse rate limits: global daily cap, per-agent cooldown, and the
//! lifetime per-agent cap.
//!
//! The daily window resets lazily on the next check after it elapses; there
//! is no background timer. The per-agent cap never decays — an address that
//! exhausts its allotment is done for good.

use drip_trust::TrustRecord;
use drip_types::{EngineParams, Timestamp};
use drip_utils::format_duration;
use thiserror::Error;

/// Why a request was denied by the rate limiter.
///
/// The `Display` text doubles as the result's reason string, so each
/// denial cause stays distinguishable from "insufficient checks".
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DenyReason {
    #[error("daily airdrop cap reached ({cap} per day), try again later")]
    DailyCapReached { cap: u32 },

    #[error("cooldown active, try again in {}", format_duration(*remaining_secs))]
    CooldownActive { remaining_secs: u64 },

    #[error("address has exhausted its lifetime airdrop allotment ({cap})")]
    AddressExhausted { cap: u32 },
}

/// Process-wide rate limiter state.
pub struct RateLimiter {
    /// Successful verifications granted in the current window.
    daily_count: u32,
    /// When the current window opened.
    window_start: Timestamp,
}

impl RateLimiter {
    pub fn new(now: Timestamp) -> Self {
        Self {
            daily_count: 0,
            window_start: now,
        }
    }

    /// Check all rate limits for one request.
    ///
    /// Mutates only for the lazy window reset; the caller increments the
    /// counter separately, as part of the same commit that updates the
    /// ledger.
    pub fn check(
        &mut self,
        record: Option<&TrustRecord>,
        now: Timestamp,
        params: &EngineParams,
    ) -> Result<(), DenyReason> {
        // Lazy daily window reset.
        if self.window_start.elapsed_since(now) > params.daily_window_secs {
            self.daily_count = 0;
            self.window_start = now;
        }

        if self.daily_count >= params.max_airdrops_per_day {
            return Err(DenyReason::DailyCapReached {
                cap: params.max_airdrops_per_day,
            });
        }

        if let Some(record) = record {
            if !record.last_activity.has_expired(params.cooldown_secs, now) {
                let since_last = record.last_activity.elapsed_since(now);
                return Err(DenyReason::CooldownActive {
                    remaining_secs: params.cooldown_secs - since_last,
                });
            }
            if record.verification_count >= params.max_airdrops_per_address {
                return Err(DenyReason::AddressExhausted {
                    cap: params.max_airdrops_per_address,
                });
            }
        }

        Ok(())
    }

    /// Count one granted verification against the current window.
    pub fn increment(&mut self) {
        self.daily_count += 1;
    }

    pub fn daily_count(&self) -> u32 {
        self.daily_count
    }

    pub fn window_start(&self) -> Timestamp {
        self.window_start
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drip_types::{AgentAddress, TrustLevel};

    fn test_record(count: u32, last_activity: u64) -> TrustRecord {
        let mut record = TrustRecord::first_verification(
            AgentAddress::new("SP3N0NQ47ABAZV68PQSJY7V2H4F2J709ATTESYBRD"),
            None,
            None,
            TrustLevel::Basic,
            Timestamp::new(0),
        );
        record.verification_count = count;
        record.last_activity = Timestamp::new(last_activity);
        record
    }

    #[test]
    fn fresh_identity_is_allowed() {
        let mut limiter = RateLimiter::new(Timestamp::new(0));
        let params = EngineParams::default();
        assert!(limiter.check(None, Timestamp::new(100), &params).is_ok());
    }

    #[test]
    fn daily_cap_denies() {
        let mut limiter = RateLimiter::new(Timestamp::new(0));
        let params = EngineParams::default();
        for _ in 0..params.max_airdrops_per_day {
            limiter.increment();
        }
        let result = limiter.check(None, Timestamp::new(100), &params);
        assert_eq!(
            result,
            Err(DenyReason::DailyCapReached {
                cap: params.max_airdrops_per_day
            })
        );
    }

    #[test]
    fn daily_cap_resets_after_window() {
        let mut limiter = RateLimiter::new(Timestamp::new(0));
        let params = EngineParams::default();
        for _ in 0..params.max_airdrops_per_day {
            limiter.increment();
        }

        // Exactly at the window boundary: still denied (strict `>` reset).
        let at_boundary = Timestamp::new(params.daily_window_secs);
        assert!(limiter.check(None, at_boundary, &params).is_err());

        // One second past: window resets, request allowed.
        let past = Timestamp::new(params.daily_window_secs + 1);
        assert!(limiter.check(None, past, &params).is_ok());
        assert_eq!(limiter.daily_count(), 0);
        assert_eq!(limiter.window_start(), past);
    }

    #[test]
    fn cooldown_denies_with_remaining_time() {
        let mut limiter = RateLimiter::new(Timestamp::new(0));
        let params = EngineParams::default();
        let record = test_record(1, 1000);

        let now = Timestamp::new(1000 + params.cooldown_secs - 600);
        let result = limiter.check(Some(&record), now, &params);
        assert_eq!(
            result,
            Err(DenyReason::CooldownActive { remaining_secs: 600 })
        );
    }

    #[test]
    fn cooldown_elapsed_allows() {
        let mut limiter = RateLimiter::new(Timestamp::new(0));
        let params = EngineParams::default();
        let record = test_record(1, 1000);

        // One second short of the window: still denied.
        let just_before = Timestamp::new(1000 + params.cooldown_secs - 1);
        assert_eq!(
            limiter.check(Some(&record), just_before, &params),
            Err(DenyReason::CooldownActive { remaining_secs: 1 })
        );

        // Exactly at the window: allowed (inclusive expiry).
        let now = Timestamp::new(1000 + params.cooldown_secs);
        assert!(limiter.check(Some(&record), now, &params).is_ok());
    }

    #[test]
    fn exhausted_address_is_denied_forever() {
        let mut limiter = RateLimiter::new(Timestamp::new(0));
        let params = EngineParams::default();
        let record = test_record(params.max_airdrops_per_address, 1000);

        // Far beyond any cooldown — the lifetime cap still applies.
        let now = Timestamp::new(1000 + params.cooldown_secs * 1000);
        let result = limiter.check(Some(&record), now, &params);
        assert_eq!(
            result,
            Err(DenyReason::AddressExhausted {
                cap: params.max_airdrops_per_address
            })
        );
    }

    #[test]
    fn cooldown_checked_before_lifetime_cap() {
        let mut limiter = RateLimiter::new(Timestamp::new(0));
        let params = EngineParams::default();
        let record = test_record(params.max_airdrops_per_address, 1000);

        let now = Timestamp::new(1000 + 60);
        let result = limiter.check(Some(&record), now, &params);
        assert!(matches!(result, Err(DenyReason::CooldownActive { .. })));
    }

    #[test]
    fn deny_reasons_render_distinct_text() {
        let daily = DenyReason::DailyCapReached { cap: 10 }.to_string();
        let cooldown = DenyReason::CooldownActive {
            remaining_secs: 3600,
        }
        .to_string();
        let exhausted = DenyReason::AddressExhausted { cap: 5 }.to_string();

        assert!(daily.contains("daily"));
        assert!(cooldown.contains("1h"));
        assert!(exhausted.contains("lifetime"));
    }
}
