use proptest::prelude::*;

use drip_types::{AgentAddress, EngineParams, RewardAmounts, Timestamp, TrustLevel};

proptest! {
    /// Address validity requires an SP/ST prefix; any other prefix fails.
    #[test]
    fn address_without_known_prefix_is_invalid(s in "[A-RU-Za-z0-9]{30,60}") {
        let addr = AgentAddress::new(s);
        prop_assert!(!addr.is_valid());
    }

    /// SP-prefixed addresses of sufficient length are always valid.
    #[test]
    fn long_sp_address_is_valid(tail in "[A-Z0-9]{28,60}") {
        let addr = AgentAddress::new(format!("SP{tail}"));
        prop_assert!(addr.is_valid());
    }

    /// Addresses shorter than the minimum length are never valid.
    #[test]
    fn short_address_is_invalid(tail in "[A-Z0-9]{0,27}") {
        let addr = AgentAddress::new(format!("SP{tail}"));
        prop_assert!(!addr.is_valid());
    }

    /// Timestamp ordering agrees with the underlying seconds.
    #[test]
    fn timestamp_ordering(a in 0u64..u64::MAX, b in 0u64..u64::MAX) {
        let ta = Timestamp::new(a);
        let tb = Timestamp::new(b);
        prop_assert_eq!(ta <= tb, a <= b);
        prop_assert_eq!(ta == tb, a == b);
    }

    /// elapsed_since(now) = now - self, saturating at zero.
    #[test]
    fn timestamp_elapsed_since(base in 0u64..1_000_000, offset in 0u64..1_000_000) {
        let t = Timestamp::new(base);
        let now = Timestamp::new(base + offset);
        prop_assert_eq!(t.elapsed_since(now), offset);
    }

    /// has_expired agrees with saturating elapsed-time arithmetic.
    #[test]
    fn timestamp_has_expired(base in 0u64..1_000_000, dur in 0u64..1_000_000, now in 0u64..3_000_000) {
        let t = Timestamp::new(base);
        prop_assert_eq!(t.has_expired(dur, Timestamp::new(now)), now.saturating_sub(base) >= dur);
    }

    /// Reward accumulation never loses the other unit.
    #[test]
    fn reward_accumulate_units_independent(a in 0u64..1u64 << 40, b in 0u64..1u64 << 40,
                                           c in 0u64..1u64 << 40, d in 0u64..1u64 << 40) {
        let mut total = RewardAmounts::new(a, b);
        total.accumulate(RewardAmounts::new(c, d));
        prop_assert_eq!(total.sats, a + c);
        prop_assert_eq!(total.ustx, b + d);
    }

    /// TrustRecord-facing types survive bincode round-trips.
    #[test]
    fn reward_bincode_roundtrip(sats in any::<u64>(), ustx in any::<u64>()) {
        let amounts = RewardAmounts::new(sats, ustx);
        let encoded = bincode::serialize(&amounts).unwrap();
        let decoded: RewardAmounts = bincode::deserialize(&encoded).unwrap();
        prop_assert_eq!(decoded, amounts);
    }
}

#[test]
fn reward_table_is_strictly_monotonic() {
    let params = EngineParams::default();
    assert!(params.reward_for(TrustLevel::Unknown).is_zero());
    assert!(params.reward_for(TrustLevel::Pending).is_zero());

    let mut prev = params.reward_for(TrustLevel::Basic);
    assert!(!prev.is_zero());
    for level in [TrustLevel::Trusted, TrustLevel::Established] {
        let cur = params.reward_for(level);
        assert!(cur.sats > prev.sats);
        assert!(cur.ustx > prev.ustx);
        prev = cur;
    }
}
