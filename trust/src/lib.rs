//! Trust ledger — the persistent, per-agent side of the DRIP engine.
//!
//! A [`TrustRecord`] exists if and only if the agent has passed eligibility
//! at least once. Records are created on first success, mutated on every
//! subsequent one, and never deleted. The trust-level progression itself is
//! the pure function [`next_level`] — history in, level out, no side effects.

pub mod error;
pub mod ledger;
pub mod level_rule;
pub mod record;

pub use error::TrustError;
pub use ledger::TrustLedger;
pub use level_rule::next_level;
pub use record::TrustRecord;
