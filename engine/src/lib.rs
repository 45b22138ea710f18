//! The DRIP decision engine.
//!
//! One request flows: pipeline (oracle checks, no locks) → trust-level
//! computation → rate-limit gate → eligibility decision → ledger commit.
//! The last four happen inside a single critical section so two concurrent
//! requests for the same agent can never both be awarded.
//!
//! The engine only *decides* rewards; disbursement belongs to an external
//! payer, which reports completed transfers back via `credit_airdrop`.

pub mod checks;
pub mod decider;
pub mod engine;
pub mod limits;
pub mod pipeline;
pub mod result;
pub mod stats;

pub use checks::{CheckId, CheckSpec, PIPELINE_CHECKS};
pub use decider::{decide, Decision};
pub use engine::AirdropEngine;
pub use limits::{DenyReason, RateLimiter};
pub use pipeline::{OracleSet, PipelineOutcome};
pub use result::VerificationResult;
pub use stats::EngineStats;
