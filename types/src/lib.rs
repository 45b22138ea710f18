//! Fundamental types for the DRIP engine.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: agent addresses, timestamps, trust levels, reward amounts,
//! verification evidence, and engine parameters.

pub mod address;
pub mod amount;
pub mod evidence;
pub mod level;
pub mod params;
pub mod time;

pub use address::AgentAddress;
pub use amount::RewardAmounts;
pub use evidence::Evidence;
pub use level::TrustLevel;
pub use params::EngineParams;
pub use time::Timestamp;
