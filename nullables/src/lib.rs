//! Nullable infrastructure for deterministic testing.
//!
//! Real collaborators do I/O; these record calls and return scripted
//! answers instead, so every engine behavior — oracle outages and slow
//! responses included — can be tested without a network.

pub mod oracles;

pub use oracles::{NullBalanceOracle, NullEndpointOracle, NullNameOracle, NullRepoOracle};
