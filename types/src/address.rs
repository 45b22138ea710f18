//! Agent address type with `SP`/`ST` network prefixes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// An agent's Stacks-style address, prefixed `SP` (mainnet) or `ST` (testnet).
///
/// The address is treated as an opaque identity key. Construction never
/// fails: format validity is a verification check, not a type invariant,
/// so untrusted input can be carried around and rejected by the pipeline.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AgentAddress(String);

impl AgentAddress {
    /// Mainnet address prefix.
    pub const MAINNET_PREFIX: &'static str = "SP";

    /// Testnet address prefix.
    pub const TESTNET_PREFIX: &'static str = "ST";

    /// Minimum length of a well-formed address.
    pub const MIN_LEN: usize = 30;

    /// Wrap a raw string as an agent address. No validation is performed.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Validate that this address is well-formed.
    ///
    /// Only the network prefix and a minimum length are checked. The
    /// character set is deliberately not validated — that is the job of
    /// whatever eventually pays out to the address.
    pub fn is_valid(&self) -> bool {
        (self.0.starts_with(Self::MAINNET_PREFIX) || self.0.starts_with(Self::TESTNET_PREFIX))
            && self.0.len() >= Self::MIN_LEN
    }
}

impl fmt::Display for AgentAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for AgentAddress {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<&str> for AgentAddress {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_mainnet_address() {
        let addr = AgentAddress::new("SP3N0NQ47ABAZV68PQSJY7V2H4F2J709ATTESYBRD");
        assert!(addr.is_valid());
    }

    #[test]
    fn valid_testnet_address() {
        let addr = AgentAddress::new("ST1PQHQKV0RJXZFY1DGX8MNSNYVE3VGZJSRTPGZGM");
        assert!(addr.is_valid());
    }

    #[test]
    fn short_address_is_invalid() {
        assert!(!AgentAddress::new("SP123").is_valid());
    }

    #[test]
    fn wrong_prefix_is_invalid() {
        assert!(!AgentAddress::new("0x1234567890abcdef1234567890abcdef").is_valid());
    }

    #[test]
    fn empty_address_is_invalid() {
        assert!(!AgentAddress::new("").is_valid());
    }
}
