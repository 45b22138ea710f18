//! Nullable oracles — scripted answers, recorded calls, no network.

use async_trait::async_trait;
use drip_oracles::{
    BalanceOracle, EndpointOracle, Liveness, NameOracle, OracleError, RepoOracle,
};
use drip_types::AgentAddress;
use std::sync::atomic::{AtomicBool, AtomicU32, AtomicU64, Ordering};
use std::time::Duration;

fn unavailable() -> OracleError {
    OracleError::Unreachable("oracle configured unavailable".into())
}

/// A balance oracle answering with a fixed balance.
pub struct NullBalanceOracle {
    balance_ustx: AtomicU64,
    unavailable: AtomicBool,
    delay_ms: AtomicU64,
    calls: AtomicU32,
}

impl NullBalanceOracle {
    pub fn with_balance(balance_ustx: u64) -> Self {
        Self {
            balance_ustx: AtomicU64::new(balance_ustx),
            unavailable: AtomicBool::new(false),
            delay_ms: AtomicU64::new(0),
            calls: AtomicU32::new(0),
        }
    }

    /// An oracle whose every call fails with `Unreachable`.
    pub fn down() -> Self {
        let oracle = Self::with_balance(0);
        oracle.unavailable.store(true, Ordering::SeqCst);
        oracle
    }

    pub fn set_balance(&self, balance_ustx: u64) {
        self.balance_ustx.store(balance_ustx, Ordering::SeqCst);
    }

    /// Delay every answer, for exercising caller-side timeouts.
    pub fn set_delay(&self, delay: Duration) {
        self.delay_ms.store(delay.as_millis() as u64, Ordering::SeqCst);
    }

    /// How many times the oracle was queried.
    pub fn call_count(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl BalanceOracle for NullBalanceOracle {
    async fn balance_ustx(&self, _address: &AgentAddress) -> Result<u64, OracleError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let delay_ms = self.delay_ms.load(Ordering::SeqCst);
        if delay_ms > 0 {
            tokio::time::sleep(Duration::from_millis(delay_ms)).await;
        }
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(unavailable());
        }
        Ok(self.balance_ustx.load(Ordering::SeqCst))
    }
}

/// A repository oracle answering with a fixed verdict.
pub struct NullRepoOracle {
    has_config: AtomicBool,
    unavailable: AtomicBool,
    calls: AtomicU32,
}

impl NullRepoOracle {
    pub fn with_config(has_config: bool) -> Self {
        Self {
            has_config: AtomicBool::new(has_config),
            unavailable: AtomicBool::new(false),
            calls: AtomicU32::new(0),
        }
    }

    pub fn down() -> Self {
        let oracle = Self::with_config(false);
        oracle.unavailable.store(true, Ordering::SeqCst);
        oracle
    }

    pub fn call_count(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RepoOracle for NullRepoOracle {
    async fn has_expected_config(&self, _repo: &str) -> Result<bool, OracleError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(unavailable());
        }
        Ok(self.has_config.load(Ordering::SeqCst))
    }
}

/// An endpoint oracle answering with a fixed liveness verdict.
pub struct NullEndpointOracle {
    alive: AtomicBool,
    unavailable: AtomicBool,
    calls: AtomicU32,
}

impl NullEndpointOracle {
    pub fn alive() -> Self {
        Self {
            alive: AtomicBool::new(true),
            unavailable: AtomicBool::new(false),
            calls: AtomicU32::new(0),
        }
    }

    pub fn dead() -> Self {
        let oracle = Self::alive();
        oracle.alive.store(false, Ordering::SeqCst);
        oracle
    }

    pub fn down() -> Self {
        let oracle = Self::alive();
        oracle.unavailable.store(true, Ordering::SeqCst);
        oracle
    }

    pub fn call_count(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl EndpointOracle for NullEndpointOracle {
    async fn probe(&self, _endpoint: &str) -> Result<Liveness, OracleError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(unavailable());
        }
        if self.alive.load(Ordering::SeqCst) {
            Ok(Liveness::Alive)
        } else {
            Ok(Liveness::Failed)
        }
    }
}

/// A name oracle answering with a fixed ownership verdict.
pub struct NullNameOracle {
    owned: AtomicBool,
    unavailable: AtomicBool,
    calls: AtomicU32,
}

impl NullNameOracle {
    pub fn owned(owned: bool) -> Self {
        Self {
            owned: AtomicBool::new(owned),
            unavailable: AtomicBool::new(false),
            calls: AtomicU32::new(0),
        }
    }

    pub fn down() -> Self {
        let oracle = Self::owned(false);
        oracle.unavailable.store(true, Ordering::SeqCst);
        oracle
    }

    pub fn call_count(&self) -> u32 {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NameOracle for NullNameOracle {
    async fn owned_by(&self, _name: &str, _address: &AgentAddress) -> Result<bool, OracleError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(unavailable());
        }
        Ok(self.owned.load(Ordering::SeqCst))
    }
}
