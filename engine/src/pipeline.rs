//! The verification pipeline — runs the check table against the oracles.
//!
//! Fail-open pipeline, fail-closed checks: an oracle error or timeout
//! downgrades exactly that check to failed and the pipeline carries on.
//! Only the two terminal checks (format, stake) stop execution early.
//!
//! The pipeline holds no locks and touches no shared state; every request
//! is independent. Callers may drop the returned future to cancel
//! in-flight oracle calls.

use crate::checks::{CheckId, PIPELINE_CHECKS};
use drip_oracles::{BalanceOracle, EndpointOracle, Liveness, NameOracle, OracleError, RepoOracle};
use drip_types::{AgentAddress, EngineParams, Evidence};
use drip_utils::format_stx;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

/// The four oracle collaborators, injected as trait objects.
pub struct OracleSet {
    pub balance: Arc<dyn BalanceOracle>,
    pub repo: Arc<dyn RepoOracle>,
    pub endpoint: Arc<dyn EndpointOracle>,
    pub name: Arc<dyn NameOracle>,
}

/// What the pipeline observed for one request.
#[derive(Clone, Debug, Default)]
pub struct PipelineOutcome {
    /// Pass names, in pipeline order.
    pub checks_passed: Vec<&'static str>,
    /// Failure names, in pipeline order.
    pub checks_failed: Vec<&'static str>,
    /// Set when a terminal check failed; carries the reason text.
    pub terminal_failure: Option<String>,
}

impl PipelineOutcome {
    /// Whether the anti-Sybil stake check passed.
    pub fn stake_passed(&self) -> bool {
        self.checks_passed.contains(&crate::checks::STAKE_PASS)
    }
}

/// Bound an oracle call by the configured timeout.
///
/// A timed-out call is indistinguishable from an unreachable oracle —
/// both downgrade the check, neither aborts the pipeline.
async fn bounded<T>(
    timeout_secs: u64,
    call: impl Future<Output = Result<T, OracleError>>,
) -> Result<T, OracleError> {
    match tokio::time::timeout(Duration::from_secs(timeout_secs), call).await {
        Ok(result) => result,
        Err(_elapsed) => Err(OracleError::Unreachable("oracle call timed out".into())),
    }
}

/// Execute the check table for one request.
pub async fn run(
    oracles: &OracleSet,
    params: &EngineParams,
    address: &AgentAddress,
    evidence: &Evidence,
) -> PipelineOutcome {
    let mut outcome = PipelineOutcome::default();
    let timeout = params.oracle_timeout_secs;

    for spec in &PIPELINE_CHECKS {
        // None = check skipped (evidence not supplied).
        let verdict: Option<bool> = match spec.id {
            CheckId::Format => Some(address.is_valid()),
            CheckId::Stake => {
                let balance = match bounded(timeout, oracles.balance.balance_ustx(address)).await
                {
                    Ok(balance) => balance,
                    Err(e) => {
                        tracing::warn!(%address, error = %e, "balance oracle unavailable");
                        0
                    }
                };
                Some(balance >= params.min_balance_ustx)
            }
            CheckId::RepoConfig => match evidence.repo.as_deref() {
                None => None,
                Some(repo) => Some(
                    match bounded(timeout, oracles.repo.has_expected_config(repo)).await {
                        Ok(has_config) => has_config,
                        Err(e) => {
                            tracing::warn!(%address, repo, error = %e, "repo oracle unavailable");
                            false
                        }
                    },
                ),
            },
            CheckId::EndpointLive => match evidence.endpoint.as_deref() {
                None => None,
                Some(endpoint) => Some(
                    match bounded(timeout, oracles.endpoint.probe(endpoint)).await {
                        Ok(Liveness::Alive) => true,
                        Ok(Liveness::Failed) => false,
                        Err(e) => {
                            tracing::warn!(%address, endpoint, error = %e, "endpoint oracle unavailable");
                            false
                        }
                    },
                ),
            },
            CheckId::NameOwned => match evidence.name.as_deref() {
                None => None,
                Some(name) => Some(
                    match bounded(timeout, oracles.name.owned_by(name, address)).await {
                        Ok(owned) => owned,
                        Err(e) => {
                            tracing::warn!(%address, name, error = %e, "name oracle unavailable");
                            false
                        }
                    },
                ),
            },
        };

        match verdict {
            None => continue,
            Some(true) => outcome.checks_passed.push(spec.pass_name),
            Some(false) => {
                if let Some(fail_name) = spec.fail_name {
                    outcome.checks_failed.push(fail_name);
                }
                if spec.terminal {
                    outcome.terminal_failure = Some(terminal_reason(spec.id, params));
                    break;
                }
            }
        }
    }

    outcome
}

fn terminal_reason(id: CheckId, params: &EngineParams) -> String {
    match id {
        CheckId::Format => "invalid address format".into(),
        CheckId::Stake => format!("need at least {}", format_stx(params.min_balance_ustx)),
        _ => "check failed".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use drip_nullables::{NullBalanceOracle, NullEndpointOracle, NullNameOracle, NullRepoOracle};

    const GOOD_ADDRESS: &str = "SP3N0NQ47ABAZV68PQSJY7V2H4F2J709ATTESYBRD";

    fn oracles(balance: NullBalanceOracle) -> OracleSet {
        OracleSet {
            balance: Arc::new(balance),
            repo: Arc::new(NullRepoOracle::with_config(true)),
            endpoint: Arc::new(NullEndpointOracle::alive()),
            name: Arc::new(NullNameOracle::owned(true)),
        }
    }

    #[tokio::test]
    async fn invalid_address_short_circuits_before_any_oracle() {
        let balance = Arc::new(NullBalanceOracle::with_balance(1_000_000));
        let set = OracleSet {
            balance: balance.clone(),
            repo: Arc::new(NullRepoOracle::with_config(true)),
            endpoint: Arc::new(NullEndpointOracle::alive()),
            name: Arc::new(NullNameOracle::owned(true)),
        };
        let params = EngineParams::default();

        let outcome = run(
            &set,
            &params,
            &AgentAddress::new("bogus"),
            &Evidence::none().with_repo("owner/repo"),
        )
        .await;

        assert_eq!(outcome.checks_passed, Vec::<&str>::new());
        assert_eq!(outcome.checks_failed, vec!["invalid_address"]);
        assert!(outcome.terminal_failure.is_some());
        assert_eq!(balance.call_count(), 0);
    }

    #[tokio::test]
    async fn insufficient_balance_is_terminal() {
        let set = oracles(NullBalanceOracle::with_balance(99_999));
        let params = EngineParams::default();

        let outcome = run(
            &set,
            &params,
            &AgentAddress::new(GOOD_ADDRESS),
            &Evidence::none().with_repo("owner/repo"),
        )
        .await;

        assert_eq!(outcome.checks_passed, vec!["valid_address"]);
        assert_eq!(outcome.checks_failed, vec!["insufficient_balance"]);
        assert_eq!(
            outcome.terminal_failure.as_deref(),
            Some("need at least 0.1 STX")
        );
    }

    #[tokio::test]
    async fn balance_exactly_at_minimum_passes() {
        let set = oracles(NullBalanceOracle::with_balance(100_000));
        let params = EngineParams::default();

        let outcome = run(
            &set,
            &params,
            &AgentAddress::new(GOOD_ADDRESS),
            &Evidence::none(),
        )
        .await;

        assert_eq!(outcome.checks_passed, vec!["valid_address", "min_balance"]);
        assert!(outcome.terminal_failure.is_none());
    }

    #[tokio::test]
    async fn all_evidence_passing_records_five_checks() {
        let set = oracles(NullBalanceOracle::with_balance(1_000_000));
        let params = EngineParams::default();

        let outcome = run(
            &set,
            &params,
            &AgentAddress::new(GOOD_ADDRESS),
            &Evidence::none()
                .with_repo("owner/repo")
                .with_endpoint("https://agent.example.com")
                .with_name("agent.btc"),
        )
        .await;

        assert_eq!(
            outcome.checks_passed,
            vec![
                "valid_address",
                "min_balance",
                "repo_config",
                "endpoint_alive",
                "name_owned"
            ]
        );
        assert!(outcome.checks_failed.is_empty());
    }

    #[tokio::test]
    async fn missing_evidence_skips_optional_checks() {
        let set = oracles(NullBalanceOracle::with_balance(1_000_000));
        let params = EngineParams::default();

        let outcome = run(
            &set,
            &params,
            &AgentAddress::new(GOOD_ADDRESS),
            &Evidence::none(),
        )
        .await;

        assert_eq!(outcome.checks_passed, vec!["valid_address", "min_balance"]);
        assert!(outcome.checks_failed.is_empty());
    }

    #[tokio::test]
    async fn repo_oracle_outage_downgrades_only_that_check() {
        let set = OracleSet {
            balance: Arc::new(NullBalanceOracle::with_balance(1_000_000)),
            repo: Arc::new(NullRepoOracle::down()),
            endpoint: Arc::new(NullEndpointOracle::alive()),
            name: Arc::new(NullNameOracle::owned(true)),
        };
        let params = EngineParams::default();

        let outcome = run(
            &set,
            &params,
            &AgentAddress::new(GOOD_ADDRESS),
            &Evidence::none()
                .with_repo("owner/repo")
                .with_endpoint("https://agent.example.com")
                .with_name("agent.btc"),
        )
        .await;

        assert_eq!(
            outcome.checks_passed,
            vec!["valid_address", "min_balance", "endpoint_alive", "name_owned"]
        );
        assert_eq!(outcome.checks_failed, vec!["repo_config_missing"]);
    }

    #[tokio::test]
    async fn balance_oracle_outage_reads_as_zero_balance() {
        let set = oracles(NullBalanceOracle::down());
        let params = EngineParams::default();

        let outcome = run(
            &set,
            &params,
            &AgentAddress::new(GOOD_ADDRESS),
            &Evidence::none(),
        )
        .await;

        assert_eq!(outcome.checks_failed, vec!["insufficient_balance"]);
        assert!(outcome.terminal_failure.is_some());
    }

    #[tokio::test]
    async fn slow_balance_oracle_times_out_to_failure() {
        let balance = NullBalanceOracle::with_balance(1_000_000);
        balance.set_delay(Duration::from_millis(200));
        let set = oracles(balance);
        let mut params = EngineParams::default();
        params.oracle_timeout_secs = 0;

        let outcome = run(
            &set,
            &params,
            &AgentAddress::new(GOOD_ADDRESS),
            &Evidence::none(),
        )
        .await;

        assert_eq!(outcome.checks_failed, vec!["insufficient_balance"]);
    }

    #[tokio::test]
    async fn dead_endpoint_records_failure_but_continues() {
        let set = OracleSet {
            balance: Arc::new(NullBalanceOracle::with_balance(1_000_000)),
            repo: Arc::new(NullRepoOracle::with_config(true)),
            endpoint: Arc::new(NullEndpointOracle::dead()),
            name: Arc::new(NullNameOracle::owned(true)),
        };
        let params = EngineParams::default();

        let outcome = run(
            &set,
            &params,
            &AgentAddress::new(GOOD_ADDRESS),
            &Evidence::none()
                .with_repo("owner/repo")
                .with_endpoint("https://agent.example.com")
                .with_name("agent.btc"),
        )
        .await;

        assert_eq!(outcome.checks_failed, vec!["endpoint_down"]);
        assert!(outcome.checks_passed.contains(&"name_owned"));
    }

    #[tokio::test]
    async fn unowned_name_records_nothing() {
        let set = OracleSet {
            balance: Arc::new(NullBalanceOracle::with_balance(1_000_000)),
            repo: Arc::new(NullRepoOracle::with_config(true)),
            endpoint: Arc::new(NullEndpointOracle::alive()),
            name: Arc::new(NullNameOracle::owned(false)),
        };
        let params = EngineParams::default();

        let outcome = run(
            &set,
            &params,
            &AgentAddress::new(GOOD_ADDRESS),
            &Evidence::none().with_name("agent.btc"),
        )
        .await;

        assert!(!outcome.checks_passed.contains(&"name_owned"));
        assert!(outcome.checks_failed.is_empty());
    }
}
