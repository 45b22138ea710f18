//! HTTP-backed oracle implementations.
//!
//! Three clients cover the four oracle interfaces:
//! - [`StacksApiOracle`] — balance + name ownership against a Stacks API node
//! - [`GithubRepoOracle`] — raw-content scan for agent config markers
//! - [`EndpointProber`] — lightweight liveness probe
//!
//! All clients carry request and connect timeouts; the pipeline adds its own
//! outer timeout on top, so a hung oracle can never stall a verification.

use crate::error::OracleError;
use crate::traits::{BalanceOracle, EndpointOracle, Liveness, NameOracle, RepoOracle};
use async_trait::async_trait;
use drip_types::AgentAddress;
use serde::Deserialize;
use std::time::Duration;

/// Default timeout for oracle HTTP requests.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Default connection timeout.
const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Default Stacks API base URL.
pub const DEFAULT_API_URL: &str = "https://api.hiro.so";

/// Default base URL for raw repository content.
pub const DEFAULT_RAW_CONTENT_URL: &str = "https://raw.githubusercontent.com";

/// Config marker looked for inside `package.json`.
const PACKAGE_MARKER: &str = "mcp";

/// Well-known config paths whose mere presence passes the repo check.
const CONFIG_PATHS: &[&str] = &["mcp.json", ".mcp/config.json", "claude.json"];

fn build_client(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .connect_timeout(DEFAULT_CONNECT_TIMEOUT)
        .build()
        .unwrap_or_default()
}

fn map_send_error(e: reqwest::Error) -> OracleError {
    if e.is_timeout() {
        OracleError::Unreachable(format!("request timed out: {e}"))
    } else if e.is_connect() {
        OracleError::Unreachable(format!("connection failed: {e}"))
    } else {
        OracleError::RequestFailed(e.to_string())
    }
}

// ---------------------------------------------------------------------------
// StacksApiOracle
// ---------------------------------------------------------------------------

/// Client for a Stacks API node — answers balance and name-ownership queries.
pub struct StacksApiOracle {
    http_client: reqwest::Client,
    base_url: String,
}

/// Raw JSON shape of `GET /extended/v1/address/{addr}/balances`.
/// Only the STX stanza is of interest.
#[derive(Debug, Deserialize)]
struct BalancesResponse {
    stx: StxBalance,
}

#[derive(Debug, Deserialize)]
struct StxBalance {
    /// The API returns the balance as a decimal string.
    balance: String,
}

/// Raw JSON shape of `GET /v1/names/{name}`.
#[derive(Debug, Deserialize)]
struct NameResponse {
    #[serde(default)]
    address: Option<String>,
}

impl StacksApiOracle {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http_client: build_client(DEFAULT_TIMEOUT),
            base_url: base_url.into(),
        }
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            http_client: build_client(timeout),
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }
}

impl Default for StacksApiOracle {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}

#[async_trait]
impl BalanceOracle for StacksApiOracle {
    /// `GET {base}/extended/v1/address/{address}/balances` -> microSTX.
    async fn balance_ustx(&self, address: &AgentAddress) -> Result<u64, OracleError> {
        let url = self.url(&format!("/extended/v1/address/{}/balances", address));

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(map_send_error)?;

        if !response.status().is_success() {
            return Err(OracleError::RequestFailed(format!(
                "HTTP status {}",
                response.status()
            )));
        }

        let balances: BalancesResponse = response.json().await.map_err(|e| {
            OracleError::InvalidResponse(format!("failed to parse balances response: {e}"))
        })?;

        balances.stx.balance.parse::<u64>().map_err(|e| {
            OracleError::InvalidResponse(format!(
                "balance {:?} is not an integer: {e}",
                balances.stx.balance
            ))
        })
    }
}

#[async_trait]
impl NameOracle for StacksApiOracle {
    /// `GET {base}/v1/names/{name}` -> owner address comparison.
    async fn owned_by(&self, name: &str, address: &AgentAddress) -> Result<bool, OracleError> {
        let url = self.url(&format!("/v1/names/{name}"));

        let response = self
            .http_client
            .get(&url)
            .send()
            .await
            .map_err(map_send_error)?;

        // An unregistered name is a definitive "not owned", not an error.
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(false);
        }
        if !response.status().is_success() {
            return Err(OracleError::RequestFailed(format!(
                "HTTP status {}",
                response.status()
            )));
        }

        let name_info: NameResponse = response.json().await.map_err(|e| {
            OracleError::InvalidResponse(format!("failed to parse name response: {e}"))
        })?;

        Ok(name_info.address.as_deref() == Some(address.as_str()))
    }
}

// ---------------------------------------------------------------------------
// GithubRepoOracle
// ---------------------------------------------------------------------------

/// Scans a repository's raw content for expected agent configuration.
///
/// Passes if `package.json` mentions the MCP marker, or if any well-known
/// config path exists on the default branch.
pub struct GithubRepoOracle {
    http_client: reqwest::Client,
    raw_base_url: String,
}

impl GithubRepoOracle {
    pub fn new(raw_base_url: impl Into<String>) -> Self {
        Self {
            http_client: build_client(DEFAULT_TIMEOUT),
            raw_base_url: raw_base_url.into(),
        }
    }

    fn raw_url(&self, repo: &str, path: &str) -> String {
        format!(
            "{}/{}/main/{}",
            self.raw_base_url.trim_end_matches('/'),
            repo.trim_matches('/'),
            path
        )
    }

    /// Fetch one raw file; `Ok(None)` means the file does not exist.
    async fn fetch_raw(&self, repo: &str, path: &str) -> Result<Option<String>, OracleError> {
        let response = self
            .http_client
            .get(self.raw_url(repo, path))
            .send()
            .await
            .map_err(map_send_error)?;

        if !response.status().is_success() {
            return Ok(None);
        }
        let body = response
            .text()
            .await
            .map_err(|e| OracleError::InvalidResponse(format!("failed to read body: {e}")))?;
        Ok(Some(body))
    }
}

impl Default for GithubRepoOracle {
    fn default() -> Self {
        Self::new(DEFAULT_RAW_CONTENT_URL)
    }
}

#[async_trait]
impl RepoOracle for GithubRepoOracle {
    async fn has_expected_config(&self, repo: &str) -> Result<bool, OracleError> {
        if let Some(package_json) = self.fetch_raw(repo, "package.json").await? {
            if package_json.to_lowercase().contains(PACKAGE_MARKER) {
                return Ok(true);
            }
        }

        for path in CONFIG_PATHS {
            if self.fetch_raw(repo, path).await?.is_some() {
                return Ok(true);
            }
        }

        Ok(false)
    }
}

// ---------------------------------------------------------------------------
// EndpointProber
// ---------------------------------------------------------------------------

/// Lightweight liveness probe for agent endpoints.
///
/// Sends a `POST {endpoint}` ping. Per the oracle contract, any HTTP-level
/// response — error statuses included — counts as alive; only a connection
/// failure or timeout counts as [`Liveness::Failed`].
pub struct EndpointProber {
    http_client: reqwest::Client,
}

impl EndpointProber {
    pub fn new() -> Self {
        Self {
            http_client: build_client(DEFAULT_TIMEOUT),
        }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            http_client: build_client(timeout),
        }
    }
}

impl Default for EndpointProber {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EndpointOracle for EndpointProber {
    async fn probe(&self, endpoint: &str) -> Result<Liveness, OracleError> {
        let result = self
            .http_client
            .post(endpoint)
            .json(&serde_json::json!({ "method": "ping", "params": {} }))
            .send()
            .await;

        match result {
            Ok(_response) => Ok(Liveness::Alive),
            Err(e) if e.is_timeout() || e.is_connect() => {
                tracing::debug!(endpoint, error = %e, "endpoint probe failed");
                Ok(Liveness::Failed)
            }
            Err(e) => Err(OracleError::RequestFailed(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_oracle_url_joining_strips_trailing_slash() {
        let oracle = StacksApiOracle::new("https://api.example.com/");
        assert_eq!(
            oracle.url("/v1/names/agent.btc"),
            "https://api.example.com/v1/names/agent.btc"
        );
    }

    #[test]
    fn repo_oracle_raw_url_shape() {
        let oracle = GithubRepoOracle::new("https://raw.example.com");
        assert_eq!(
            oracle.raw_url("owner/repo", "package.json"),
            "https://raw.example.com/owner/repo/main/package.json"
        );
    }

    #[test]
    fn repo_scan_covers_all_well_known_config_paths() {
        assert_eq!(
            CONFIG_PATHS,
            &["mcp.json", ".mcp/config.json", "claude.json"]
        );
    }

    #[test]
    fn prober_creation_does_not_panic() {
        let prober = EndpointProber::with_timeout(Duration::from_secs(2));
        drop(prober);
    }
}
