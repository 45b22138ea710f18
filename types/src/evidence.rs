//! Auxiliary evidence supplied alongside a verification request.

use serde::{Deserialize, Serialize};

/// Optional evidence an agent can attach to strengthen its claim.
///
/// Each field enables one optional pipeline check; a missing field simply
/// skips that check. Evidence recorded in the ledger is first-write-wins:
/// the record keeps whatever was supplied on the first successful
/// verification.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evidence {
    /// Repository reference, `owner/repo` form.
    pub repo: Option<String>,
    /// Agent endpoint URL to probe for liveness.
    pub endpoint: Option<String>,
    /// Registered name the agent claims to own.
    pub name: Option<String>,
}

impl Evidence {
    /// Evidence with no attachments.
    pub fn none() -> Self {
        Self::default()
    }

    pub fn with_repo(mut self, repo: impl Into<String>) -> Self {
        self.repo = Some(repo.into());
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}
