//! Signal oracles — external fact-sources queried by the verification pipeline.
//!
//! Each oracle answers one boolean/numeric question about an identity:
//! - [`BalanceOracle`]: how much STX does this address hold?
//! - [`RepoOracle`]: does this repository contain the expected agent config?
//! - [`EndpointOracle`]: is this endpoint alive?
//! - [`NameOracle`]: does this address own this registered name?
//!
//! The traits are the seam between the decision engine and the outside
//! world. The HTTP implementations here are production collaborators; the
//! `drip-nullables` crate provides deterministic doubles for tests.

pub mod error;
pub mod http;
pub mod traits;

pub use error::OracleError;
pub use http::{
    EndpointProber, GithubRepoOracle, StacksApiOracle, DEFAULT_API_URL, DEFAULT_RAW_CONTENT_URL,
};
pub use traits::{BalanceOracle, EndpointOracle, Liveness, NameOracle, RepoOracle};
