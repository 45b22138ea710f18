//! `drip` — verify agent identities and decide airdrop eligibility.

mod config;

use clap::Parser;
use config::DripConfig;
use drip_engine::{AirdropEngine, OracleSet};
use drip_oracles::{EndpointProber, GithubRepoOracle, StacksApiOracle};
use drip_trust::TrustLedger;
use drip_types::{AgentAddress, Evidence, Timestamp};
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "drip", about = "Agent verification and airdrop eligibility engine")]
struct Cli {
    /// Path to a TOML configuration file. Missing file or flag means
    /// built-in defaults.
    #[arg(long, env = "DRIP_CONFIG")]
    config: Option<PathBuf>,

    /// Base URL of the Stacks API (overrides the config file).
    #[arg(long, env = "DRIP_API_URL")]
    api_url: Option<String>,

    /// Trust ledger snapshot path (overrides the config file).
    #[arg(long, env = "DRIP_LEDGER_PATH")]
    ledger_path: Option<PathBuf>,

    /// Log level: "trace", "debug", "info", "warn", "error".
    #[arg(long, env = "DRIP_LOG_LEVEL")]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(clap::Subcommand)]
enum Command {
    /// Verify an agent identity and print the decision as JSON.
    Verify {
        /// The agent's Stacks address.
        address: String,

        /// GitHub repository ("owner/repo") to check for agent config.
        #[arg(long)]
        repo: Option<String>,

        /// Agent endpoint URL to probe for liveness.
        #[arg(long)]
        endpoint: Option<String>,

        /// Registered BNS name the agent claims to own.
        #[arg(long)]
        name: Option<String>,
    },

    /// Print aggregate engine statistics as JSON.
    Stats,
}

fn load_config(cli: &Cli) -> DripConfig {
    let mut config = match &cli.config {
        Some(path) => match DripConfig::from_toml_file(path) {
            Ok(config) => {
                tracing::debug!("loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("failed to load config {}: {e}, using defaults", path.display());
                DripConfig::default()
            }
        },
        None => DripConfig::default(),
    };

    if let Some(api_url) = &cli.api_url {
        config.api_url = api_url.clone();
    }
    if let Some(ledger_path) = &cli.ledger_path {
        config.ledger_path = ledger_path.clone();
    }
    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone();
    }
    config
}

fn load_ledger(config: &DripConfig) -> anyhow::Result<TrustLedger> {
    if !config.ledger_path.exists() {
        return Ok(TrustLedger::new());
    }
    let bytes = std::fs::read(&config.ledger_path)?;
    Ok(TrustLedger::from_bytes(&bytes)?)
}

fn build_engine(config: &DripConfig, ledger: TrustLedger) -> AirdropEngine {
    let stacks_api = Arc::new(StacksApiOracle::new(config.api_url.clone()));
    let oracles = OracleSet {
        balance: stacks_api.clone(),
        repo: Arc::new(GithubRepoOracle::new(config.raw_content_url.clone())),
        endpoint: Arc::new(EndpointProber::new()),
        name: stacks_api,
    };
    AirdropEngine::with_ledger(oracles, config.params.clone(), ledger, Timestamp::now())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = load_config(&cli);
    drip_utils::init_tracing_with_level(&config.log_level);

    let ledger = load_ledger(&config)?;
    let engine = build_engine(&config, ledger);

    match cli.command {
        Command::Verify {
            address,
            repo,
            endpoint,
            name,
        } => {
            let mut evidence = Evidence::none();
            if let Some(repo) = repo {
                evidence = evidence.with_repo(repo);
            }
            if let Some(endpoint) = endpoint {
                evidence = evidence.with_endpoint(endpoint);
            }
            if let Some(name) = name {
                evidence = evidence.with_name(name);
            }

            let result = engine.verify(AgentAddress::new(address), evidence).await;
            println!("{}", serde_json::to_string_pretty(&result)?);

            if result.eligible {
                std::fs::write(&config.ledger_path, engine.ledger_snapshot().await)?;
                tracing::debug!("ledger saved to {}", config.ledger_path.display());
            }
        }
        Command::Stats => {
            let stats = engine.stats().await;
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
    }

    Ok(())
}
