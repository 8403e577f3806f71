use anyhow::Result;
use clap::Parser;
use rust_decimal::Decimal;

use poolbridge::app::{self, RunOpts};
use poolbridge::config::Config;

#[derive(Parser, Debug)]
#[command(version, about = "Liquidity pool exchange rate and bridge quote CLI for BitShares pools")]
struct Args {
    /// Path to config file (optional)
    #[arg(long)]
    config: Option<String>,

    /// Pool object id to query (overrides config)
    #[arg(long)]
    pool_id: Option<String>,

    /// Endpoint base URL, repeatable; replaces the configured list
    #[arg(long = "endpoint")]
    endpoints: Vec<String>,

    /// Per-endpoint request timeout in seconds
    #[arg(long)]
    timeout_secs: Option<u64>,

    /// Asset symbol to exchange (skips the prompt)
    #[arg(long)]
    asset: Option<String>,

    /// Amount to exchange (skips the prompt)
    #[arg(long)]
    amount: Option<Decimal>,

    /// Print only the A -> B spot rate and exit
    #[arg(long)]
    rate_only: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let mut cfg = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };

    // CLI args > config file > defaults
    if let Some(pool_id) = args.pool_id {
        cfg.pool.id = pool_id;
    }
    if !args.endpoints.is_empty() {
        cfg.node.endpoints = args.endpoints;
    }
    if let Some(timeout_secs) = args.timeout_secs {
        cfg.node.timeout_secs = timeout_secs;
    }

    app::run(
        cfg,
        RunOpts {
            rate_only: args.rate_only,
            asset: args.asset,
            amount: args.amount,
        },
    )
    .await
}
