// src/app.rs
use anyhow::{Context, Result};
use rust_decimal::Decimal;
use std::io::{self, Write};
use std::str::FromStr;
use tracing::info;

use crate::bridge::{self, Direction};
use crate::config::{AssetCfg, Config};
use crate::fetcher::PoolFetcher;
use crate::rates;
use crate::report::{self, PoolReport};

/// Per-run options resolved from CLI flags.
#[derive(Debug, Clone, Default)]
pub struct RunOpts {
    /// Print only the A -> B spot rate and exit.
    pub rate_only: bool,
    /// Asset symbol to exchange; skips the prompt when set.
    pub asset: Option<String>,
    /// Amount to exchange; skips the prompt when set.
    pub amount: Option<Decimal>,
}

pub async fn run(cfg: Config, opts: RunOpts) -> Result<()> {
    let fetcher = PoolFetcher::from_config(&cfg.node)?;

    info!("fetching pool {}", cfg.pool.id);
    let record = fetcher.fetch(&cfg.pool.id).await?;

    let rates = rates::calculate(&record, cfg.assets.a.precision, cfg.assets.b.precision)?;

    if opts.rate_only {
        println!("{}", rates.rate_a_to_b.round_dp(8));
        return Ok(());
    }

    PoolReport::new(&cfg, &record, &rates).print(&cfg);

    let symbol = match opts.asset {
        Some(symbol) => symbol,
        None => prompt(&format!(
            "Enter asset to exchange ({}/{}): ",
            cfg.assets.a.symbol, cfg.assets.b.symbol
        ))?,
    };

    // The input asset determines the direction; the other side is the
    // destination whose display precision rounds the output.
    let (direction, destination) = match resolve_direction(&symbol, &cfg) {
        Some(resolved) => resolved,
        None => {
            println!(
                "Invalid asset {:?}. Expected {} or {}.",
                symbol, cfg.assets.a.symbol, cfg.assets.b.symbol
            );
            return Ok(());
        }
    };

    let amount = match opts.amount {
        Some(amount) => amount,
        None => {
            let raw = prompt("Enter amount to exchange: ")?;
            match Decimal::from_str(&raw) {
                Ok(amount) => amount,
                Err(_) => {
                    println!("Invalid amount {raw:?}.");
                    return Ok(());
                }
            }
        }
    };

    let quote = bridge::quote(
        &rates,
        direction,
        amount,
        cfg.bridge.fee_multiplier,
        destination.precision,
    );
    report::print_bridge_quote(&symbol.to_uppercase(), &destination.symbol, &quote);

    Ok(())
}

/// Maps a user-entered symbol onto a conversion direction and its
/// destination asset. Symbols are matched case-insensitively.
fn resolve_direction<'a>(symbol: &str, cfg: &'a Config) -> Option<(Direction, &'a AssetCfg)> {
    if symbol.eq_ignore_ascii_case(&cfg.assets.a.symbol) {
        Some((Direction::AToB, &cfg.assets.b))
    } else if symbol.eq_ignore_ascii_case(&cfg.assets.b.symbol) {
        Some((Direction::BToA, &cfg.assets.a))
    } else {
        None
    }
}

fn prompt(message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush().context("flush stdout")?;
    let mut line = String::new();
    io::stdin().read_line(&mut line).context("read stdin")?;
    Ok(line.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_direction() {
        let cfg = Config::default();

        let (direction, destination) = resolve_direction("BTWTY.EOS", &cfg).unwrap();
        assert_eq!(direction, Direction::AToB);
        assert_eq!(destination.symbol, "XBTSX.WRAM");

        let (direction, destination) = resolve_direction("xbtsx.wram", &cfg).unwrap();
        assert_eq!(direction, Direction::BToA);
        assert_eq!(destination.symbol, "BTWTY.EOS");

        assert!(resolve_direction("DOGE", &cfg).is_none());
    }
}
