// src/report.rs
use rust_decimal::Decimal;
use serde::Serialize;

use crate::bridge::BridgeQuote;
use crate::config::Config;
use crate::fetcher::PoolRecord;
use crate::rates::PoolRates;

/// Everything the console report shows for one pool snapshot.
#[derive(Debug, Serialize)]
pub struct PoolReport {
    pub pool_id: String,
    pub asset_a_id: Option<String>,
    pub asset_b_id: Option<String>,
    pub raw_balance_a: String,
    pub raw_balance_b: String,
    pub amount_a: Decimal,
    pub amount_b: Decimal,
    pub rate_a_to_b: Decimal,
    pub rate_b_to_a: Decimal,
    pub constant_product: Decimal,
    /// Taker fee as a percentage, when the pool carries one.
    pub taker_fee_percent: Option<Decimal>,
}

impl PoolReport {
    pub fn new(cfg: &Config, record: &PoolRecord, rates: &PoolRates) -> Self {
        Self {
            pool_id: cfg.pool.id.clone(),
            asset_a_id: record.asset_a().map(str::to_string),
            asset_b_id: record.asset_b().map(str::to_string),
            raw_balance_a: record.balance_a(),
            raw_balance_b: record.balance_b(),
            amount_a: rates.amount_a,
            amount_b: rates.amount_b,
            rate_a_to_b: rates.rate_a_to_b,
            rate_b_to_a: rates.rate_b_to_a,
            constant_product: rates.constant_product(),
            taker_fee_percent: record
                .taker_fee_percent()
                .map(|fee| Decimal::from(fee) / Decimal::ONE_HUNDRED),
        }
    }

    pub fn print(&self, cfg: &Config) {
        let rule = "-".repeat(50);

        println!("{rule}");
        println!("Pool: {}", self.pool_id);
        println!(
            "Asset A ({}): {}",
            cfg.assets.a.symbol,
            self.asset_a_id.as_deref().unwrap_or("?")
        );
        println!(
            "Asset B ({}): {}",
            cfg.assets.b.symbol,
            self.asset_b_id.as_deref().unwrap_or("?")
        );
        println!("Raw balance A: {}", self.raw_balance_a);
        println!("Raw balance B: {}", self.raw_balance_b);
        println!("Balance A: {}", self.amount_a);
        println!("Balance B: {}", self.amount_b);
        println!("{rule}");
        println!("EXCHANGE RATES:");
        println!(
            "{} -> {}: {}",
            cfg.assets.a.symbol,
            cfg.assets.b.symbol,
            self.rate_a_to_b.round_dp(8)
        );
        println!(
            "{} -> {}: {}",
            cfg.assets.b.symbol,
            cfg.assets.a.symbol,
            self.rate_b_to_a.round_dp(8)
        );
        if let Some(fee) = self.taker_fee_percent {
            println!("Taker fee: {fee}%");
        }
        println!("Constant product (k): {}", self.constant_product);
        println!("{rule}");
    }
}

pub fn print_bridge_quote(from_symbol: &str, to_symbol: &str, quote: &BridgeQuote) {
    println!("BRIDGE EXCHANGE:");
    println!(
        "Bridge exchange rate ({from_symbol} -> {to_symbol}): {}",
        quote.rate.round_dp(8)
    );
    println!("Exchanged amount: {} {to_symbol}", quote.output);
}
