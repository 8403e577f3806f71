use anyhow::{Context, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::{fs, path::Path};

/// Deployment defaults: the BTWTY.EOS / XBTSX.WRAM bridge pool.
pub const DEFAULT_POOL_ID: &str = "1.19.507";

pub const DEFAULT_ENDPOINTS: [&str; 3] = [
    "https://api.bts.mobi",
    "https://api.dex.trading",
    "https://dexnode.net",
];

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NodeCfg {
    /// Ordered endpoint base URLs, tried first to last.
    pub endpoints: Vec<String>,
    pub timeout_secs: u64,
}

impl Default for NodeCfg {
    fn default() -> Self {
        Self {
            endpoints: DEFAULT_ENDPOINTS.iter().map(|s| s.to_string()).collect(),
            timeout_secs: 15,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct PoolCfg {
    pub id: String,
}

impl Default for PoolCfg {
    fn default() -> Self {
        Self {
            id: DEFAULT_POOL_ID.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssetCfg {
    pub id: String,
    pub symbol: String,
    /// Decimal places converting base units into a display amount. Must
    /// match the on-chain asset precision; a mismatch skews every rate by
    /// a power of ten and cannot be detected here.
    pub precision: u32,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AssetsCfg {
    pub a: AssetCfg,
    pub b: AssetCfg,
}

impl Default for AssetsCfg {
    fn default() -> Self {
        Self {
            a: AssetCfg {
                id: "1.3.6268".to_string(),
                symbol: "BTWTY.EOS".to_string(),
                precision: 4,
            },
            b: AssetCfg {
                id: "1.3.6574".to_string(),
                symbol: "XBTSX.WRAM".to_string(),
                precision: 2,
            },
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BridgeCfg {
    /// Multiplier applied to the spot rate; 0.975 keeps a 2.5% fee.
    pub fee_multiplier: Decimal,
}

impl Default for BridgeCfg {
    fn default() -> Self {
        Self {
            fee_multiplier: Decimal::new(975, 3),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub node: NodeCfg,
    pub pool: PoolCfg,
    pub assets: AssetsCfg,
    pub bridge: BridgeCfg,
}

impl Config {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let s = fs::read_to_string(path.as_ref())
            .with_context(|| format!("read {}", path.as_ref().display()))?;
        let cfg: Self = toml::from_str(&s).context("parse config")?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_bind_documented_deployment() {
        let cfg = Config::default();
        assert_eq!(cfg.pool.id, "1.19.507");
        assert_eq!(cfg.node.endpoints.len(), 3);
        assert_eq!(cfg.node.endpoints[0], "https://api.bts.mobi");
        assert_eq!(cfg.node.timeout_secs, 15);
        assert_eq!(cfg.assets.a.id, "1.3.6268");
        assert_eq!(cfg.assets.a.precision, 4);
        assert_eq!(cfg.assets.b.id, "1.3.6574");
        assert_eq!(cfg.assets.b.precision, 2);
        assert_eq!(cfg.bridge.fee_multiplier, Decimal::new(975, 3));
    }

    #[test]
    fn test_partial_file_falls_back_to_defaults() {
        let cfg: Config = toml::from_str(
            r#"
            [pool]
            id = "1.19.43"

            [node]
            endpoints = ["https://node.example"]
            "#,
        )
        .unwrap();

        assert_eq!(cfg.pool.id, "1.19.43");
        assert_eq!(cfg.node.endpoints, vec!["https://node.example"]);
        // untouched sections keep their defaults
        assert_eq!(cfg.node.timeout_secs, 15);
        assert_eq!(cfg.assets.a.symbol, "BTWTY.EOS");
        assert_eq!(cfg.bridge.fee_multiplier, Decimal::new(975, 3));
    }

    #[test]
    fn test_asset_overrides_parse() {
        let cfg: Config = toml::from_str(
            r#"
            [assets.a]
            id = "1.3.0"
            symbol = "BTS"
            precision = 5

            [assets.b]
            id = "1.3.121"
            symbol = "USD"
            precision = 4
            "#,
        )
        .unwrap();

        assert_eq!(cfg.assets.a.symbol, "BTS");
        assert_eq!(cfg.assets.a.precision, 5);
        assert_eq!(cfg.assets.b.precision, 4);
    }
}
