//! Poolbridge - liquidity pool spot rates and fee-adjusted bridge quotes
//! over BitShares-style JSON-RPC nodes.

pub mod app;
pub mod bridge;
pub mod config;
pub mod errors;
pub mod fetcher;
pub mod rates;
pub mod report;

// Re-export main types for convenience
pub use bridge::{BridgeQuote, Direction};
pub use config::Config;
pub use errors::{EndpointError, FetchError, RateError};
pub use fetcher::{PoolFetcher, PoolRecord, PoolSource, RpcEndpoint};
pub use rates::PoolRates;
