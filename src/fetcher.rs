//! Pool fetcher: an ordered list of JSON-RPC endpoints with failover.
//!
//! Each source gets exactly one attempt per fetch. The first endpoint
//! returning a non-empty object wins; endpoint-level failures are logged
//! and the next source is tried.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};
use std::time::Duration;
use tracing::{info, warn};

use crate::config::NodeCfg;
use crate::errors::{EndpointError, FetchError};

/// Raw pool object as returned by the node. Opaque beyond the accessors
/// below; consumed by one calculation pass and then discarded.
#[derive(Debug, Clone)]
pub struct PoolRecord(Value);

impl PoolRecord {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    /// Balance fields arrive as integer-as-string on most nodes, but
    /// some return plain JSON integers for small values.
    fn integer_string(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::String(s) => Some(s.clone()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Raw base-unit balance of asset A. Missing field reads as "0",
    /// matching the node's behavior for drained pools.
    pub fn balance_a(&self) -> String {
        self.integer_string("balance_a").unwrap_or_else(|| "0".to_string())
    }

    pub fn balance_b(&self) -> String {
        self.integer_string("balance_b").unwrap_or_else(|| "0".to_string())
    }

    pub fn asset_a(&self) -> Option<&str> {
        self.0.get("asset_a").and_then(Value::as_str)
    }

    pub fn asset_b(&self) -> Option<&str> {
        self.0.get("asset_b").and_then(Value::as_str)
    }

    /// Taker fee in hundredths of a percent, when the pool carries one.
    pub fn taker_fee_percent(&self) -> Option<u64> {
        self.0.get("taker_fee_percent").and_then(Value::as_u64)
    }
}

/// One place a pool object can be fetched from. Sources are tried in
/// order, so any mix of implementations can sit behind one fetcher.
#[async_trait]
pub trait PoolSource: Send + Sync {
    /// Label used in log lines.
    fn label(&self) -> &str;

    /// Single attempt against this source. `Ok(None)` means the source
    /// answered but does not know the object.
    async fn try_fetch(&self, pool_id: &str) -> Result<Option<PoolRecord>, EndpointError>;
}

/// BitShares-style node endpoint speaking JSON-RPC over HTTP POST.
pub struct RpcEndpoint {
    client: Client,
    base_url: String,
}

impl RpcEndpoint {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl PoolSource for RpcEndpoint {
    fn label(&self) -> &str {
        &self.base_url
    }

    async fn try_fetch(&self, pool_id: &str) -> Result<Option<PoolRecord>, EndpointError> {
        let payload = json!({
            "id": 1,
            "method": "call",
            "params": [0, "get_objects", [[pool_id]]],
        });

        let response = self
            .client
            .post(format!("{}/rpc", self.base_url))
            .json(&payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(EndpointError::Http(response.status()));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|_| EndpointError::MalformedResponse)?;

        Ok(extract_pool(&body))
    }
}

/// Pulls `result[0]` out of a JSON-RPC reply, treating missing, null and
/// empty values as not-found.
fn extract_pool(body: &Value) -> Option<PoolRecord> {
    let first = body.get("result")?.as_array()?.first()?;
    match first {
        Value::Null => None,
        Value::Object(obj) if obj.is_empty() => None,
        other => Some(PoolRecord(other.clone())),
    }
}

/// Tries its sources in order until one yields a record.
pub struct PoolFetcher {
    sources: Vec<Box<dyn PoolSource>>,
}

impl PoolFetcher {
    pub fn new(sources: Vec<Box<dyn PoolSource>>) -> Self {
        Self { sources }
    }

    /// Builds one `RpcEndpoint` per configured URL, sharing a client
    /// with the configured per-request timeout.
    pub fn from_config(cfg: &NodeCfg) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .build()?;
        let sources = cfg
            .endpoints
            .iter()
            .map(|url| Box::new(RpcEndpoint::new(client.clone(), url.clone())) as Box<dyn PoolSource>)
            .collect();
        Ok(Self::new(sources))
    }

    /// First source with a non-empty result wins; later sources are not
    /// consulted. No retries per source, no caching across calls.
    pub async fn fetch(&self, pool_id: &str) -> Result<PoolRecord, FetchError> {
        for source in &self.sources {
            info!("🔍 trying {}", source.label());
            match source.try_fetch(pool_id).await {
                Ok(Some(record)) => {
                    info!("✅ got pool {} from {}", pool_id, source.label());
                    return Ok(record);
                }
                Ok(None) => warn!("⚠️ {} has no object {}", source.label(), pool_id),
                Err(e) => warn!("❌ {} failed: {}", source.label(), e),
            }
        }

        Err(FetchError::AllEndpointsFailed {
            pool_id: pool_id.to_string(),
            attempts: self.sources.len(),
        })
    }
}
