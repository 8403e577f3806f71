//! Error handling for the application

use thiserror::Error;

/// Failures of a single data source attempt. Recovered by moving on to
/// the next endpoint; visible only as a log line.
#[derive(Error, Debug)]
pub enum EndpointError {
    #[error("HTTP status {0}")]
    Http(reqwest::StatusCode),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("malformed JSON-RPC response")]
    MalformedResponse,
}

/// Pool fetch errors
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("all {attempts} endpoints failed for pool {pool_id}")]
    AllEndpointsFailed { pool_id: String, attempts: usize },
}

/// Rate calculation errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RateError {
    #[error("pool side {0} has zero balance")]
    ZeroBalance(&'static str),

    #[error("invalid balance in {field}: {value:?}")]
    InvalidBalance { field: &'static str, value: String },

    #[error("asset precision {0} exceeds supported decimal scale")]
    UnsupportedPrecision(u32),
}
