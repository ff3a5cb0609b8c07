// File: crates/chart-core/src/error.rs
// Summary: Error type for loading and validating price series.

use thiserror::Error;

/// Errors raised while fetching, decoding, or validating a price series.
#[derive(Debug, Error)]
pub enum ChartError {
    #[error("network error: {0}")]
    Network(String),

    #[error("price endpoint returned HTTP {0}")]
    HttpStatus(u16),

    #[error("malformed price payload: {0}")]
    Decode(String),

    #[error("invalid date key '{0}' (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("duplicate date {0} in series")]
    DuplicateDate(String),

    #[error("price for {date} is not a finite number")]
    NonFinitePrice { date: String },

    #[error("series is not in ascending date order at index {index}")]
    Unordered { index: usize },

    #[error("series load was cancelled")]
    Cancelled,
}

impl From<reqwest::Error> for ChartError {
    fn from(e: reqwest::Error) -> Self {
        ChartError::Network(e.to_string())
    }
}

impl From<serde_json::Error> for ChartError {
    fn from(e: serde_json::Error) -> Self {
        ChartError::Decode(e.to_string())
    }
}
