// File: crates/chart-core/src/fetch.rs
// Summary: Historical closing-price client for the BPI endpoint and payload decoding.

use std::collections::BTreeMap;

use serde::Deserialize;
use tracing::{debug, info, instrument};

use crate::error::ChartError;
use crate::series::Series;

/// Historical daily closing prices, `{ "bpi": { "<YYYY-MM-DD>": <price>, ... } }`.
pub const BPI_HISTORICAL_CLOSE_URL: &str = "https://api.coindesk.com/v1/bpi/historical/close.json";

/// Response body of the historical-close endpoint. Other top-level fields are ignored.
#[derive(Debug, Deserialize)]
pub struct BpiPayload {
    pub bpi: BTreeMap<String, f64>,
}

impl BpiPayload {
    pub fn into_series(self) -> Result<Series, ChartError> {
        Series::from_prices(&self.bpi)
    }
}

/// Decode a payload body into a series.
pub fn parse_payload(body: &str) -> Result<Series, ChartError> {
    let payload: BpiPayload = serde_json::from_str(body)?;
    payload.into_series()
}

/// One-shot GET client. No retry, no timeout, no auth.
#[derive(Clone, Debug)]
pub struct BpiClient {
    http: reqwest::Client,
    endpoint: String,
}

impl Default for BpiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl BpiClient {
    pub fn new() -> Self {
        Self::with_endpoint(BPI_HISTORICAL_CLOSE_URL)
    }

    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self { http: reqwest::Client::new(), endpoint: endpoint.into() }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn fetch_series(&self) -> Result<Series, ChartError> {
        debug!("requesting price history");
        let response = self.http.get(&self.endpoint).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ChartError::HttpStatus(status.as_u16()));
        }
        let body = response.text().await?;
        let series = parse_payload(&body)?;
        info!(points = series.len(), "price history received");
        Ok(series)
    }
}
