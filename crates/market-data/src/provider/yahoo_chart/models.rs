//! Yahoo Finance chart API response models.
//!
//! These models cover the subset of the v8 chart endpoint used to build
//! a snapshot quote: the current price, the previous close and volume.

use serde::Deserialize;

/// Top-level response wrapper for the chart API
#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    pub chart: Chart,
}

/// Chart container with either results or an error object
#[derive(Debug, Deserialize)]
pub struct Chart {
    pub result: Option<Vec<ChartResult>>,
    pub error: Option<ChartError>,
}

/// Error object returned inside an HTTP 200 response
#[derive(Debug, Deserialize)]
pub struct ChartError {
    pub code: Option<String>,
    pub description: Option<String>,
}

/// Individual chart result; only the meta block is used
#[derive(Debug, Deserialize)]
pub struct ChartResult {
    pub meta: Option<ChartMeta>,
}

/// Quote metadata attached to a chart result
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartMeta {
    pub symbol: Option<String>,
    pub regular_market_price: Option<f64>,
    /// Previous close as reported for the chart range
    pub chart_previous_close: Option<f64>,
    /// Previous close fallback; absent for some ranges
    pub previous_close: Option<f64>,
    pub regular_market_volume: Option<u64>,
}
