//! Yahoo Finance v7 quote API response models.
//!
//! Used only for the sentiment fallback when the RSS feed has no story
//! for a symbol.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub quote_response: Option<QuoteResponseBody>,
}

#[derive(Debug, Deserialize)]
pub struct QuoteResponseBody {
    pub result: Option<Vec<V7Quote>>,
}

/// Quote statistics for one symbol; all fields optional, Yahoo omits
/// whatever a given market state does not carry.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct V7Quote {
    pub regular_market_price: Option<f64>,
    pub regular_market_change_percent: Option<f64>,
    pub fifty_two_week_high: Option<f64>,
    pub fifty_two_week_low: Option<f64>,
}
