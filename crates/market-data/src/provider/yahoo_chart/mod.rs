//! Yahoo Finance quote provider.
//!
//! This provider uses the public v8 chart endpoint to fetch snapshot
//! quotes for equities and market indices:
//! - Equities/ETFs (e.g., AAPL, SPY)
//! - Indices via their caret symbols (e.g., ^GSPC, ^VIX)
//!
//! Each symbol is one request; a batch fans out concurrently and symbols
//! that fail are skipped so one bad ticker cannot blank the whole feed.

mod models;

use std::time::Duration;

use async_trait::async_trait;
use futures::future::join_all;
use tracing::{debug, warn};
use urlencoding::encode;

use crate::errors::SourceError;
use crate::models::StockQuote;
use crate::provider::QuoteProvider;

use models::{ChartMeta, ChartResponse};

const PROVIDER_ID: &str = "YAHOO_CHART";

const CHART_BASE_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

/// Yahoo rejects requests without a browser-looking user agent.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7)";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

// ============================================================================
// Yahoo Chart Provider
// ============================================================================

/// Yahoo Finance chart-based quote provider.
///
/// Fetches one chart per symbol and reduces the chart metadata to a
/// [`StockQuote`]: change is computed against the chart previous close,
/// falling back to the regular previous close when the chart range does
/// not carry one.
pub struct YahooChartProvider {
    client: reqwest::Client,
}

impl YahooChartProvider {
    pub fn new() -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .user_agent(BROWSER_USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }

    async fn fetch_one(&self, symbol: &str) -> Result<StockQuote, SourceError> {
        let url = format!(
            "{}/{}?interval=1d&range=1d",
            CHART_BASE_URL,
            encode(symbol)
        );
        debug!("fetching chart for {symbol}");

        let response = self.client.get(&url).send().await?.error_for_status()?;
        let payload: ChartResponse = response.json().await.map_err(|e| SourceError::Decode {
            provider: PROVIDER_ID.to_string(),
            message: e.to_string(),
        })?;

        quote_from_chart(symbol, payload)
    }
}

#[async_trait]
impl QuoteProvider for YahooChartProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_quotes(&self, symbols: &[String]) -> Result<Vec<StockQuote>, SourceError> {
        let lookups = symbols.iter().map(|symbol| async move {
            (symbol.as_str(), self.fetch_one(symbol).await)
        });

        // join_all preserves request order, so skipped failures leave the
        // survivors in display order.
        let mut quotes = Vec::with_capacity(symbols.len());
        for (symbol, result) in join_all(lookups).await {
            match result {
                Ok(quote) => quotes.push(quote),
                Err(err) => warn!("skipping {symbol}: {err}"),
            }
        }

        Ok(quotes)
    }
}

/// Reduce a chart response to a snapshot quote.
///
/// Change versus the previous close is computed here rather than read
/// off the payload; the chart endpoint reports closes but not deltas.
fn quote_from_chart(symbol: &str, payload: ChartResponse) -> Result<StockQuote, SourceError> {
    if let Some(error) = payload.chart.error {
        return Err(SourceError::InvalidResponse {
            provider: PROVIDER_ID.to_string(),
            message: error
                .description
                .or(error.code)
                .unwrap_or_else(|| "unspecified chart error".to_string()),
        });
    }

    let meta: ChartMeta = payload
        .chart
        .result
        .and_then(|results| results.into_iter().next())
        .and_then(|result| result.meta)
        .ok_or_else(|| SourceError::InvalidResponse {
            provider: PROVIDER_ID.to_string(),
            message: format!("no chart meta for {symbol}"),
        })?;

    let price = meta.regular_market_price.unwrap_or(0.0);
    let previous_close = meta
        .chart_previous_close
        .or(meta.previous_close)
        .unwrap_or(price);
    let change = price - previous_close;
    let change_percent = if previous_close > 0.0 {
        change / previous_close * 100.0
    } else {
        0.0
    };

    Ok(StockQuote {
        symbol: meta.symbol.unwrap_or_else(|| symbol.to_string()),
        price,
        change,
        change_percent,
        volume: meta.regular_market_volume,
    })
}
