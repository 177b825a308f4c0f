//! Yahoo Finance per-symbol headline provider.
//!
//! Two-stage lookup for one line of context about a focused symbol:
//! 1. The Yahoo Finance RSS headline feed for the symbol; the newest
//!    entry's title wins.
//! 2. When the feed is empty or unreachable, a sentiment line derived
//!    from the v7 quote statistics (52-week range position, day move).

mod models;

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;
use urlencoding::encode;

use crate::errors::SourceError;
use crate::provider::HeadlineProvider;

use models::{QuoteResponse, V7Quote};

const PROVIDER_ID: &str = "YAHOO_HEADLINE";

const RSS_BASE_URL: &str = "https://feeds.finance.yahoo.com/rss/2.0/headline";
const QUOTE_BASE_URL: &str = "https://query1.finance.yahoo.com/v7/finance/quote";

const QUOTE_FIELDS: &str =
    "longName,marketState,regularMarketChangePercent,fiftyTwoWeekHigh,fiftyTwoWeekLow,regularMarketPrice";

/// Yahoo rejects requests without a browser-looking user agent.
const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7)";

const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Yahoo Finance headline provider with a quote-sentiment fallback.
pub struct YahooHeadlineProvider {
    client: reqwest::Client,
}

impl YahooHeadlineProvider {
    pub fn new() -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .user_agent(BROWSER_USER_AGENT)
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self { client })
    }

    async fn rss_headline(&self, symbol: &str) -> Result<Option<String>, SourceError> {
        let url = format!(
            "{}?s={}&region=US&lang=en-US",
            RSS_BASE_URL,
            encode(symbol)
        );
        let response = self.client.get(&url).send().await?.error_for_status()?;
        let bytes = response.bytes().await?;
        headline_from_rss(&bytes)
    }

    async fn market_sentiment(&self, symbol: &str) -> Result<Option<String>, SourceError> {
        let url = format!(
            "{}?symbols={}&fields={}",
            QUOTE_BASE_URL,
            encode(symbol),
            QUOTE_FIELDS
        );
        let response = self.client.get(&url).send().await?.error_for_status()?;
        let payload: QuoteResponse = response.json().await.map_err(|e| SourceError::Decode {
            provider: PROVIDER_ID.to_string(),
            message: e.to_string(),
        })?;

        let quote = payload
            .quote_response
            .and_then(|body| body.result)
            .and_then(|result| result.into_iter().next());

        Ok(quote.map(|q| sentiment_line(&q)))
    }
}

#[async_trait]
impl HeadlineProvider for YahooHeadlineProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_headline(&self, symbol: &str) -> Result<Option<String>, SourceError> {
        match self.rss_headline(symbol).await {
            Ok(Some(title)) => Ok(Some(title)),
            Ok(None) => self.market_sentiment(symbol).await,
            Err(err) => {
                debug!("rss headline for {symbol} failed, trying sentiment: {err}");
                self.market_sentiment(symbol).await
            }
        }
    }
}

/// Parse an RSS/Atom payload and return the first entry's title.
fn headline_from_rss(bytes: &[u8]) -> Result<Option<String>, SourceError> {
    let feed = feed_rs::parser::parse(bytes).map_err(|e| SourceError::Feed {
        provider: PROVIDER_ID.to_string(),
        message: e.to_string(),
    })?;

    Ok(feed
        .entries
        .into_iter()
        .next()
        .and_then(|entry| entry.title)
        .map(|title| title.content))
}

/// One-line read of where the price sits, mirroring what a human would
/// say glancing at the quote page.
///
/// Thresholds: within 5% of the 52-week high or low wins over the day
/// move; a day move over 3% is "strong", over 1.5% merely notable.
fn sentiment_line(quote: &V7Quote) -> String {
    let price = quote.regular_market_price.unwrap_or(0.0);
    let high_52w = quote.fifty_two_week_high.unwrap_or(0.0);
    let low_52w = quote.fifty_two_week_low.unwrap_or(0.0);
    let change_percent = quote.regular_market_change_percent.unwrap_or(0.0);

    let line = if price >= high_52w * 0.95 {
        "Trading near 52-week high"
    } else if price <= low_52w * 1.05 {
        "Trading near 52-week low"
    } else if change_percent.abs() > 3.0 {
        if change_percent > 0.0 {
            "Strong bullish momentum today"
        } else {
            "Heavy selling pressure"
        }
    } else if change_percent.abs() > 1.5 {
        if change_percent > 0.0 {
            "Outperforming the market"
        } else {
            "Underperforming vs peers"
        }
    } else {
        "Trading in line with market"
    };

    line.to_string()
}
