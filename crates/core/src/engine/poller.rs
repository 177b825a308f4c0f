//! Source pollers.
//!
//! Each attached source runs as its own task: fetch immediately, then
//! again on every interval tick, pushing whole snapshots through the
//! engine handle. Fetch failures are logged and replaced with demo data
//! so the ticker never goes blank; a poller exits when the engine stops
//! accepting its snapshots.

use std::sync::Arc;
use std::time::Duration;

use log::warn;
use tickertape_market_data::{demo, NewsProvider, QuoteProvider, StockQuote};
use tokio::task::JoinHandle;
use tokio::time::{self, MissedTickBehavior};

use crate::engine::TickerHandle;

pub(crate) fn spawn_quote_poller(
    handle: TickerHandle,
    provider: Arc<dyn QuoteProvider>,
    symbols: Vec<String>,
    index_symbols: Vec<String>,
    interval: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = time::interval(interval.max(Duration::from_millis(1)));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            let mut request = symbols.clone();
            request.extend(index_symbols.iter().cloned());

            let quotes = match provider.fetch_quotes(&request).await {
                Ok(quotes) if !quotes.is_empty() => quotes,
                Ok(_) => {
                    warn!("{} returned no quotes, using demo data", provider.id());
                    demo_quotes()
                }
                Err(err) => {
                    warn!("{} fetch failed ({err}), using demo data", provider.id());
                    demo_quotes()
                }
            };

            if handle.ingest_stocks(quotes).await.is_err() {
                break;
            }
        }
    })
}

pub(crate) fn spawn_news_poller(
    handle: TickerHandle,
    provider: Arc<dyn NewsProvider>,
    interval: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = time::interval(interval.max(Duration::from_millis(1)));
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            ticker.tick().await;

            // an Ok with zero stories is a valid refresh (everything
            // read); only a failed fetch falls back to demo headlines
            let stories = match provider.fetch_news().await {
                Ok(stories) => stories,
                Err(err) => {
                    warn!("{} fetch failed ({err}), using demo data", provider.id());
                    demo::news()
                }
            };

            if handle.ingest_news(stories).await.is_err() {
                break;
            }
        }
    })
}

/// Demo equities and indices together, the same shape a real quote
/// fetch produces.
fn demo_quotes() -> Vec<StockQuote> {
    let mut quotes = demo::quotes();
    quotes.extend(demo::indices());
    quotes
}
