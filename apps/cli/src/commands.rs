//! Stdin command bridge.
//!
//! Reads single-letter commands from stdin and maps them onto engine
//! handle calls. Closing stdin (or `q`) shuts the engine down, which
//! ends the render loop and the process with it.

use std::sync::Arc;

use tickertape_core::{FeedItem, FeedItemKind, ReadHistory, TickerHandle};
use tickertape_market_data::{HeadlineProvider, YahooHeadlineProvider};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinHandle;

/// Stock item links are `{prefix}{symbol}`; stripping the prefix
/// recovers the raw symbol, caret and all.
const QUOTE_URL_PREFIX: &str = "https://finance.yahoo.com/quote/";

pub(crate) fn spawn_command_bridge(
    handle: TickerHandle,
    history: Arc<dyn ReadHistory>,
    headlines: Option<Arc<YahooHeadlineProvider>>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            let line = match lines.next_line().await {
                Ok(Some(line)) => line,
                // stdin closed; treat it like a quit
                Ok(None) | Err(_) => break,
            };

            let stopped = match line.trim() {
                "s" => handle.skip_to_next().await.is_err(),
                "p" => pin_head(&handle, headlines.as_ref()).await,
                "u" => handle.unpin().await.is_err(),
                "o" => open_head(&handle, &history).await,
                "q" => break,
                "" => false,
                other => {
                    println!("unknown command {other:?} (s=skip p=pin u=unpin o=open q=quit)");
                    false
                }
            };
            if stopped {
                return;
            }
        }

        let _ = handle.shutdown().await;
    })
}

/// Pin whatever leads the current window. For stocks, a one-shot
/// headline fetch prints context for the pinned symbol.
async fn pin_head(handle: &TickerHandle, headlines: Option<&Arc<YahooHeadlineProvider>>) -> bool {
    let Some(head) = handle.window().items.first().cloned() else {
        println!("nothing to pin");
        return false;
    };
    if handle.pin(head.id).await.is_err() {
        return true;
    }

    if head.kind == FeedItemKind::Stock {
        if let (Some(provider), Some(symbol)) = (headlines, quote_symbol(&head)) {
            let provider = Arc::clone(provider);
            tokio::spawn(async move {
                match provider.fetch_headline(&symbol).await {
                    Ok(Some(headline)) => println!("  {symbol}: {headline}"),
                    Ok(None) => {}
                    Err(err) => tracing::debug!("headline fetch for {symbol} failed: {err}"),
                }
            });
        }
    }
    false
}

/// The original click-through: surface the link, remember it as read so
/// it never comes back, drop it from the feed and move on.
async fn open_head(handle: &TickerHandle, history: &Arc<dyn ReadHistory>) -> bool {
    let Some(head) = handle.window().items.first().cloned() else {
        return false;
    };

    if let Some(url) = &head.url {
        println!("open: {url}");
        if let Err(err) = history.mark_read(url) {
            tracing::warn!("could not persist read mark: {err}");
        }
    }
    if handle.remove(head.id).await.is_err() {
        return true;
    }
    handle.skip_to_next().await.is_err()
}

fn quote_symbol(item: &FeedItem) -> Option<String> {
    item.url
        .as_deref()?
        .strip_prefix(QUOTE_URL_PREFIX)
        .map(str::to_string)
}
