//! Terminal driver for the Tickertape engine.
//!
//! Wires real providers (or demo data) into the engine, prints the
//! rotating display window to stdout and bridges single-letter stdin
//! commands to the engine handle. Logs go to stderr so the ticker line
//! stays clean.

mod commands;
mod config;
mod events;

use std::sync::Arc;

use anyhow::Context;
use tickertape_core::{
    DisplayWindow, EngineConfig, FeedEvent, FileReadHistory, ReadHistory, TickerEngine,
};
use tickertape_market_data::{demo, HackerNewsProvider, YahooChartProvider, YahooHeadlineProvider};
use tokio::sync::mpsc;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use config::Config;
use events::ChannelFeedEventSink;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::from_env();
    init_tracing();

    let history: Arc<dyn ReadHistory> = Arc::new(
        FileReadHistory::open(config.history_path()).context("opening read history")?,
    );

    let (event_tx, mut event_rx) = mpsc::unbounded_channel();
    let handle = TickerEngine::spawn(
        EngineConfig {
            rotation_interval: config.rotation_interval,
            window_mode: config.window_mode,
            ..EngineConfig::default()
        },
        Arc::clone(&history),
        Arc::new(ChannelFeedEventSink::new(event_tx)),
    );

    let headlines = if config.demo {
        tracing::info!("demo mode: seeding canned quotes and headlines");
        let mut quotes = demo::quotes();
        quotes.extend(demo::indices());
        handle.ingest_stocks(quotes).await?;
        handle.ingest_news(demo::news()).await?;
        None
    } else {
        let quote_provider =
            Arc::new(YahooChartProvider::new().context("building quote client")?);
        handle
            .attach_quote_source(
                quote_provider,
                config.symbols.clone(),
                config.index_symbols.clone(),
                config.quote_refresh,
            )
            .await?;

        let news_provider = Arc::new(HackerNewsProvider::new().context("building news client")?);
        handle
            .attach_news_source(news_provider, config.news_refresh)
            .await?;

        Some(Arc::new(
            YahooHeadlineProvider::new().context("building headline client")?,
        ))
    };

    let bridge = commands::spawn_command_bridge(handle.clone(), Arc::clone(&history), headlines);
    tracing::info!(
        "tickertape running ({} symbols, {} indices); commands: s=skip p=pin u=unpin o=open q=quit",
        config.symbols.len(),
        config.index_symbols.len()
    );

    while let Some(event) = event_rx.recv().await {
        match event {
            FeedEvent::EngineStopped => break,
            // the window does not change until the advance lands
            FeedEvent::TransitionStarted => {}
            _ => render_window(&handle.window()),
        }
    }

    // the bridge may still be parked on a stdin read
    bridge.abort();
    Ok(())
}

fn init_tracing() {
    let log_format = std::env::var("TT_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(false)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_line_number(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    }
}

fn render_window(window: &DisplayWindow) {
    if window.items.is_empty() {
        println!("(feed empty)");
        return;
    }
    let line = window
        .items
        .iter()
        .map(|item| format!("[{}] {}", item.kind.as_str(), item.text))
        .collect::<Vec<_>>()
        .join("  ");
    if window.pinned.is_some() {
        println!("{line}  *pinned*");
    } else {
        println!("{line}");
    }
}
