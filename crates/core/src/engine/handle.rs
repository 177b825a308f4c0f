use std::sync::{Arc, RwLock};
use std::time::Duration;

use tickertape_market_data::{NewsProvider, NewsStory, QuoteProvider, StockQuote};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use crate::engine::poller;
use crate::errors::{Error, Result};
use crate::feed::{FeedItemId, FeedItemKind};
use crate::rotation::DisplayWindow;

/// Commands accepted by the engine worker.
///
/// Every feed and rotation mutation travels through this enum, which is
/// what serializes them: the worker applies commands strictly one at a
/// time, so no lock covers the aggregator or the controller.
#[derive(Debug)]
pub enum EngineCommand {
    /// Replace the stock portion of the feed with a fresh snapshot
    IngestStocks(Vec<StockQuote>),
    /// Replace the news portion of the feed with a fresh snapshot
    IngestNews(Vec<NewsStory>),
    /// Append a one-off item; the reply carries its id
    AddCustom {
        text: String,
        kind: FeedItemKind,
        reply: oneshot::Sender<FeedItemId>,
    },
    /// Remove one item by id
    Remove(FeedItemId),
    /// Advance now instead of waiting for the rotation timer
    SkipToNext,
    /// Suspend rotation on one item
    Pin(FeedItemId),
    /// Resume rotation
    Unpin,
    /// Adopt a poller task so shutdown can abort it
    RegisterPoller(JoinHandle<()>),
    /// Stop the worker; the ack fires after cleanup finishes
    Shutdown(oneshot::Sender<()>),
}

/// Cloneable handle to a running engine.
///
/// Commands are queued to the worker; the window snapshot is read
/// directly. Every sender sees [`Error::EngineStopped`] once the worker
/// has exited.
#[derive(Clone)]
pub struct TickerHandle {
    tx: mpsc::Sender<EngineCommand>,
    window: Arc<RwLock<DisplayWindow>>,
}

impl TickerHandle {
    pub(crate) fn new(
        tx: mpsc::Sender<EngineCommand>,
        window: Arc<RwLock<DisplayWindow>>,
    ) -> Self {
        Self { tx, window }
    }

    /// Snapshot of what the ticker is currently showing.
    pub fn window(&self) -> DisplayWindow {
        self.window.read().unwrap().clone()
    }

    /// Replace the stock portion of the feed.
    pub async fn ingest_stocks(&self, quotes: Vec<StockQuote>) -> Result<()> {
        self.send(EngineCommand::IngestStocks(quotes)).await
    }

    /// Replace the news portion of the feed.
    pub async fn ingest_news(&self, stories: Vec<NewsStory>) -> Result<()> {
        self.send(EngineCommand::IngestNews(stories)).await
    }

    /// Append a one-off item and return its id.
    pub async fn add_custom(
        &self,
        text: impl Into<String>,
        kind: FeedItemKind,
    ) -> Result<FeedItemId> {
        let (reply_tx, reply_rx) = oneshot::channel();
        self.send(EngineCommand::AddCustom {
            text: text.into(),
            kind,
            reply: reply_tx,
        })
        .await?;
        reply_rx.await.map_err(|_| Error::EngineStopped)
    }

    /// Remove one item from the feed. Unknown ids are a silent no-op.
    pub async fn remove(&self, id: FeedItemId) -> Result<()> {
        self.send(EngineCommand::Remove(id)).await
    }

    /// Rotate to the next window immediately.
    pub async fn skip_to_next(&self) -> Result<()> {
        self.send(EngineCommand::SkipToNext).await
    }

    /// Suspend rotation on the given item.
    pub async fn pin(&self, id: FeedItemId) -> Result<()> {
        self.send(EngineCommand::Pin(id)).await
    }

    /// Resume rotation after a pin.
    pub async fn unpin(&self) -> Result<()> {
        self.send(EngineCommand::Unpin).await
    }

    /// Poll `provider` for quotes every `interval`, feeding snapshots
    /// into the engine. The first fetch happens immediately. Symbols and
    /// index symbols are requested together, in that order.
    pub async fn attach_quote_source(
        &self,
        provider: Arc<dyn QuoteProvider>,
        symbols: Vec<String>,
        index_symbols: Vec<String>,
        interval: Duration,
    ) -> Result<()> {
        let task =
            poller::spawn_quote_poller(self.clone(), provider, symbols, index_symbols, interval);
        self.send(EngineCommand::RegisterPoller(task)).await
    }

    /// Poll `provider` for news every `interval`, feeding snapshots into
    /// the engine. The first fetch happens immediately.
    pub async fn attach_news_source(
        &self,
        provider: Arc<dyn NewsProvider>,
        interval: Duration,
    ) -> Result<()> {
        let task = poller::spawn_news_poller(self.clone(), provider, interval);
        self.send(EngineCommand::RegisterPoller(task)).await
    }

    /// Stop the engine and wait until the worker has finished cleanup.
    ///
    /// Idempotent: shutting down an already-stopped engine returns Ok.
    pub async fn shutdown(&self) -> Result<()> {
        let (done_tx, done_rx) = oneshot::channel();
        if self.send(EngineCommand::Shutdown(done_tx)).await.is_err() {
            return Ok(());
        }
        let _ = done_rx.await;
        Ok(())
    }

    async fn send(&self, command: EngineCommand) -> Result<()> {
        self.tx
            .send(command)
            .await
            .map_err(|_| Error::EngineStopped)
    }
}
