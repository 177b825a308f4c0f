//! The engine worker loop.
//!
//! One task owns the aggregator and the controller outright. Commands,
//! rotation ticks and transition deadlines are multiplexed through a
//! single `select!`, so every mutation is applied alone and each timer
//! firing sees the feed as it is at that instant, not as it was when
//! the timer was armed.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use log::info;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use crate::engine::{EngineCommand, EngineConfig};
use crate::events::{FeedEvent, FeedEventSink};
use crate::feed::{FeedAggregator, FeedItemKind};
use crate::history::ReadHistory;
use crate::rotation::{DisplayWindow, RotationController};

pub(crate) struct EngineWorker {
    config: EngineConfig,
    aggregator: FeedAggregator,
    controller: RotationController,
    window: Arc<RwLock<DisplayWindow>>,
    sink: Arc<dyn FeedEventSink>,
    pollers: Vec<JoinHandle<()>>,
}

impl EngineWorker {
    pub(crate) fn new(
        config: EngineConfig,
        history: Arc<dyn ReadHistory>,
        sink: Arc<dyn FeedEventSink>,
        window: Arc<RwLock<DisplayWindow>>,
    ) -> Self {
        let aggregator = FeedAggregator::with_max_items(history, config.max_items);
        let controller = RotationController::new(config.window_mode);
        Self {
            config,
            aggregator,
            controller,
            window,
            sink,
            pollers: Vec::new(),
        }
    }

    pub(crate) async fn run(mut self, mut rx: mpsc::Receiver<EngineCommand>) {
        // zero-length periods panic in tokio
        let period = self.config.rotation_interval.max(Duration::from_millis(1));
        let mut rotation = time::interval_at(Instant::now() + period, period);
        rotation.set_missed_tick_behavior(MissedTickBehavior::Delay);

        // armed while a transition is in flight
        let mut deadline: Option<Instant> = None;
        let mut ack: Option<oneshot::Sender<()>> = None;

        info!("ticker engine started");

        loop {
            tokio::select! {
                command = rx.recv() => {
                    match command {
                        Some(EngineCommand::Shutdown(done)) => {
                            ack = Some(done);
                            break;
                        }
                        Some(command) => self.apply(command, &mut rotation, &mut deadline),
                        // every handle dropped
                        None => break,
                    }
                }
                _ = rotation.tick() => {
                    self.on_rotation_tick(&mut deadline);
                }
                _ = transition_fired(deadline), if deadline.is_some() => {
                    deadline = None;
                    self.on_transition_deadline();
                }
            }
        }

        self.dispose();
        if let Some(done) = ack {
            let _ = done.send(());
        }
    }

    fn apply(
        &mut self,
        command: EngineCommand,
        rotation: &mut time::Interval,
        deadline: &mut Option<Instant>,
    ) {
        match command {
            EngineCommand::IngestStocks(quotes) => {
                self.aggregator.ingest_stock_snapshot(&quotes);
                self.sink.emit(FeedEvent::feed_refreshed(
                    FeedItemKind::Stock,
                    self.aggregator.len(),
                ));
                self.publish_window();
            }
            EngineCommand::IngestNews(stories) => {
                self.aggregator.ingest_news_snapshot(&stories);
                self.sink.emit(FeedEvent::feed_refreshed(
                    FeedItemKind::News,
                    self.aggregator.len(),
                ));
                self.publish_window();
            }
            EngineCommand::AddCustom { text, kind, reply } => {
                let id = self.aggregator.add_custom_item(text, kind);
                self.sink
                    .emit(FeedEvent::feed_refreshed(kind, self.aggregator.len()));
                self.publish_window();
                let _ = reply.send(id);
            }
            EngineCommand::Remove(id) => {
                if let Some(item) = self.aggregator.remove_item(id) {
                    // a pinned item cannot linger after its removal
                    if self.controller.pinned() == Some(id) {
                        self.controller.unpin();
                        self.sink.emit(FeedEvent::ItemUnpinned);
                    }
                    self.sink.emit(FeedEvent::item_removed(item.id, item.url));
                    self.publish_window();
                }
            }
            EngineCommand::SkipToNext => {
                self.skip_to_next(rotation, deadline);
            }
            EngineCommand::Pin(id) => {
                if self.controller.pin(id, self.aggregator.items()) {
                    // the controller cancelled the transition; kill the
                    // scheduled completion with it
                    *deadline = None;
                    self.sink.emit(FeedEvent::item_pinned(id));
                    self.publish_window();
                }
            }
            EngineCommand::Unpin => {
                if self.controller.unpin() {
                    self.sink.emit(FeedEvent::ItemUnpinned);
                    self.publish_window();
                }
            }
            EngineCommand::RegisterPoller(task) => {
                self.pollers.push(task);
            }
            // intercepted by the run loop; dropping the ack still
            // unblocks the caller
            EngineCommand::Shutdown(done) => drop(done),
        }
    }

    /// Rotation timer fired: phase one of the advance.
    fn on_rotation_tick(&mut self, deadline: &mut Option<Instant>) {
        if self.controller.begin_transition(self.aggregator.items()) {
            *deadline = Some(Instant::now() + self.config.transition_delay);
            self.sink.emit(FeedEvent::TransitionStarted);
            self.publish_window();
        }
    }

    /// Transition delay elapsed: phase two, advance the cursor.
    fn on_transition_deadline(&mut self) {
        if let Some(cursor) = self.controller.complete_transition(self.aggregator.items()) {
            self.sink.emit(FeedEvent::rotation_advanced(cursor));
        }
        self.publish_window();
    }

    /// Advance now. An in-flight completion is replaced, not stacked:
    /// the deadline moves out to a fresh transition delay and the
    /// rotation timer re-arms a full interval from now, so a skip never
    /// causes a double advance.
    fn skip_to_next(&mut self, rotation: &mut time::Interval, deadline: &mut Option<Instant>) {
        if self.controller.pinned().is_some() || self.aggregator.is_empty() {
            return;
        }
        if self.controller.begin_transition(self.aggregator.items()) {
            self.sink.emit(FeedEvent::TransitionStarted);
        }
        *deadline = Some(Instant::now() + self.config.transition_delay);
        rotation.reset();
        self.publish_window();
    }

    fn publish_window(&self) {
        let window = self.controller.current_window(self.aggregator.items());
        *self.window.write().unwrap() = window;
    }

    /// Stop pollers and settle state so observers see a quiet engine.
    fn dispose(&mut self) {
        for poller in self.pollers.drain(..) {
            poller.abort();
        }
        self.controller.cancel_transition();
        self.publish_window();
        self.sink.emit(FeedEvent::EngineStopped);
        info!("ticker engine stopped");
    }
}

/// Resolves at the transition deadline; never resolves while disarmed.
///
/// Rebuilt on every loop iteration, which is safe because it sleeps to
/// an absolute instant.
async fn transition_fired(deadline: Option<Instant>) {
    match deadline {
        Some(at) => time::sleep_until(at).await,
        None => std::future::pending().await,
    }
}
