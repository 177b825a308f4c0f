//! The ticker engine.
//!
//! Ties the aggregator, the rotation controller and the timers together
//! in one worker task. The engine owns all mutable feed state; the rest
//! of the application talks to it through a [`TickerHandle`]:
//!
//! - mutations go in as [`EngineCommand`]s over a bounded channel
//! - the current [`DisplayWindow`](crate::rotation::DisplayWindow) comes
//!   out as a shared snapshot, rewritten after every state change
//! - [`FeedEvent`](crate::events::FeedEvent)s are pushed to the
//!   configured sink as changes happen
//!
//! Timers never mutate state directly. A rotation tick or transition
//! deadline re-reads the feed inside the worker loop, so a snapshot that
//! arrived mid-transition is accounted for before the cursor moves.

mod config;
mod handle;
mod poller;
mod worker;


pub use config::{EngineConfig, DEFAULT_ROTATION_INTERVAL, DEFAULT_TRANSITION_DELAY};
pub use handle::{EngineCommand, TickerHandle};

use std::sync::{Arc, RwLock};

use tokio::sync::mpsc;

use crate::events::FeedEventSink;
use crate::history::ReadHistory;
use crate::rotation::DisplayWindow;

use worker::EngineWorker;

/// Commands that can queue before senders are backpressured.
const COMMAND_QUEUE_CAPACITY: usize = 64;

/// Factory for the engine worker task.
pub struct TickerEngine;

impl TickerEngine {
    /// Spawn the engine worker and return a handle to it.
    ///
    /// Must be called from within a tokio runtime. The worker runs until
    /// [`TickerHandle::shutdown`] is called or every handle is dropped.
    pub fn spawn(
        config: EngineConfig,
        history: Arc<dyn ReadHistory>,
        sink: Arc<dyn FeedEventSink>,
    ) -> TickerHandle {
        let (tx, rx) = mpsc::channel(COMMAND_QUEUE_CAPACITY);
        let window = Arc::new(RwLock::new(DisplayWindow::default()));
        let worker = EngineWorker::new(config, history, sink, Arc::clone(&window));
        tokio::spawn(worker.run(rx));
        TickerHandle::new(tx, window)
    }
}
