//! Bridges engine events into the render loop.

use tickertape_core::{FeedEvent, FeedEventSink};
use tokio::sync::mpsc;

/// Event sink that forwards engine events over a channel.
///
/// The binary owns the receiving end and redraws on each event. Sends
/// are best-effort: once the render loop is gone there is nobody left
/// to draw for, so dropped events are fine.
pub struct ChannelFeedEventSink {
    tx: mpsc::UnboundedSender<FeedEvent>,
}

impl ChannelFeedEventSink {
    pub fn new(tx: mpsc::UnboundedSender<FeedEvent>) -> Self {
        Self { tx }
    }
}

impl FeedEventSink for ChannelFeedEventSink {
    fn emit(&self, event: FeedEvent) {
        if self.tx.send(event).is_err() {
            tracing::debug!("render loop closed, dropping feed event");
        }
    }
}
