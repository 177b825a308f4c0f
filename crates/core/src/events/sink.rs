//! Feed event sink trait and implementations.

use std::sync::{Arc, Mutex};

use super::FeedEvent;

/// Trait for receiving feed events.
///
/// The engine worker emits events inline from its command loop, so
/// implementations must be fast and non-blocking: queue the event and
/// return. A sink that blocks stalls rotation.
pub trait FeedEventSink: Send + Sync {
    /// Emit a single feed event.
    fn emit(&self, event: FeedEvent);

    /// Emit multiple feed events.
    ///
    /// Default implementation calls `emit()` for each event.
    /// Implementations may override for batch optimization.
    fn emit_batch(&self, events: Vec<FeedEvent>) {
        for event in events {
            self.emit(event);
        }
    }
}

/// No-op implementation for tests or contexts that don't need events.
#[derive(Clone, Default)]
pub struct NoopFeedEventSink;

impl FeedEventSink for NoopFeedEventSink {
    fn emit(&self, _event: FeedEvent) {
        // Intentionally empty - events are discarded
    }
}

/// Sink that collects emitted events for later inspection.
///
/// Cloning shares the underlying buffer, so a test can keep one clone
/// and hand the other to the engine.
#[derive(Clone, Default)]
pub struct RecordingFeedEventSink {
    events: Arc<Mutex<Vec<FeedEvent>>>,
}

impl RecordingFeedEventSink {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Returns all collected events.
    pub fn events(&self) -> Vec<FeedEvent> {
        self.events.lock().unwrap().clone()
    }

    /// Clears collected events.
    pub fn clear(&self) {
        self.events.lock().unwrap().clear();
    }

    /// Returns the number of collected events.
    pub fn len(&self) -> usize {
        self.events.lock().unwrap().len()
    }

    /// Returns true if no events have been collected.
    pub fn is_empty(&self) -> bool {
        self.events.lock().unwrap().is_empty()
    }
}

impl FeedEventSink for RecordingFeedEventSink {
    fn emit(&self, event: FeedEvent) {
        self.events.lock().unwrap().push(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feed::FeedItemKind;

    #[test]
    fn test_noop_sink_does_not_panic() {
        let sink = NoopFeedEventSink;
        sink.emit(FeedEvent::feed_refreshed(FeedItemKind::Stock, 4));
        sink.emit_batch(vec![
            FeedEvent::TransitionStarted,
            FeedEvent::rotation_advanced(1),
        ]);
    }

    #[test]
    fn test_recording_sink_collects_events() {
        let sink = RecordingFeedEventSink::new();
        assert!(sink.is_empty());

        sink.emit(FeedEvent::feed_refreshed(FeedItemKind::Stock, 4));
        assert_eq!(sink.len(), 1);

        sink.emit_batch(vec![
            FeedEvent::TransitionStarted,
            FeedEvent::rotation_advanced(1),
        ]);
        assert_eq!(sink.len(), 3);

        sink.clear();
        assert!(sink.is_empty());
    }

    #[test]
    fn test_recording_sink_clones_share_the_buffer() {
        let sink = RecordingFeedEventSink::new();
        let observer = sink.clone();

        sink.emit(FeedEvent::ItemUnpinned);
        assert_eq!(observer.len(), 1);
    }
}
