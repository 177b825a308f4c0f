//! Tickertape Core - Feed aggregation, rotation, and the ticker engine.
//!
//! This crate contains the domain logic for the Tickertape feed:
//! merging stock and news items into one bounded feed, rotating a small
//! display window through it, and remembering which stories were read.
//! It is renderer-agnostic; frontends observe the engine through
//! [`FeedEvent`]s and a shared [`DisplayWindow`] snapshot.

pub mod engine;
pub mod errors;
pub mod events;
pub mod feed;
pub mod history;
pub mod rotation;

// Re-export common types from the feed and rotation modules
pub use feed::{FeedAggregator, FeedItem, FeedItemId, FeedItemKind, DEFAULT_MAX_ITEMS};
pub use rotation::{DisplayWindow, RotationController, RotationPhase, WindowMode};

// Re-export engine entry points
pub use engine::{EngineCommand, EngineConfig, TickerEngine, TickerHandle};

// Re-export event and history types
pub use events::{FeedEvent, FeedEventSink, NoopFeedEventSink, RecordingFeedEventSink};
pub use history::{FileReadHistory, MemoryReadHistory, ReadHistory};

// Re-export error types
pub use errors::Error;
pub use errors::Result;
