//! Feed events module.
//!
//! Provides the event types the engine emits as the feed changes and the
//! sink trait frontends implement to observe them. Sinks are the only
//! push channel out of the engine; everything else is polled through the
//! shared window snapshot.

mod feed_event;
mod sink;

pub use feed_event::*;
pub use sink::*;
