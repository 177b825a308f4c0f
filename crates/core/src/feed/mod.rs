//! Feed items and aggregation.
//!
//! A feed is one bounded, ordered list of [`FeedItem`]s built from
//! heterogeneous sources. Stocks and news are interleaved so neither
//! source can starve the other; everything else is appended after.

mod aggregator;
mod item;

pub use aggregator::{FeedAggregator, DEFAULT_MAX_ITEMS};
pub use item::{FeedItem, FeedItemId, FeedItemKind};
