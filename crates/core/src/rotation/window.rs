use serde::Serialize;

use crate::feed::{FeedItem, FeedItemId};

/// How many feed items the ticker shows at once.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WindowMode {
    /// One or two items chosen by content: news always gets the line to
    /// itself, a stock brings its neighbor along unless that neighbor
    /// is news.
    Adaptive,
    /// Always `n` items, clamped to the feed length.
    Fixed(usize),
}

impl Default for WindowMode {
    fn default() -> Self {
        Self::Adaptive
    }
}

/// Snapshot of what the ticker is currently showing.
///
/// Published by the engine after every state change; frontends read it
/// instead of reaching into the feed.
#[derive(Clone, Debug, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayWindow {
    /// Items on screen, in display order
    pub items: Vec<FeedItem>,
    /// True between transition start and the cursor advance
    pub in_transition: bool,
    /// The pinned item's id while rotation is suspended
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pinned: Option<FeedItemId>,
}
