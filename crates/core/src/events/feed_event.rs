//! Feed event types.

use serde::{Deserialize, Serialize};

use crate::feed::{FeedItemId, FeedItemKind};

/// Events emitted by the engine after feed or rotation state changes.
///
/// These are facts, not requests: by the time a sink sees one, the
/// change has already been applied and published to the window snapshot.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum FeedEvent {
    /// A source snapshot was ingested and the feed re-merged.
    FeedRefreshed {
        /// Which source refreshed (Stock or News; custom items report
        /// their own kind)
        kind: FeedItemKind,
        /// Feed length after the merge
        total: usize,
    },

    /// An item was removed from the feed.
    ItemRemoved {
        id: FeedItemId,
        /// The removed item's link, for frontends that want to open it
        url: Option<String>,
    },

    /// The current window started animating out; the cursor has not
    /// moved yet.
    TransitionStarted,

    /// The cursor advanced to a new window.
    RotationAdvanced { cursor: usize },

    /// Rotation is suspended on one item.
    ItemPinned { id: FeedItemId },

    /// Rotation resumed.
    ItemUnpinned,

    /// The engine worker exited; no more events will follow.
    EngineStopped,
}

impl FeedEvent {
    /// Creates a FeedRefreshed event.
    pub fn feed_refreshed(kind: FeedItemKind, total: usize) -> Self {
        Self::FeedRefreshed { kind, total }
    }

    /// Creates an ItemRemoved event.
    pub fn item_removed(id: FeedItemId, url: Option<String>) -> Self {
        Self::ItemRemoved { id, url }
    }

    /// Creates a RotationAdvanced event.
    pub fn rotation_advanced(cursor: usize) -> Self {
        Self::RotationAdvanced { cursor }
    }

    /// Creates an ItemPinned event.
    pub fn item_pinned(id: FeedItemId) -> Self {
        Self::ItemPinned { id }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_feed_event_serialization() {
        let event = FeedEvent::feed_refreshed(FeedItemKind::News, 12);

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("feed_refreshed"));

        let deserialized: FeedEvent = serde_json::from_str(&json).unwrap();
        match deserialized {
            FeedEvent::FeedRefreshed { kind, total } => {
                assert_eq!(kind, FeedItemKind::News);
                assert_eq!(total, 12);
            }
            _ => panic!("Expected FeedRefreshed"),
        }
    }

    #[test]
    fn test_item_removed_round_trips_url() {
        let id = Uuid::new_v4();
        let event = FeedEvent::item_removed(id, Some("https://example.com/story".to_string()));

        let json = serde_json::to_string(&event).unwrap();
        let deserialized: FeedEvent = serde_json::from_str(&json).unwrap();

        match deserialized {
            FeedEvent::ItemRemoved {
                id: got_id,
                url,
            } => {
                assert_eq!(got_id, id);
                assert_eq!(url.as_deref(), Some("https://example.com/story"));
            }
            _ => panic!("Expected ItemRemoved"),
        }
    }

    #[test]
    fn test_unit_variants_tag_only() {
        let json = serde_json::to_string(&FeedEvent::TransitionStarted).unwrap();
        assert_eq!(json, r#"{"type":"transition_started"}"#);
    }
}
