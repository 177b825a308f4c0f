use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tickertape_market_data::{NewsStory, StockQuote};
use uuid::Uuid;

/// Unique identity of a feed item, stable across re-merges.
pub type FeedItemId = Uuid;

/// What a feed item carries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum FeedItemKind {
    /// A quote line for one symbol (equities and indices alike)
    Stock,
    /// A headline
    News,
    /// Status text injected by the application itself
    System,
    /// One-off user-facing notice
    Notification,
}

impl FeedItemKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            FeedItemKind::Stock => "STOCK",
            FeedItemKind::News => "NEWS",
            FeedItemKind::System => "SYSTEM",
            FeedItemKind::Notification => "NOTIFICATION",
        }
    }
}

/// One entry in the merged feed.
///
/// Items are value objects: re-ingesting a source replaces its items
/// wholesale with fresh ids rather than mutating them in place.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItem {
    pub id: FeedItemId,
    /// Ticker line as rendered, e.g. "AAPL $235.45 +1.0%"
    pub text: String,
    pub kind: FeedItemKind,
    pub timestamp: DateTime<Utc>,
    /// Where clicking the item leads, when there is somewhere to go
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub is_read: bool,
}

impl FeedItem {
    pub fn new(text: impl Into<String>, kind: FeedItemKind, url: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: text.into(),
            kind,
            timestamp: Utc::now(),
            url,
            is_read: false,
        }
    }

    /// Build a stock line from a quote.
    ///
    /// Indices use their compact display form (no caret, whole points);
    /// the link always carries the raw symbol so `^GSPC` still lands on
    /// the right quote page.
    pub fn from_quote(quote: &StockQuote) -> Self {
        let text = format!(
            "{} {} {}",
            quote.display_symbol(),
            quote.display_price(),
            quote.formatted_change()
        );
        Self::new(
            text,
            FeedItemKind::Stock,
            Some(format!("https://finance.yahoo.com/quote/{}", quote.symbol)),
        )
    }

    /// Build a news line from a story, keeping the story's own timestamp
    /// so news ordering reflects publication time, not ingest time.
    pub fn from_story(story: &NewsStory) -> Self {
        Self {
            id: Uuid::new_v4(),
            text: story.title.clone(),
            kind: FeedItemKind::News,
            timestamp: story.published_at,
            url: story.url.clone(),
            is_read: false,
        }
    }
}
