use std::sync::Arc;

use tickertape_market_data::{NewsStory, StockQuote};

use crate::feed::{FeedItem, FeedItemId, FeedItemKind};
use crate::history::ReadHistory;

/// Hard cap on the merged feed length.
pub const DEFAULT_MAX_ITEMS: usize = 50;

/// Merges per-source snapshots into one bounded, ordered feed.
///
/// Sources are ingested wholesale: a stock snapshot replaces every stock
/// item, a news snapshot replaces every news item. After each change the
/// feed is re-merged: stocks and news alternate starting with a stock,
/// remaining custom items follow, and the result is cut at the cap.
///
/// News is filtered against the read history on the way in; stocks are
/// deliberately not, since a quote stays relevant after being opened.
pub struct FeedAggregator {
    items: Vec<FeedItem>,
    history: Arc<dyn ReadHistory>,
    max_items: usize,
}

impl FeedAggregator {
    pub fn new(history: Arc<dyn ReadHistory>) -> Self {
        Self::with_max_items(history, DEFAULT_MAX_ITEMS)
    }

    pub fn with_max_items(history: Arc<dyn ReadHistory>, max_items: usize) -> Self {
        Self {
            items: Vec::new(),
            history,
            max_items,
        }
    }

    /// Replace all stock items with a fresh snapshot and re-merge.
    pub fn ingest_stock_snapshot(&mut self, quotes: &[StockQuote]) {
        self.items.retain(|item| item.kind != FeedItemKind::Stock);
        self.items.extend(quotes.iter().map(FeedItem::from_quote));
        self.remerge();
    }

    /// Replace all news items with a fresh snapshot and re-merge.
    ///
    /// Stories whose url is in the read history are excluded. Stories
    /// without a url pass through; they cannot be marked read, so they
    /// stay visible until the next snapshot replaces them.
    pub fn ingest_news_snapshot(&mut self, stories: &[NewsStory]) {
        let fresh: Vec<FeedItem> = stories
            .iter()
            .filter(|story| match &story.url {
                Some(url) => !self.history.is_read(url),
                None => true,
            })
            .map(FeedItem::from_story)
            .collect();

        self.items.retain(|item| item.kind != FeedItemKind::News);
        self.items.extend(fresh);
        self.remerge();
    }

    /// Append a one-off item (system notice, notification) and re-merge.
    /// Returns the new item's id.
    pub fn add_custom_item(&mut self, text: impl Into<String>, kind: FeedItemKind) -> FeedItemId {
        let item = FeedItem::new(text, kind, None);
        let id = item.id;
        self.items.push(item);
        self.remerge();
        id
    }

    /// Remove one item by id, returning it.
    ///
    /// Removal does not re-merge: the surviving items keep their current
    /// positions so the rotation cursor stays meaningful. A removed stock
    /// comes back on the next quote snapshot; a removed story stays away
    /// only if its url was marked read first.
    pub fn remove_item(&mut self, id: FeedItemId) -> Option<FeedItem> {
        let position = self.items.iter().position(|item| item.id == id)?;
        Some(self.items.remove(position))
    }

    /// Current merged feed, in display order.
    pub fn items(&self) -> &[FeedItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Rebuild display order from the current item set.
    ///
    /// Relative order within each kind is preserved. Stocks and news are
    /// zipped one-for-one starting with a stock; whichever source is
    /// longer trails its remainder. Custom items go last and are the
    /// first to fall off when the cap cuts the tail.
    fn remerge(&mut self) {
        let mut stocks = Vec::new();
        let mut news = Vec::new();
        let mut others = Vec::new();
        for item in self.items.drain(..) {
            match item.kind {
                FeedItemKind::Stock => stocks.push(item),
                FeedItemKind::News => news.push(item),
                _ => others.push(item),
            }
        }

        let mut merged = Vec::with_capacity(stocks.len() + news.len() + others.len());
        let rounds = stocks.len().max(news.len());
        let mut stocks = stocks.into_iter();
        let mut news = news.into_iter();
        for _ in 0..rounds {
            if let Some(stock) = stocks.next() {
                merged.push(stock);
            }
            if let Some(story) = news.next() {
                merged.push(story);
            }
        }
        merged.extend(others);
        merged.truncate(self.max_items);

        self.items = merged;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::history::MemoryReadHistory;

    fn make_aggregator() -> FeedAggregator {
        FeedAggregator::new(Arc::new(MemoryReadHistory::new()))
    }

    fn quote(symbol: &str) -> StockQuote {
        StockQuote::new(symbol, 100.0, 1.0, 1.0)
    }

    fn story(title: &str, url: Option<&str>) -> NewsStory {
        NewsStory::new(
            title,
            "Hacker News",
            url.map(str::to_string),
            chrono::Utc::now(),
        )
    }

    fn kinds(aggregator: &FeedAggregator) -> Vec<FeedItemKind> {
        aggregator.items().iter().map(|item| item.kind).collect()
    }

    #[test]
    fn test_merge_interleaves_starting_with_stocks() {
        let mut aggregator = make_aggregator();
        aggregator.ingest_stock_snapshot(&[quote("A"), quote("B"), quote("C")]);
        aggregator.ingest_news_snapshot(&[story("X", Some("https://example.com/x"))]);

        let texts: Vec<&str> = aggregator
            .items()
            .iter()
            .map(|item| item.text.as_str())
            .collect();
        assert_eq!(texts, vec!["A $100.00 +1.0%", "X", "B $100.00 +1.0%", "C $100.00 +1.0%"]);
    }

    #[test]
    fn test_merge_alternates_when_sources_are_even() {
        let mut aggregator = make_aggregator();
        aggregator.ingest_stock_snapshot(&[quote("A"), quote("B")]);
        aggregator.ingest_news_snapshot(&[
            story("X", Some("https://example.com/x")),
            story("Y", Some("https://example.com/y")),
        ]);

        assert_eq!(
            kinds(&aggregator),
            vec![
                FeedItemKind::Stock,
                FeedItemKind::News,
                FeedItemKind::Stock,
                FeedItemKind::News,
            ]
        );
    }

    #[test]
    fn test_news_only_feed_is_just_news() {
        let mut aggregator = make_aggregator();
        aggregator.ingest_news_snapshot(&[
            story("X", Some("https://example.com/x")),
            story("Y", Some("https://example.com/y")),
        ]);

        assert_eq!(aggregator.len(), 2);
        assert!(aggregator.items().iter().all(|i| i.kind == FeedItemKind::News));
    }

    #[test]
    fn test_reingest_replaces_the_source_wholesale() {
        let mut aggregator = make_aggregator();
        aggregator.ingest_stock_snapshot(&[quote("A"), quote("B"), quote("C")]);
        aggregator.ingest_stock_snapshot(&[quote("D")]);

        assert_eq!(aggregator.len(), 1);
        assert_eq!(aggregator.items()[0].text, "D $100.00 +1.0%");
    }

    #[test]
    fn test_custom_items_go_after_the_interleave() {
        let mut aggregator = make_aggregator();
        aggregator.add_custom_item("starting up", FeedItemKind::System);
        aggregator.ingest_stock_snapshot(&[quote("A")]);
        aggregator.ingest_news_snapshot(&[story("X", Some("https://example.com/x"))]);

        assert_eq!(
            kinds(&aggregator),
            vec![FeedItemKind::Stock, FeedItemKind::News, FeedItemKind::System]
        );
    }

    #[test]
    fn test_feed_is_capped() {
        let mut aggregator = make_aggregator();
        let quotes: Vec<StockQuote> = (0..30).map(|i| quote(&format!("S{i}"))).collect();
        let stories: Vec<NewsStory> = (0..30)
            .map(|i| {
                let url = format!("https://example.com/{i}");
                story(&format!("N{i}"), Some(url.as_str()))
            })
            .collect();

        aggregator.ingest_stock_snapshot(&quotes);
        aggregator.ingest_news_snapshot(&stories);

        assert_eq!(aggregator.len(), DEFAULT_MAX_ITEMS);
    }

    #[test]
    fn test_read_stories_are_filtered_out() {
        let history = Arc::new(MemoryReadHistory::new());
        history.mark_read("https://example.com/read").unwrap();
        let mut aggregator = FeedAggregator::new(history);

        aggregator.ingest_news_snapshot(&[
            story("Read", Some("https://example.com/read")),
            story("Fresh", Some("https://example.com/fresh")),
        ]);

        assert_eq!(aggregator.len(), 1);
        assert_eq!(aggregator.items()[0].text, "Fresh");
    }

    #[test]
    fn test_stories_without_url_pass_the_filter() {
        let mut aggregator = make_aggregator();
        aggregator.ingest_news_snapshot(&[story("No Link", None)]);
        assert_eq!(aggregator.len(), 1);
    }

    #[test]
    fn test_stock_ingest_ignores_read_history() {
        let history = Arc::new(MemoryReadHistory::new());
        history
            .mark_read("https://finance.yahoo.com/quote/AAPL")
            .unwrap();
        let mut aggregator = FeedAggregator::new(history);

        aggregator.ingest_stock_snapshot(&[quote("AAPL")]);
        assert_eq!(aggregator.len(), 1);
    }

    #[test]
    fn test_remove_returns_the_item_without_reordering() {
        let mut aggregator = make_aggregator();
        aggregator.ingest_stock_snapshot(&[quote("A"), quote("B"), quote("C")]);
        let removed_id = aggregator.items()[1].id;

        let removed = aggregator.remove_item(removed_id).unwrap();
        assert_eq!(removed.text, "B $100.00 +1.0%");

        let texts: Vec<&str> = aggregator
            .items()
            .iter()
            .map(|item| item.text.as_str())
            .collect();
        assert_eq!(texts, vec!["A $100.00 +1.0%", "C $100.00 +1.0%"]);
    }

    #[test]
    fn test_remove_unknown_id_is_none() {
        let mut aggregator = make_aggregator();
        aggregator.ingest_stock_snapshot(&[quote("A")]);
        assert!(aggregator.remove_item(uuid::Uuid::new_v4()).is_none());
        assert_eq!(aggregator.len(), 1);
    }
}
