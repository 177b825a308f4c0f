//! Built-in demo data.
//!
//! Pollers fall back to these fixtures when a source is unreachable, so
//! the ticker always has something to show. Values are static except for
//! timestamps, which are anchored to the current time so demo news still
//! sorts newest first.

use chrono::{Duration, Utc};

use crate::models::{NewsStory, StockQuote};

/// Demo equity quotes.
pub fn quotes() -> Vec<StockQuote> {
    vec![
        StockQuote {
            symbol: "AAPL".to_string(),
            price: 235.45,
            change: 2.34,
            change_percent: 1.02,
            volume: Some(52_341_234),
        },
        StockQuote {
            symbol: "GOOGL".to_string(),
            price: 178.23,
            change: -1.45,
            change_percent: -0.81,
            volume: Some(23_456_789),
        },
        StockQuote {
            symbol: "MSFT".to_string(),
            price: 456.78,
            change: 5.67,
            change_percent: 1.26,
            volume: Some(34_567_890),
        },
        StockQuote {
            symbol: "TSLA".to_string(),
            price: 267.89,
            change: -8.90,
            change_percent: -3.21,
            volume: Some(45_678_901),
        },
    ]
}

/// Demo index quotes; indices carry no volume.
pub fn indices() -> Vec<StockQuote> {
    vec![
        StockQuote::new("^GSPC", 5823.45, 12.34, 0.21),
        StockQuote::new("^DJI", 42156.78, -145.23, -0.34),
        StockQuote::new("^IXIC", 18234.56, 78.90, 0.43),
        StockQuote::new("^VIX", 15.67, 0.45, 2.95),
    ]
}

/// Demo headlines, spaced an hour apart so ordering stays visible.
pub fn news() -> Vec<NewsStory> {
    let now = Utc::now();
    vec![
        NewsStory::new("Apple Announces New AI Features", "TechCrunch", None, now),
        NewsStory::new(
            "Stock Market Hits New Highs",
            "Bloomberg",
            None,
            now - Duration::hours(1),
        ),
        NewsStory::new(
            "SpaceX Successfully Launches Mission",
            "SpaceNews",
            None,
            now - Duration::hours(2),
        ),
        NewsStory::new(
            "New Programming Language Released",
            "GitHub Blog",
            None,
            now - Duration::hours(3),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_news_is_newest_first() {
        let stories = news();
        for pair in stories.windows(2) {
            assert!(pair[0].published_at >= pair[1].published_at);
        }
    }

    #[test]
    fn test_demo_indices_are_indices() {
        assert!(indices().iter().all(|q| q.is_index()));
        assert!(indices().iter().all(|q| q.volume.is_none()));
    }
}
