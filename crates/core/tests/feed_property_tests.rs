//! Property-based integration tests for the feed merge and rotation.
//!
//! These tests verify that universal properties hold across all valid inputs,
//! using the `proptest` crate for random test case generation.

use std::collections::HashSet;
use std::sync::Arc;

use proptest::prelude::*;
use tickertape_core::feed::{FeedAggregator, FeedItem, FeedItemKind, DEFAULT_MAX_ITEMS};
use tickertape_core::history::{MemoryReadHistory, ReadHistory};
use tickertape_core::rotation::{RotationController, WindowMode};
use tickertape_market_data::{NewsStory, StockQuote};

// =============================================================================
// Generators
// =============================================================================

/// Generates a random stock quote with a plausible shape.
fn arb_quote() -> impl Strategy<Value = StockQuote> {
    (
        "[A-Z]{1,5}",      // symbol
        0.01f64..10_000.0, // price
        -500.0f64..500.0,  // change
        -50.0f64..50.0,    // change_percent
    )
        .prop_map(|(symbol, price, change, change_percent)| {
            StockQuote::new(symbol, price, change, change_percent)
        })
}

/// Generates a random news story; roughly a third carry no link.
fn arb_story() -> impl Strategy<Value = NewsStory> {
    (
        "[a-z ]{5,40}",                          // title
        proptest::option::weighted(0.7, 0u32..100_000), // url suffix
    )
        .prop_map(|(title, url_suffix)| {
            let url = url_suffix.map(|n| format!("https://example.com/story/{n}"));
            NewsStory::new(title, "Wire", url, chrono::Utc::now())
        })
}

fn arb_quotes(max_count: usize) -> impl Strategy<Value = Vec<StockQuote>> {
    proptest::collection::vec(arb_quote(), 0..=max_count)
}

fn arb_stories(max_count: usize) -> impl Strategy<Value = Vec<NewsStory>> {
    proptest::collection::vec(arb_story(), 0..=max_count)
}

/// Generates a random window mode, biased toward the adaptive default.
fn arb_window_mode() -> impl Strategy<Value = WindowMode> {
    prop_oneof![
        2 => Just(WindowMode::Adaptive),
        1 => (1usize..6).prop_map(WindowMode::Fixed),
    ]
}

fn fresh_aggregator() -> FeedAggregator {
    FeedAggregator::new(Arc::new(MemoryReadHistory::new()))
}

/// Drive one begin/complete rotation cycle, returning the new cursor.
fn advance(controller: &mut RotationController, items: &[FeedItem]) -> Option<usize> {
    if !controller.begin_transition(items) {
        return None;
    }
    controller.complete_transition(items)
}

// =============================================================================
// Property Tests
// =============================================================================

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// **Feature: feed-merge, Property 1: The feed never exceeds its cap**
    ///
    /// However many quotes and stories are ingested, in whatever order,
    /// the merged feed holds at most DEFAULT_MAX_ITEMS entries.
    #[test]
    fn prop_feed_never_exceeds_the_cap(
        quotes in arb_quotes(80),
        stories in arb_stories(80),
    ) {
        let mut aggregator = fresh_aggregator();
        aggregator.ingest_stock_snapshot(&quotes);
        aggregator.ingest_news_snapshot(&stories);

        prop_assert!(
            aggregator.len() <= DEFAULT_MAX_ITEMS,
            "feed holds {} items, cap is {}",
            aggregator.len(),
            DEFAULT_MAX_ITEMS
        );
    }

    /// **Feature: feed-merge, Property 2: Stocks and news alternate from the front**
    ///
    /// While both kinds remain, the merged feed strictly alternates
    /// starting with a stock; once one side runs out, the rest of the
    /// feed is the other kind.
    #[test]
    fn prop_stocks_and_news_alternate_from_the_front(
        quotes in arb_quotes(20),
        stories in arb_stories(20),
    ) {
        let mut aggregator = fresh_aggregator();
        aggregator.ingest_stock_snapshot(&quotes);
        aggregator.ingest_news_snapshot(&stories);

        let stock_count = quotes.len();
        let news_count = stories.len();
        let paired = 2 * stock_count.min(news_count);

        for (index, item) in aggregator.items().iter().enumerate() {
            let expected = if index < paired {
                if index % 2 == 0 {
                    FeedItemKind::Stock
                } else {
                    FeedItemKind::News
                }
            } else if stock_count > news_count {
                FeedItemKind::Stock
            } else {
                FeedItemKind::News
            };
            prop_assert_eq!(
                item.kind,
                expected,
                "item {} has kind {:?}",
                index,
                item.kind
            );
        }
    }

    /// **Feature: feed-merge, Property 3: A snapshot replaces, never accumulates**
    ///
    /// Ingesting a second stock snapshot leaves exactly that snapshot's
    /// quotes in the feed, regardless of what the first one held.
    #[test]
    fn prop_reingest_replaces_the_previous_snapshot(
        first in arb_quotes(25),
        second in arb_quotes(25),
    ) {
        let mut aggregator = fresh_aggregator();
        aggregator.ingest_stock_snapshot(&first);
        aggregator.ingest_stock_snapshot(&second);

        prop_assert_eq!(aggregator.len(), second.len());

        let expected: Vec<String> = second
            .iter()
            .map(|quote| {
                format!(
                    "{} {} {}",
                    quote.display_symbol(),
                    quote.display_price(),
                    quote.formatted_change()
                )
            })
            .collect();
        let actual: Vec<String> = aggregator
            .items()
            .iter()
            .map(|item| item.text.clone())
            .collect();
        prop_assert_eq!(actual, expected);
    }

    /// **Feature: feed-merge, Property 4: Read links never surface**
    ///
    /// Stories whose url was marked read are dropped on ingest; stories
    /// without a url always pass, since they can never be marked read.
    #[test]
    fn prop_read_urls_never_surface(
        stories in arb_stories(40),
        read_mask in proptest::collection::vec(any::<bool>(), 40),
    ) {
        let history = Arc::new(MemoryReadHistory::new());
        let mut read_urls = HashSet::new();
        for (story, read) in stories.iter().zip(read_mask.iter()) {
            if let (Some(url), true) = (story.url.as_ref(), *read) {
                history.mark_read(url).unwrap();
                read_urls.insert(url.clone());
            }
        }

        let mut aggregator = FeedAggregator::new(history);
        aggregator.ingest_news_snapshot(&stories);

        for item in aggregator.items() {
            if let Some(url) = &item.url {
                prop_assert!(
                    !read_urls.contains(url),
                    "read url {} surfaced in the feed",
                    url
                );
            }
        }

        let expected_count = stories
            .iter()
            .filter(|story| match &story.url {
                Some(url) => !read_urls.contains(url),
                None => true,
            })
            .count();
        prop_assert_eq!(aggregator.len(), expected_count.min(DEFAULT_MAX_ITEMS));
    }

    /// **Feature: rotation, Property 5: News always rides alone**
    ///
    /// In adaptive mode, no window containing a news item ever holds a
    /// second item.
    #[test]
    fn prop_news_always_rides_alone(
        quotes in arb_quotes(15),
        stories in proptest::collection::vec(arb_story(), 1..=15),
        steps in 0usize..40,
    ) {
        let mut aggregator = fresh_aggregator();
        aggregator.ingest_stock_snapshot(&quotes);
        aggregator.ingest_news_snapshot(&stories);

        let mut controller = RotationController::new(WindowMode::Adaptive);
        for _ in 0..steps {
            let window = controller.current_window(aggregator.items());
            if window.items.iter().any(|item| item.kind == FeedItemKind::News) {
                prop_assert_eq!(
                    window.items.len(),
                    1,
                    "news shared a window of {} items",
                    window.items.len()
                );
            }
            advance(&mut controller, aggregator.items());
        }
    }

    /// **Feature: rotation, Property 6: Window sizes stay within mode bounds**
    ///
    /// A non-empty feed always yields a non-empty window, no larger
    /// than two items in adaptive mode or the configured size in fixed
    /// mode, and never larger than the feed.
    #[test]
    fn prop_window_size_stays_within_bounds(
        quotes in proptest::collection::vec(arb_quote(), 1..=30),
        stories in arb_stories(30),
        mode in arb_window_mode(),
        steps in 0usize..30,
    ) {
        let mut aggregator = fresh_aggregator();
        aggregator.ingest_stock_snapshot(&quotes);
        aggregator.ingest_news_snapshot(&stories);

        let limit = match mode {
            WindowMode::Adaptive => 2,
            WindowMode::Fixed(size) => size.max(1),
        };

        let mut controller = RotationController::new(mode);
        for _ in 0..=steps {
            let window = controller.current_window(aggregator.items());
            prop_assert!(!window.items.is_empty());
            prop_assert!(window.items.len() <= limit.min(aggregator.len()).max(1));
            advance(&mut controller, aggregator.items());
        }
    }

    /// **Feature: rotation, Property 7: A full cycle shows every item**
    ///
    /// Each advance moves the cursor by exactly the window it showed,
    /// so windows tile the feed contiguously and driving as many
    /// advances as there are items shows each item at least once.
    #[test]
    fn prop_full_cycle_shows_every_item(
        quotes in proptest::collection::vec(arb_quote(), 1..=20),
        stories in arb_stories(20),
        mode in arb_window_mode(),
    ) {
        let mut aggregator = fresh_aggregator();
        aggregator.ingest_stock_snapshot(&quotes);
        aggregator.ingest_news_snapshot(&stories);
        let count = aggregator.len();

        let mut controller = RotationController::new(mode);
        let mut seen = HashSet::new();

        for _ in 0..count {
            let window = controller.current_window(aggregator.items());
            for item in &window.items {
                seen.insert(item.id);
            }
            advance(&mut controller, aggregator.items());
        }

        prop_assert_eq!(
            seen.len(),
            count,
            "cycle of {} advances showed {} of {} items",
            count,
            seen.len(),
            count
        );
    }

    /// **Feature: rotation, Property 8: Completing without beginning is inert**
    ///
    /// A completion with no transition in flight reports nothing and
    /// leaves the cursor alone.
    #[test]
    fn prop_complete_without_begin_is_inert(
        quotes in proptest::collection::vec(arb_quote(), 1..=20),
        completions in 1usize..5,
    ) {
        let mut aggregator = fresh_aggregator();
        aggregator.ingest_stock_snapshot(&quotes);

        let mut controller = RotationController::new(WindowMode::Adaptive);
        let before = controller.cursor();
        for _ in 0..completions {
            prop_assert_eq!(controller.complete_transition(aggregator.items()), None);
        }
        prop_assert_eq!(controller.cursor(), before);
    }

    /// **Feature: rotation, Property 9: Pinning freezes the window on one item**
    ///
    /// Whatever item is pinned, the window shows exactly that item and
    /// rotation refuses to start until it is released.
    #[test]
    fn prop_pin_freezes_the_window(
        quotes in proptest::collection::vec(arb_quote(), 1..=20),
        pick in any::<proptest::sample::Index>(),
    ) {
        let mut aggregator = fresh_aggregator();
        aggregator.ingest_stock_snapshot(&quotes);
        let items: Vec<FeedItem> = aggregator.items().to_vec();
        let target = pick.get(&items);

        let mut controller = RotationController::new(WindowMode::Adaptive);
        prop_assert!(controller.pin(target.id, &items));

        let window = controller.current_window(&items);
        prop_assert_eq!(window.items.len(), 1);
        prop_assert_eq!(window.items[0].id, target.id);
        prop_assert_eq!(window.pinned, Some(target.id));

        prop_assert!(!controller.begin_transition(&items));

        prop_assert!(controller.unpin());
        prop_assert!(controller.begin_transition(&items));
    }

    /// **Feature: rotation, Property 10: A shrinking feed never strands the cursor**
    ///
    /// After advancing through a large feed and replacing it with a
    /// smaller one, the cursor still resolves to a valid window.
    #[test]
    fn prop_shrinking_feed_never_strands_the_cursor(
        large in proptest::collection::vec(arb_quote(), 10..=30),
        small in proptest::collection::vec(arb_quote(), 1..=5),
        spins in 1usize..20,
    ) {
        let mut aggregator = fresh_aggregator();
        aggregator.ingest_stock_snapshot(&large);

        let mut controller = RotationController::new(WindowMode::Adaptive);
        for _ in 0..spins {
            advance(&mut controller, aggregator.items());
        }

        aggregator.ingest_stock_snapshot(&small);
        let window = controller.current_window(aggregator.items());

        prop_assert!(!window.items.is_empty());
        let feed_ids: HashSet<_> = aggregator.items().iter().map(|item| item.id).collect();
        for item in &window.items {
            prop_assert!(feed_ids.contains(&item.id));
        }
    }
}
