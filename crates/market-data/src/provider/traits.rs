//! Provider trait definitions.
//!
//! This module defines the traits the feed engine polls against. All of
//! them are object-safe so engines can hold `Arc<dyn QuoteProvider>` and
//! friends without knowing the concrete source.

use async_trait::async_trait;

use crate::errors::SourceError;
use crate::models::{NewsStory, StockQuote};

/// Trait for sources of stock and index quotes.
///
/// Implement this trait to feed quotes from a new source into the ticker.
///
/// # Example
///
/// ```ignore
/// use async_trait::async_trait;
/// use tickertape_market_data::{QuoteProvider, SourceError, StockQuote};
///
/// struct MyProvider;
///
/// #[async_trait]
/// impl QuoteProvider for MyProvider {
///     fn id(&self) -> &'static str {
///         "MY_PROVIDER"
///     }
///
///     async fn fetch_quotes(&self, symbols: &[String]) -> Result<Vec<StockQuote>, SourceError> {
///         // ... fetch and decode
///         Ok(Vec::new())
///     }
/// }
/// ```
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "YAHOO_CHART".
    /// Used for logging and error attribution.
    fn id(&self) -> &'static str;

    /// Fetch current quotes for the given symbols.
    ///
    /// # Arguments
    ///
    /// * `symbols` - Ticker symbols in display order; index symbols carry
    ///   a `^` prefix and are requested the same way as equities
    ///
    /// # Returns
    ///
    /// Quotes in the same order as `symbols`. Symbols that fail to fetch
    /// are skipped, so the result may be shorter than the request. An
    /// `Err` means the whole batch failed.
    async fn fetch_quotes(&self, symbols: &[String]) -> Result<Vec<StockQuote>, SourceError>;
}

/// Trait for sources of general news headlines.
#[async_trait]
pub trait NewsProvider: Send + Sync {
    /// Unique identifier for this provider.
    fn id(&self) -> &'static str;

    /// Fetch the current set of headlines, newest first.
    ///
    /// Stories that fail to load individually are skipped; an `Err` means
    /// the story listing itself could not be fetched.
    async fn fetch_news(&self) -> Result<Vec<NewsStory>, SourceError>;
}

/// Trait for one-line context about a single symbol.
///
/// Used when an item is focused: the ticker shows one extra line under
/// the pinned quote, sourced from a per-symbol news feed or derived from
/// quote statistics when no story is available.
#[async_trait]
pub trait HeadlineProvider: Send + Sync {
    /// Unique identifier for this provider.
    fn id(&self) -> &'static str;

    /// Fetch a single headline for the given symbol.
    ///
    /// Returns `Ok(None)` when the source has nothing to say about the
    /// symbol; that is not an error.
    async fn fetch_headline(&self, symbol: &str) -> Result<Option<String>, SourceError>;
}
