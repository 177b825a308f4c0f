//! Tickertape Market Data Crate
//!
//! This crate provides provider-agnostic market and news data fetching
//! capabilities for the Tickertape feed engine.
//!
//! # Overview
//!
//! The market data crate supports:
//! - Stock and index quotes from the Yahoo Finance chart API
//! - Headlines from the Hacker News firebase API
//! - Per-symbol headlines from the Yahoo Finance RSS feed, with a
//!   quote-derived sentiment line as fallback
//! - Built-in demo data for offline operation
//!
//! # Architecture
//!
//! ```text
//! +------------------+     +------------------+
//! |   Feed Engine    | --> |  QuoteProvider   |  (symbols -> StockQuote)
//! +------------------+     +------------------+
//!         |
//!         v
//! +------------------+     +------------------+
//! |  NewsProvider    | --> |    NewsStory     |  (headline + source + url)
//! +------------------+     +------------------+
//!         |
//!         v
//! +------------------+
//! | HeadlineProvider |  (one-line context for a focused symbol)
//! +------------------+
//! ```
//!
//! # Core Types
//!
//! - [`StockQuote`] - Snapshot price, change and volume for one symbol
//! - [`NewsStory`] - A single headline with source attribution
//! - [`ChangeDirection`] - Up/down classification of a quote move
//!
//! Providers are fallible and network-bound; callers are expected to treat
//! every fetch as best-effort and fall back to [`demo`] data when a source
//! is unreachable.

pub mod demo;
pub mod errors;
pub mod models;
pub mod provider;

// Re-export all public types from models
pub use models::{ChangeDirection, NewsStory, StockQuote};

// Re-export provider types
pub use provider::hacker_news::HackerNewsProvider;
pub use provider::yahoo_chart::YahooChartProvider;
pub use provider::yahoo_headline::YahooHeadlineProvider;
pub use provider::{HeadlineProvider, NewsProvider, QuoteProvider};

// Re-export error types
pub use errors::SourceError;
