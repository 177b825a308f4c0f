//! Data provider abstractions and implementations.
//!
//! This module contains:
//! - The `QuoteProvider`, `NewsProvider` and `HeadlineProvider` traits
//! - Concrete provider implementations (Yahoo chart, Hacker News, Yahoo RSS)
//!
//! # Architecture
//!
//! The provider layer is designed to be:
//! - **Source-agnostic**: The feed engine only sees the traits
//! - **Best-effort**: Every fetch can fail; callers poll on a timer and
//!   fall back to demo data rather than surfacing errors to the feed
//! - **Partial-tolerant**: Multi-symbol fetches skip failing symbols
//!   instead of failing the whole batch

mod traits;

// Provider implementations
pub mod hacker_news;
pub mod yahoo_chart;
pub mod yahoo_headline;

// Re-exports
pub use traits::{HeadlineProvider, NewsProvider, QuoteProvider};
