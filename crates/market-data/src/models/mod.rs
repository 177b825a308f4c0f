//! Market data models
//!
//! This module contains the core data types for market and news data:
//! - `quote` - Stock quote snapshot (StockQuote, ChangeDirection)
//! - `news` - News headline data (NewsStory)

mod news;
mod quote;

pub use news::NewsStory;
pub use quote::{ChangeDirection, StockQuote};
