//! Read-history tracking for news stories.
//!
//! A story is identified by its url. Once marked read it is filtered out
//! of future news snapshots, so the ticker never re-surfaces a story the
//! user already opened. History is bounded: the store keeps the most
//! recent [`DEFAULT_HISTORY_CAPACITY`] urls and evicts the oldest first.
//!
//! Two implementations are provided:
//! - [`FileReadHistory`] - JSON file on disk, survives restarts
//! - [`MemoryReadHistory`] - process-local, for tests and demo mode

mod file;
mod memory;

pub use file::FileReadHistory;
pub use memory::MemoryReadHistory;

use std::collections::{HashSet, VecDeque};

use thiserror::Error;

use crate::errors::Result;

/// How many read urls are remembered before the oldest fall off.
pub const DEFAULT_HISTORY_CAPACITY: usize = 1000;

/// Errors from the read-history storage layer.
#[derive(Error, Debug)]
pub enum HistoryError {
    #[error("History file I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("History serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Tracks which story urls have been read.
///
/// Implementations are shared across the engine and its pollers, so all
/// methods take `&self` and synchronize internally.
pub trait ReadHistory: Send + Sync {
    /// Whether the url has been marked read.
    fn is_read(&self, url: &str) -> bool;

    /// Record a url as read. Marking an already-read url again is a
    /// no-op and does not grow the store.
    fn mark_read(&self, url: &str) -> Result<()>;

    /// Forget everything.
    fn clear(&self) -> Result<()>;

    /// Number of urls currently remembered.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Bounded insertion-ordered url set shared by both history stores.
///
/// `order` carries insertion order for FIFO eviction; `seen` makes
/// `contains` O(1). The two are kept in lockstep.
pub(crate) struct HistoryBuffer {
    order: VecDeque<String>,
    seen: HashSet<String>,
    capacity: usize,
}

impl HistoryBuffer {
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            order: VecDeque::new(),
            seen: HashSet::new(),
            capacity,
        }
    }

    /// Build from a stored url list, keeping the newest entries when the
    /// list is longer than the capacity.
    pub(crate) fn from_urls(urls: Vec<String>, capacity: usize) -> Self {
        let skip = urls.len().saturating_sub(capacity);
        let mut buffer = Self::new(capacity);
        for url in urls.into_iter().skip(skip) {
            buffer.insert(url);
        }
        buffer
    }

    pub(crate) fn contains(&self, url: &str) -> bool {
        self.seen.contains(url)
    }

    /// Insert a url, evicting the oldest entries past capacity.
    /// Returns `true` when the url was not already present.
    pub(crate) fn insert(&mut self, url: String) -> bool {
        if !self.seen.insert(url.clone()) {
            return false;
        }
        self.order.push_back(url);
        while self.order.len() > self.capacity {
            if let Some(evicted) = self.order.pop_front() {
                self.seen.remove(&evicted);
            }
        }
        true
    }

    pub(crate) fn clear(&mut self) {
        self.order.clear();
        self.seen.clear();
    }

    pub(crate) fn len(&self) -> usize {
        self.order.len()
    }

    /// Urls in insertion order, oldest first.
    pub(crate) fn urls(&self) -> impl Iterator<Item = &String> {
        self.order.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_buffer_evicts_oldest_past_capacity() {
        let mut buffer = HistoryBuffer::new(3);
        for url in ["a", "b", "c", "d"] {
            buffer.insert(url.to_string());
        }

        assert_eq!(buffer.len(), 3);
        assert!(!buffer.contains("a"));
        assert!(buffer.contains("b"));
        assert!(buffer.contains("d"));
    }

    #[test]
    fn test_buffer_duplicate_insert_does_not_grow() {
        let mut buffer = HistoryBuffer::new(3);
        assert!(buffer.insert("a".to_string()));
        assert!(!buffer.insert("a".to_string()));
        assert_eq!(buffer.len(), 1);
    }

    #[test]
    fn test_from_urls_keeps_the_newest_suffix() {
        let urls = (0..10).map(|i| format!("u{i}")).collect();
        let buffer = HistoryBuffer::from_urls(urls, 4);

        assert_eq!(buffer.len(), 4);
        assert!(!buffer.contains("u5"));
        assert!(buffer.contains("u6"));
        assert!(buffer.contains("u9"));
    }
}
