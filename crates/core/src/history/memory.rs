use std::sync::Mutex;

use crate::errors::Result;
use crate::history::{HistoryBuffer, ReadHistory, DEFAULT_HISTORY_CAPACITY};

/// Process-local read history. Used in demo mode and in tests.
pub struct MemoryReadHistory {
    buffer: Mutex<HistoryBuffer>,
}

impl MemoryReadHistory {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_HISTORY_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: Mutex::new(HistoryBuffer::new(capacity)),
        }
    }
}

impl Default for MemoryReadHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl ReadHistory for MemoryReadHistory {
    fn is_read(&self, url: &str) -> bool {
        self.buffer.lock().unwrap().contains(url)
    }

    fn mark_read(&self, url: &str) -> Result<()> {
        self.buffer.lock().unwrap().insert(url.to_string());
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        self.buffer.lock().unwrap().clear();
        Ok(())
    }

    fn len(&self) -> usize {
        self.buffer.lock().unwrap().len()
    }
}
