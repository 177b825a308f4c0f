use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use log::warn;

use crate::errors::Result;
use crate::history::{HistoryBuffer, HistoryError, ReadHistory, DEFAULT_HISTORY_CAPACITY};

/// Read history persisted as a JSON array of urls.
///
/// The file is rewritten on every new mark, which is fine at ticker
/// scale (a handful of clicks per hour against a 1000-entry cap).
pub struct FileReadHistory {
    path: PathBuf,
    buffer: Mutex<HistoryBuffer>,
}

impl FileReadHistory {
    /// Open (or create) a history store at `path` with the default cap.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        Self::with_capacity(path, DEFAULT_HISTORY_CAPACITY)
    }

    pub fn with_capacity(path: impl Into<PathBuf>, capacity: usize) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(HistoryError::Io)?;
            }
        }
        let urls = Self::load(&path);
        Ok(Self {
            path,
            buffer: Mutex::new(HistoryBuffer::from_urls(urls, capacity)),
        })
    }

    /// Missing and unreadable files both load as empty. Read history is
    /// convenience state; refusing to start over a corrupt file would be
    /// worse than re-showing a few stories.
    fn load(path: &Path) -> Vec<String> {
        let bytes = match fs::read(path) {
            Ok(bytes) => bytes,
            Err(_) => return Vec::new(),
        };
        match serde_json::from_slice(&bytes) {
            Ok(urls) => urls,
            Err(err) => {
                warn!(
                    "discarding unreadable read history at {}: {err}",
                    path.display()
                );
                Vec::new()
            }
        }
    }

    fn persist(&self, buffer: &HistoryBuffer) -> Result<()> {
        let urls: Vec<&String> = buffer.urls().collect();
        let json = serde_json::to_vec(&urls).map_err(HistoryError::Serialize)?;
        fs::write(&self.path, json).map_err(HistoryError::Io)?;
        Ok(())
    }
}

impl ReadHistory for FileReadHistory {
    fn is_read(&self, url: &str) -> bool {
        self.buffer.lock().unwrap().contains(url)
    }

    fn mark_read(&self, url: &str) -> Result<()> {
        let mut buffer = self.buffer.lock().unwrap();
        if buffer.insert(url.to_string()) {
            self.persist(&buffer)?;
        }
        Ok(())
    }

    fn clear(&self) -> Result<()> {
        let mut buffer = self.buffer.lock().unwrap();
        buffer.clear();
        self.persist(&buffer)
    }

    fn len(&self) -> usize {
        self.buffer.lock().unwrap().len()
    }
}
