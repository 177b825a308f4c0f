//! Core error types for the Tickertape engine.
//!
//! Provider errors never reach this type; pollers absorb them and fall
//! back to demo data. What remains is local state: the read-history file
//! and the engine lifecycle.

use thiserror::Error;

use crate::history::HistoryError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the ticker engine.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Read history operation failed: {0}")]
    History(#[from] HistoryError),

    /// The engine worker has shut down and no longer accepts commands.
    #[error("Engine is stopped")]
    EngineStopped,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_stopped_display() {
        assert_eq!(Error::EngineStopped.to_string(), "Engine is stopped");
    }
}
