//! Error types for the market data crate.
//!
//! This module provides [`SourceError`], the error enum shared by all
//! quote, news and headline providers.

use thiserror::Error;

/// Errors that can occur while fetching data from an external source.
///
/// Providers are polled on a timer and every fetch is best-effort, so
/// callers typically log these errors and fall back to demo data rather
/// than propagating them. The [`is_transient`](Self::is_transient) method
/// distinguishes network hiccups from payloads the provider will keep
/// rejecting.
#[derive(Error, Debug)]
pub enum SourceError {
    /// The HTTP request itself failed (connect, timeout, TLS, non-2xx status).
    #[error("Network error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be deserialized into the expected shape.
    #[error("Decode error from {provider}: {message}")]
    Decode {
        /// The provider that returned the payload
        provider: String,
        /// Description of the deserialization failure
        message: String,
    },

    /// An RSS/Atom feed could not be parsed.
    #[error("Feed parse error from {provider}: {message}")]
    Feed {
        /// The provider that returned the feed
        provider: String,
        /// Description of the parse failure
        message: String,
    },

    /// The payload parsed but did not carry the data we asked for,
    /// or carried an explicit error object.
    #[error("Invalid response from {provider}: {message}")]
    InvalidResponse {
        /// The provider that returned the response
        provider: String,
        /// Description of what was missing or wrong
        message: String,
    },
}

impl SourceError {
    /// Returns `true` when retrying the same request later may succeed.
    ///
    /// Network failures are transient; a payload that failed to decode or
    /// carried an explicit error will keep failing until the upstream API
    /// changes, so those are not worth retrying eagerly.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Http(_))
    }

    /// Returns the provider identifier attached to the error, if one is known.
    pub fn provider(&self) -> Option<&str> {
        match self {
            Self::Http(_) => None,
            Self::Decode { provider, .. }
            | Self::Feed { provider, .. }
            | Self::InvalidResponse { provider, .. } => Some(provider),
        }
    }
}
