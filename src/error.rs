//! Error types for the cache
//!
//! Provides unified error handling using thiserror.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for the cache and its fetch collaborator.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Interval was zero
    #[error("Invalid interval: {0}")]
    InvalidInterval(String),

    /// No tokio runtime to host the reaper
    #[error("No tokio runtime available to run the reaper")]
    RuntimeUnavailable,

    /// Transport failure talking to the upstream API
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Upstream answered with a non-success status
    #[error("Upstream returned {status} for {url}")]
    UpstreamStatus { url: String, status: u16 },

    /// Unparseable REPL input
    #[error("Invalid command: {0}")]
    InvalidCommand(String),
}

// == Result Type Alias ==
/// Convenience Result type for the cache.
pub type Result<T> = std::result::Result<T, CacheError>;
