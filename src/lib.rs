//! Pokecache - an in-memory TTL cache for HTTP response bodies
//!
//! Entries expire a fixed interval after insertion and are removed by a
//! background reaper that can be shut down explicitly.

pub mod cache;
pub mod cli;
pub mod config;
pub mod error;
pub mod fetch;
pub mod tasks;

pub use cache::TtlCache;
pub use config::Config;
pub use error::{CacheError, Result};
pub use fetch::{CachedFetcher, FetchOutcome, Fetcher, HttpFetcher};
