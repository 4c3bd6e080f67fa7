//! Fetch Module
//!
//! Looks URLs up in the cache before going to the network, and caches
//! successful responses.

mod cached;
mod http;

pub use cached::{CachedFetcher, FetchOutcome};
pub use http::HttpFetcher;

use std::future::Future;

use crate::error::Result;

// == Fetcher Trait ==
/// Source of response bodies keyed by URL.
pub trait Fetcher: Send + Sync {
    /// Retrieves the body at `url`.
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Vec<u8>>> + Send;
}
