//! Cache-first fetching.

use tracing::{debug, info};

use super::Fetcher;
use crate::cache::TtlCache;
use crate::error::Result;

/// Where a fetched body came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchOutcome {
    Hit,
    Miss,
}

/// Wraps a [`Fetcher`] with a [`TtlCache`] keyed by URL.
#[derive(Debug)]
pub struct CachedFetcher<F> {
    cache: TtlCache,
    fetcher: F,
}

impl<F: Fetcher> CachedFetcher<F> {
    pub fn new(cache: TtlCache, fetcher: F) -> Self {
        Self { cache, fetcher }
    }

    pub fn cache(&self) -> &TtlCache {
        &self.cache
    }

    // == Fetch ==
    /// Returns the cached body for `url`, or fetches and caches it.
    ///
    /// Failed fetches are returned as-is and leave the cache untouched.
    pub async fn fetch(&self, url: &str) -> Result<(Vec<u8>, FetchOutcome)> {
        if let Some(body) = self.cache.get(url).await {
            info!("Cache hit: {}", url);
            return Ok((body, FetchOutcome::Hit));
        }

        debug!("Cache miss, fetching: {}", url);
        let body = self.fetcher.fetch(url).await?;
        self.cache.add(url, body.clone()).await;

        Ok((body, FetchOutcome::Miss))
    }

    /// Stops the underlying cache's reaper.
    pub async fn close(&self) {
        self.cache.close().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::CacheError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    /// Counts calls and echoes the URL back, failing for URLs containing "fail"
    #[derive(Default)]
    struct CountingFetcher {
        calls: AtomicUsize,
    }

    impl Fetcher for CountingFetcher {
        async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if url.contains("fail") {
                return Err(CacheError::UpstreamStatus {
                    url: url.to_string(),
                    status: 500,
                });
            }
            Ok(url.as_bytes().to_vec())
        }
    }

    fn cached_fetcher() -> CachedFetcher<CountingFetcher> {
        let cache = TtlCache::new(Duration::from_secs(60)).unwrap();
        CachedFetcher::new(cache, CountingFetcher::default())
    }

    #[tokio::test]
    async fn test_second_fetch_is_served_from_cache() {
        let fetcher = cached_fetcher();
        let url = "https://pokeapi.co/api/v2/location-area/1/";

        let (first, outcome) = fetcher.fetch(url).await.unwrap();
        assert_eq!(outcome, FetchOutcome::Miss);

        let (second, outcome) = fetcher.fetch(url).await.unwrap();
        assert_eq!(outcome, FetchOutcome::Hit);

        assert_eq!(first, second);
        assert_eq!(fetcher.fetcher.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_errors_are_not_cached() {
        let fetcher = cached_fetcher();
        let url = "https://pokeapi.co/fail";

        assert!(fetcher.fetch(url).await.is_err());
        assert!(fetcher.fetch(url).await.is_err());

        assert_eq!(fetcher.fetcher.calls.load(Ordering::SeqCst), 2);
        assert!(fetcher.cache().is_empty().await);
    }

    #[tokio::test]
    async fn test_prepopulated_entry_skips_network() {
        let fetcher = cached_fetcher();
        fetcher.cache().add("https://x", b"cached".to_vec()).await;

        let (body, outcome) = fetcher.fetch("https://x").await.unwrap();

        assert_eq!(body, b"cached");
        assert_eq!(outcome, FetchOutcome::Hit);
        assert_eq!(fetcher.fetcher.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_close_passes_through() {
        let fetcher = cached_fetcher();
        fetcher.close().await;
        assert!(fetcher.cache().is_closed());
    }
}
