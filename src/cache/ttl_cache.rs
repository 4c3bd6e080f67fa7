//! TTL Cache Handle
//!
//! The public face of the cache: a lock-protected [`CacheStore`] plus the
//! reaper task that keeps it trimmed.

use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::cache::{CacheStats, CacheStore};
use crate::error::{CacheError, Result};
use crate::tasks::spawn_reaper_task;

// == TTL Cache ==
/// In-memory byte cache whose entries are discarded once older than a fixed
/// interval.
///
/// `add`, `get` and every reaper pass serialize on one mutex. Expiry is
/// eventually consistent: an entry may remain readable for up to one extra
/// interval after it logically expires, because only the reaper removes it.
///
/// `get` hands back an owned copy of the stored bytes, so callers can never
/// mutate the cached value.
///
/// After [`close`](Self::close) the reaper is gone but the table is not:
/// `add` and `get` keep working and entries simply stop expiring. Dropping the
/// handle also stops the reaper.
#[derive(Debug)]
pub struct TtlCache {
    store: Arc<Mutex<CacheStore>>,
    interval: Duration,
    shutdown: CancellationToken,
    reaper: Mutex<Option<JoinHandle<()>>>,
}

impl TtlCache {
    // == Constructor ==
    /// Creates an empty cache and starts its reaper.
    ///
    /// `interval` is both the maximum entry age and the reaper period.
    ///
    /// # Errors
    /// - [`CacheError::InvalidInterval`] if `interval` is zero
    /// - [`CacheError::RuntimeUnavailable`] if called outside a tokio runtime
    ///
    /// # Panics
    /// Panics if the current runtime was built without the time driver
    /// (`enable_time` / `enable_all`), since the reaper needs a timer.
    pub fn new(interval: Duration) -> Result<Self> {
        if interval.is_zero() {
            return Err(CacheError::InvalidInterval(
                "interval must be greater than zero".to_string(),
            ));
        }
        Handle::try_current().map_err(|_| CacheError::RuntimeUnavailable)?;

        let store = Arc::new(Mutex::new(CacheStore::new(interval)));
        let shutdown = CancellationToken::new();
        let reaper = spawn_reaper_task(store.clone(), interval, shutdown.clone());

        debug!("TTL cache created with interval {:?}", interval);

        Ok(Self {
            store,
            interval,
            shutdown,
            reaper: Mutex::new(Some(reaper)),
        })
    }

    // == Interval ==
    /// Maximum entry age, which is also the reaper period.
    pub fn interval(&self) -> Duration {
        self.interval
    }

    // == Add ==
    /// Stores `value` under `key`, replacing any previous entry and resetting
    /// its age.
    pub async fn add(&self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        self.store.lock().await.add(key.into(), value.into());
    }

    // == Get ==
    /// Returns a copy of the bytes stored under `key`, or `None` if the key
    /// was never added or has been reaped.
    pub async fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.store.lock().await.get(key)
    }

    // == Length ==
    /// Returns the number of entries currently held, expired or not.
    pub async fn len(&self) -> usize {
        self.store.lock().await.len()
    }

    // == Is Empty ==
    /// Returns true if the cache holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.store.lock().await.is_empty()
    }

    // == Stats ==
    /// Returns a snapshot of the hit, miss and reaper counters.
    pub async fn stats(&self) -> CacheStats {
        self.store.lock().await.stats()
    }

    // == Close ==
    /// Stops the reaper and waits for it to exit. Calling it again is a no-op.
    pub async fn close(&self) {
        self.shutdown.cancel();

        let Some(handle) = self.reaper.lock().await.take() else {
            return;
        };
        if let Err(err) = handle.await {
            warn!("Reaper did not exit cleanly: {}", err);
        }
        info!("TTL cache closed");
    }

    /// Returns true once [`close`](Self::close) has been called or the
    /// handle is being dropped.
    pub fn is_closed(&self) -> bool {
        self.shutdown.is_cancelled()
    }
}

impl Drop for TtlCache {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
