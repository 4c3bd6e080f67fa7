//! Reaper Task
//!
//! Background task that periodically removes expired cache entries until it
//! is told to stop.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns the reaper for `store`.
///
/// The first pass runs one full `interval` after the call and then every
/// `interval` after that. Each pass holds the store lock for the whole scan.
/// The task exits as soon as `shutdown` is cancelled; no pass starts after
/// that point.
///
/// # Panics
/// Panics if the current runtime has no time driver.
///
/// # Example
/// ```ignore
/// let store = Arc::new(Mutex::new(CacheStore::new(Duration::from_secs(5))));
/// let shutdown = CancellationToken::new();
/// let handle = spawn_reaper_task(store.clone(), Duration::from_secs(5), shutdown.clone());
/// // Later:
/// shutdown.cancel();
/// handle.await?;
/// ```
pub fn spawn_reaper_task(
    store: Arc<Mutex<CacheStore>>,
    interval: Duration,
    shutdown: CancellationToken,
) -> JoinHandle<()> {
    let mut ticker = time::interval_at(Instant::now() + interval, interval);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    tokio::spawn(async move {
        info!("Starting reaper with interval of {:?}", interval);

        loop {
            tokio::select! {
                biased;
                _ = shutdown.cancelled() => break,
                _ = ticker.tick() => {}
            }

            let removed = store.lock().await.remove_expired();

            if removed > 0 {
                info!("Reaper: removed {} expired entries", removed);
            } else {
                debug!("Reaper: no expired entries found");
            }
        }

        info!("Reaper stopped");
    })
}
