//! TTL Sweep Task
//!
//! Background task that periodically removes expired response cache entries.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{oneshot, Mutex};
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};
use tracing::{debug, info, warn};

use crate::cache::CacheStore;

/// Spawns a background task that sweeps the store every `interval`.
///
/// The first pass runs one interval after the call. Each pass holds the
/// store's lock only while it removes entries. The task exits when
/// `shutdown` fires or its sender is dropped.
///
/// An interval too long to schedule leaves the task idle until shutdown,
/// since no entry can outlive it.
///
/// # Panics
/// Panics if `interval` is zero.
///
/// # Arguments
/// * `store` - Shared reference to the cache store
/// * `interval` - Time between sweep passes
/// * `shutdown` - Stop signal
///
/// # Example
/// ```ignore
/// let store = Arc::new(Mutex::new(CacheStore::new(ttl)));
/// let (tx, rx) = oneshot::channel();
/// let handle = spawn_sweep_task(store.clone(), ttl, rx);
/// // Later:
/// let _ = tx.send(());
/// handle.await?;
/// ```
pub fn spawn_sweep_task(
    store: Arc<Mutex<CacheStore>>,
    interval: Duration,
    mut shutdown: oneshot::Receiver<()>,
) -> JoinHandle<()> {
    assert!(!interval.is_zero(), "sweep interval must be non-zero");

    tokio::spawn(async move {
        info!("Starting cache sweep task with interval of {:?}", interval);

        let Some(first_tick) = Instant::now().checked_add(interval) else {
            warn!(
                "Sweep interval {:?} is out of range; cache will not be swept",
                interval
            );
            let _ = shutdown.await;
            debug!("Cache sweep task stopping");
            return;
        };

        let mut ticker = interval_at(first_tick, interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = ticker.tick() => {}
                _ = &mut shutdown => {
                    debug!("Cache sweep task stopping");
                    break;
                }
            }

            let removed = store.lock().await.sweep();

            if removed > 0 {
                info!("Cache sweep: removed {} expired entries", removed);
            } else {
                debug!("Cache sweep: no expired entries found");
            }
        }
    })
}
