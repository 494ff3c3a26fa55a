//! Cache Module
//!
//! In-memory response cache with a single lifetime and lazy, sweep-driven
//! expiry.
//!
//! [`ResponseCache`] is the handle the rest of the program uses. It owns a
//! [`CacheStore`] behind one mutex and a background task that sweeps the
//! store once per TTL.

mod entry;
mod stats;
mod store;


use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{oneshot, Mutex};
use tokio::task::JoinHandle;
use tracing::warn;

use crate::tasks::spawn_sweep_task;

// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::CacheStore;

// == Response Cache ==
/// Shared, time-bounded cache of response bodies keyed by request URL.
///
/// Entries stay readable until the next sweep after they pass the TTL; reads
/// never check age. Dropping the cache stops its sweep task.
#[derive(Debug)]
pub struct ResponseCache {
    store: Arc<Mutex<CacheStore>>,
    ttl: Duration,
    shutdown_tx: oneshot::Sender<()>,
    sweeper: JoinHandle<()>,
}

impl ResponseCache {
    // == Constructor ==
    /// Creates an empty cache and starts its sweep task.
    ///
    /// `ttl` is both the sweep interval and the age past which entries are
    /// removed.
    ///
    /// # Panics
    /// Panics if `ttl` is zero or if called outside a tokio runtime.
    pub fn new(ttl: Duration) -> Self {
        let store = Arc::new(Mutex::new(CacheStore::new(ttl)));
        let (shutdown_tx, shutdown_rx) = oneshot::channel();
        let sweeper = spawn_sweep_task(store.clone(), ttl, shutdown_rx);

        Self {
            store,
            ttl,
            shutdown_tx,
            sweeper,
        }
    }

    // == TTL ==
    /// Returns the entry lifetime, which is also the sweep interval.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Insert ==
    /// Inserts or overwrites the entry for `key`, stamped now.
    pub async fn insert(&self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        self.store.lock().await.insert(key.into(), value.into());
    }

    // == Lookup ==
    /// Returns a copy of the bytes stored under `key`, stale or not.
    pub async fn lookup(&self, key: &str) -> Option<Vec<u8>> {
        self.store.lock().await.lookup(key)
    }

    // == Sweep ==
    /// Runs one sweep pass immediately, outside the timer.
    ///
    /// Returns the number of entries removed.
    pub async fn sweep(&self) -> usize {
        self.store.lock().await.sweep()
    }

    // == Stats ==
    /// Returns a snapshot of the cache counters.
    pub async fn stats(&self) -> CacheStats {
        self.store.lock().await.stats()
    }

    // == Len ==
    /// Returns the number of stored entries, stale ones included.
    pub async fn len(&self) -> usize {
        self.store.lock().await.len()
    }

    // == Is Empty ==
    /// Returns true if no entries are stored.
    pub async fn is_empty(&self) -> bool {
        self.store.lock().await.is_empty()
    }

    // == Is Sweeping ==
    /// Returns true while the sweep task is alive.
    pub fn is_sweeping(&self) -> bool {
        !self.sweeper.is_finished()
    }

    // == Shutdown ==
    /// Stops the sweep task and waits for it to exit.
    pub async fn shutdown(self) {
        let Self {
            shutdown_tx,
            sweeper,
            ..
        } = self;

        // The task may already have exited; nothing to signal then.
        let _ = shutdown_tx.send(());
        if let Err(err) = sweeper.await {
            warn!("Cache sweep task ended abnormally: {}", err);
        }
    }
}
