//! Cache Statistics Module
//!
//! Tracks lookups, inserts and sweep removals for the response cache.

use chrono::{DateTime, Utc};
use serde::Serialize;

// == Cache Stats ==
/// Counters describing how the response cache has been used.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Lookups that found an entry
    pub hits: u64,
    /// Lookups that found nothing
    pub misses: u64,
    /// Insert calls, overwrites included
    pub inserts: u64,
    /// Entries removed by sweep passes
    pub expired: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
    /// Wall-clock time of the most recent sweep pass
    pub last_sweep_at: Option<DateTime<Utc>>,
}

impl CacheStats {
    // == Constructor ==
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Returns hits / (hits + misses), or 0.0 if no lookups have been made.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }

    // == Record Hit ==
    /// Counts a lookup that found an entry.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    // == Record Miss ==
    /// Counts a lookup that found nothing.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    // == Record Insert ==
    /// Counts one insert or overwrite.
    pub fn record_insert(&mut self) {
        self.inserts += 1;
    }

    // == Record Sweep ==
    /// Accounts for one sweep pass that removed `removed` entries.
    pub fn record_sweep(&mut self, removed: usize) {
        self.expired += removed as u64;
        self.last_sweep_at = Some(Utc::now());
    }

    // == Set Total Entries ==
    /// Updates the current entry count.
    pub fn set_total_entries(&mut self, count: usize) {
        self.total_entries = count;
    }
}
