//! Cache Store Module
//!
//! The unsynchronised map behind the response cache. Callers wrap it in a
//! single lock; see [`crate::cache::ResponseCache`].

use std::collections::HashMap;
use std::time::Duration;

use tokio::time::Instant;

use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// Keyed byte payloads with a shared lifetime.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Usage counters
    stats: CacheStats,
    /// Age past which a sweep removes an entry
    ttl: Duration,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store whose entries expire after `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            stats: CacheStats::new(),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Insert ==
    /// Stores `value` under `key`, replacing any previous entry and
    /// restarting its age.
    pub fn insert(&mut self, key: String, value: Vec<u8>) {
        self.insert_at(key, value, Instant::now());
    }

    pub(crate) fn insert_at(&mut self, key: String, value: Vec<u8>, now: Instant) {
        self.entries.insert(key, CacheEntry::created_at(value, now));
        self.stats.record_insert();
        self.stats.set_total_entries(self.entries.len());
    }

    // == Lookup ==
    /// Returns a copy of the value stored under `key`.
    ///
    /// Age is not consulted: a stale entry stays visible until a sweep
    /// removes it.
    pub fn lookup(&mut self, key: &str) -> Option<Vec<u8>> {
        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Sweep ==
    /// Removes every entry older than the TTL as of now.
    ///
    /// Returns the number of entries removed.
    pub fn sweep(&mut self) -> usize {
        self.sweep_at(Instant::now())
    }

    /// Removes every entry older than the TTL as of `now`.
    pub fn sweep_at(&mut self, now: Instant) -> usize {
        let ttl = self.ttl;
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now, ttl));
        let removed = before - self.entries.len();

        self.stats.record_sweep(removed);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Stats ==
    /// Returns a snapshot of the current statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    const TTL: Duration = Duration::from_millis(50);

    #[test]
    fn test_store_new() {
        let store = CacheStore::new(TTL);
        assert_eq!(store.len(), 0);
        assert!(store.is_empty());
        assert_eq!(store.ttl(), TTL);
    }

    #[test]
    fn test_store_insert_and_lookup() {
        let mut store = CacheStore::new(TTL);

        store.insert("a".to_string(), vec![1, 2, 3]);

        assert_eq!(store.lookup("a"), Some(vec![1, 2, 3]));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_lookup_nonexistent() {
        let mut store = CacheStore::new(TTL);
        assert_eq!(store.lookup("never-inserted"), None);
    }

    #[test]
    fn test_store_overwrite() {
        let mut store = CacheStore::new(TTL);

        store.insert("k".to_string(), b"v1".to_vec());
        store.insert("k".to_string(), b"v2".to_vec());

        assert_eq!(store.lookup("k"), Some(b"v2".to_vec()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_store_empty_key_and_value() {
        let mut store = CacheStore::new(TTL);

        store.insert(String::new(), Vec::new());

        assert_eq!(store.lookup(""), Some(Vec::new()));
    }

    #[test]
    fn test_store_lookup_ignores_age() {
        let mut store = CacheStore::new(TTL);
        let start = Instant::now();

        store.insert_at("stale".to_string(), vec![9], start - TTL * 4);

        // Well past the TTL, but no sweep has run yet
        assert_eq!(store.lookup("stale"), Some(vec![9]));
    }

    #[test]
    fn test_store_sweep_removes_expired_only() {
        let mut store = CacheStore::new(TTL);
        let start = Instant::now();

        store.insert_at("old".to_string(), vec![1], start);
        store.insert_at("fresh".to_string(), vec![2], start + TTL);

        let removed = store.sweep_at(start + TTL + Duration::from_millis(1));

        assert_eq!(removed, 1);
        assert_eq!(store.lookup("old"), None);
        assert_eq!(store.lookup("fresh"), Some(vec![2]));
    }

    #[test]
    fn test_store_sweep_keeps_entry_at_exact_ttl() {
        let mut store = CacheStore::new(TTL);
        let start = Instant::now();

        store.insert_at("edge".to_string(), vec![1], start);

        assert_eq!(store.sweep_at(start + TTL), 0);
        assert!(store.contains_key("edge"));
    }

    #[test]
    fn test_store_overwrite_resets_age() {
        let mut store = CacheStore::new(TTL);
        let start = Instant::now();

        store.insert_at("k".to_string(), b"old".to_vec(), start);
        store.insert_at("k".to_string(), b"new".to_vec(), start + TTL);

        assert_eq!(store.sweep_at(start + TTL + Duration::from_millis(10)), 0);
        assert_eq!(store.lookup("k"), Some(b"new".to_vec()));
    }

    #[test]
    fn test_store_stats() {
        let mut store = CacheStore::new(TTL);
        let start = Instant::now();

        store.insert_at("a".to_string(), vec![1], start);
        store.lookup("a"); // hit
        store.lookup("b"); // miss
        store.sweep_at(start + TTL * 2);

        let stats = store.stats();
        assert_eq!(stats.hits, 1);
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.inserts, 1);
        assert_eq!(stats.expired, 1);
        assert_eq!(stats.total_entries, 0);
        assert!(stats.last_sweep_at.is_some());
    }
}
