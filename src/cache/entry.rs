//! Cache Entry Module
//!
//! Defines a single cached response payload and its creation stamp.

use std::time::Duration;

use tokio::time::Instant;

// == Cache Entry ==
/// A cached response body together with the instant it was stored.
///
/// Uses the tokio clock so a paused test runtime controls entry ages.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload
    pub value: Vec<u8>,
    /// When the entry was inserted (or last overwritten)
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry stamped with `created_at`.
    pub fn created_at(value: Vec<u8>, created_at: Instant) -> Self {
        Self { value, created_at }
    }

    // == Age ==
    /// Time elapsed between creation and `now`, saturating at zero.
    pub fn age(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Expired ==
    /// Checks whether the entry is older than `ttl` as of `now`.
    ///
    /// An entry whose age equals the TTL exactly is still live; it becomes
    /// eligible for removal only once its age strictly exceeds the TTL.
    pub fn is_expired(&self, now: Instant, ttl: Duration) -> bool {
        self.age(now) > ttl
    }
}
