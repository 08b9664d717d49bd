//! Cache Store Module
//!
//! Maps canonical request keys to cached upstream result sets with a
//! process-global TTL fixed at construction.
//!
//! Expiry is lazy: staleness is checked at lookup time and a stale entry is
//! simply overwritten by the next successful fetch. There is no background
//! sweep and no eviction, so the map can grow for the lifetime of the
//! process — a documented trade-off for a low-traffic proxy, not an
//! oversight.

use std::collections::HashMap;
use std::time::Duration;

use crate::cache::{CacheEntry, CacheStats, StatsSnapshot};
use crate::places::{RequestKey, ResultSet};

// == Response Cache ==
/// In-memory store of decoded upstream responses keyed by request.
///
/// At most one entry exists per key at any time; `store` replaces the prior
/// entry wholesale.
#[derive(Debug)]
pub struct ResponseCache {
    /// Key-entry storage
    entries: HashMap<RequestKey, CacheEntry>,
    /// Freshness window applied to every entry
    ttl: Duration,
    /// Hit/miss/insert counters
    stats: CacheStats,
}

impl ResponseCache {
    // == Constructor ==
    /// Creates a new ResponseCache with the given TTL.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
            stats: CacheStats::new(),
        }
    }

    /// Returns the TTL applied to every entry.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Lookup ==
    /// Returns the entry for `key`, fresh or stale.
    ///
    /// Pure read: no counters change and no entry is removed. Callers decide
    /// freshness via [`CacheEntry::is_fresh`] and record the outcome with
    /// [`record_hit`](Self::record_hit) / [`record_miss`](Self::record_miss).
    pub fn lookup(&self, key: &RequestKey) -> Option<&CacheEntry> {
        self.entries.get(key)
    }

    // == Store ==
    /// Creates or overwrites the entry for `key`, timestamped at `now_ms`.
    ///
    /// Overwrite is total; prior results for the key are discarded.
    pub fn store(&mut self, key: RequestKey, results: ResultSet, now_ms: u64) {
        self.entries.insert(key, CacheEntry::new(results, now_ms));
        self.stats.record_insert();
    }

    // == Stats ==
    /// Records a lookup served from a fresh entry.
    pub fn record_hit(&self) {
        self.stats.record_hit();
    }

    /// Records a lookup that found no entry or only a stale one.
    pub fn record_miss(&self) {
        self.stats.record_miss();
    }

    /// Returns a snapshot of the hit/miss/insert counters.
    pub fn stats(&self) -> StatsSnapshot {
        self.stats.snapshot()
    }

    // == Length ==
    /// Returns the current number of entries, fresh and stale alike.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
