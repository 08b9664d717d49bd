//! Cache Statistics Module
//!
//! Tracks hit/miss/insert counters for the response cache.
//!
//! Counters are atomic so a hit can be recorded while holding only a read
//! lock on the store; lookups never need exclusive access.

use std::sync::atomic::{AtomicU64, Ordering};

// == Cache Stats ==
/// Atomic performance counters for the response cache.
#[derive(Debug, Default)]
pub struct CacheStats {
    /// Lookups served from a fresh cache entry
    hits: AtomicU64,
    /// Lookups that found no entry or only a stale one
    misses: AtomicU64,
    /// Entries created or overwritten after an upstream fetch
    inserts: AtomicU64,
}

/// Point-in-time copy of the counters, safe to serialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatsSnapshot {
    pub hits: u64,
    pub misses: u64,
    pub inserts: u64,
}

impl CacheStats {
    /// Creates a new CacheStats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a cache hit.
    pub fn record_hit(&self) {
        self.hits.fetch_add(1, Ordering::Relaxed);
    }

    /// Records a cache miss (absent or stale entry).
    pub fn record_miss(&self) {
        self.misses.fetch_add(1, Ordering::Relaxed);
    }

    /// Records an entry insert or overwrite.
    pub fn record_insert(&self) {
        self.inserts.fetch_add(1, Ordering::Relaxed);
    }

    /// Returns a point-in-time snapshot of all counters.
    pub fn snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            inserts: self.inserts.load(Ordering::Relaxed),
        }
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_start_at_zero() {
        let stats = CacheStats::new();
        let snapshot = stats.snapshot();

        assert_eq!(snapshot.hits, 0);
        assert_eq!(snapshot.misses, 0);
        assert_eq!(snapshot.inserts, 0);
    }

    #[test]
    fn test_record_counters() {
        let stats = CacheStats::new();

        stats.record_hit();
        stats.record_hit();
        stats.record_miss();
        stats.record_insert();

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.hits, 2);
        assert_eq!(snapshot.misses, 1);
        assert_eq!(snapshot.inserts, 1);
    }

    #[test]
    fn test_record_through_shared_reference() {
        // Counters must be usable under a read lock
        let stats = CacheStats::new();
        let shared: &CacheStats = &stats;

        shared.record_hit();
        shared.record_miss();

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.hits, 1);
        assert_eq!(snapshot.misses, 1);
    }
}
