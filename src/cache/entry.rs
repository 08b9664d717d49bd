//! Cache Entry Module
//!
//! Defines the structure for individual cached upstream responses.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use crate::places::ResultSet;

// == Cache Entry ==
/// A decoded upstream result set together with its creation timestamp.
///
/// Entries are immutable after creation; a stale entry is replaced
/// wholesale by a fresh fetch, never mutated in place.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The decoded places, in upstream-provided order
    results: ResultSet,
    /// Creation timestamp (Unix milliseconds)
    created_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry timestamped at `now_ms`.
    pub fn new(results: ResultSet, now_ms: u64) -> Self {
        Self {
            results,
            created_at: now_ms,
        }
    }

    /// Returns the cached result set.
    pub fn results(&self) -> &ResultSet {
        &self.results
    }

    /// Returns the creation timestamp in Unix milliseconds.
    pub fn created_at(&self) -> u64 {
        self.created_at
    }

    // == Is Fresh ==
    /// Checks whether the entry is still fresh at `now_ms` under `ttl`.
    ///
    /// An entry is fresh iff `now <= created_at + ttl`. The expiry boundary
    /// itself counts as fresh (closed interval); the entry is strictly stale
    /// one millisecond after it.
    pub fn is_fresh(&self, now_ms: u64, ttl: Duration) -> bool {
        now_ms <= self.created_at.saturating_add(ttl.as_millis() as u64)
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use crate::places::Place;

    fn sample_results() -> ResultSet {
        vec![Place {
            name: "The Place".to_string(),
            lat: 11.1111111,
            lng: 22.2222222,
        }]
    }

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new(sample_results(), 1_000);

        assert_eq!(entry.created_at(), 1_000);
        assert_eq!(entry.results().len(), 1);
        assert_eq!(entry.results()[0].name, "The Place");
    }

    #[test]
    fn test_entry_fresh_within_ttl() {
        let entry = CacheEntry::new(sample_results(), 1_000);
        let ttl = Duration::from_secs(60);

        assert!(entry.is_fresh(1_000, ttl));
        assert!(entry.is_fresh(30_000, ttl));
    }

    #[test]
    fn test_freshness_boundary_is_closed() {
        let entry = CacheEntry::new(sample_results(), 1_000);
        let ttl = Duration::from_millis(500);

        // Exactly at created_at + ttl the entry is still fresh
        assert!(entry.is_fresh(1_500, ttl));
        // One millisecond past the boundary it is stale
        assert!(!entry.is_fresh(1_501, ttl));
    }

    #[test]
    fn test_zero_ttl_fresh_only_at_creation() {
        let entry = CacheEntry::new(sample_results(), 1_000);
        let ttl = Duration::ZERO;

        assert!(entry.is_fresh(1_000, ttl));
        assert!(!entry.is_fresh(1_001, ttl));
    }

    #[test]
    fn test_empty_result_set_is_cacheable() {
        let entry = CacheEntry::new(Vec::new(), 1_000);
        assert!(entry.results().is_empty());
        assert!(entry.is_fresh(1_000, Duration::from_secs(1)));
    }

    #[test]
    fn test_current_timestamp_advances() {
        let a = current_timestamp_ms();
        let b = current_timestamp_ms();
        assert!(b >= a);
    }
}
