//! Response DTOs for the proxy API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::cache::StatsSnapshot;
use crate::places::{Place, ResultSet};

/// Response body for GET /nearby
#[derive(Debug, Clone, Serialize)]
pub struct PlacesResponse {
    /// Places in upstream-provided order
    pub results: Vec<Place>,
}

impl PlacesResponse {
    /// Creates a new PlacesResponse
    pub fn new(results: ResultSet) -> Self {
        Self { results }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of entries inserted or overwritten
    pub inserts: u64,
    /// Current number of entries in the cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from a counter snapshot and entry count
    pub fn new(snapshot: StatsSnapshot, total_entries: usize) -> Self {
        let total_requests = snapshot.hits + snapshot.misses;
        let hit_rate = if total_requests > 0 {
            snapshot.hits as f64 / total_requests as f64
        } else {
            0.0
        };
        Self {
            hits: snapshot.hits,
            misses: snapshot.misses,
            inserts: snapshot.inserts,
            total_entries,
            hit_rate,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}
