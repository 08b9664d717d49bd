//! Cache Module
//!
//! Provides the request-keyed response cache with lazy TTL expiry.

mod entry;
mod stats;
mod store;


// Re-export public types
pub use entry::{current_timestamp_ms, CacheEntry};
pub use stats::{CacheStats, StatsSnapshot};
pub use store::ResponseCache;
