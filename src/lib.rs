//! Nearby Proxy - a caching proxy for nearby-places lookups
//!
//! Forwards nearby-places queries to an upstream location-search API and
//! caches decoded responses with time-based expiry.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod places;

pub use api::AppState;
pub use config::Config;
