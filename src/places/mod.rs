//! Places Module
//!
//! Upstream client for the nearby-places API: transport abstraction,
//! response decoding, and the cache-first fetch logic.

mod client;
mod decode;
mod getter;

use serde::Serialize;

// Re-export public types
pub use client::{PlacesClient, RequestKey, SearchParams, SEARCH_RADIUS_METERS};
pub use decode::decode_results;
pub use getter::{Getter, HttpGetter};

// == Place ==
/// One search result: a display name and a geographic point.
///
/// Immutable once decoded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Place {
    /// Display name of the place
    pub name: String,
    /// Latitude in floating-point degrees
    pub lat: f64,
    /// Longitude in floating-point degrees
    pub lng: f64,
}

/// An ordered sequence of places, in upstream-provided order.
///
/// Order is significant and preserved, never re-sorted.
pub type ResultSet = Vec<Place>;
