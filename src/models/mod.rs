//! Data Transfer Objects
//!
//! Request and response body structures for the proxy API.

mod requests;
mod responses;

pub use requests::{NearbyQuery, DEFAULT_LOCATION, DEFAULT_PLACE_TYPE};
pub use responses::{HealthResponse, PlacesResponse, StatsResponse};
