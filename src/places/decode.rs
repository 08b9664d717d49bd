//! Response Decoder
//!
//! Parses the upstream nearby-search payload into an ordered result set.
//!
//! Expected shape:
//! `{ "results": [ { "name": string, "geometry": { "location": { "lat": number, "lng": number } } } ] }`
//!
//! Unknown additional fields are ignored for forward compatibility. An
//! empty results array is valid and decodes to an empty result set.

use serde::{Deserialize, Serialize};

use crate::error::{ProxyError, Result};
use crate::places::{Place, ResultSet};

// == Wire Types ==
// Serialize is derived so tests can encode result sets back into the
// upstream shape.

#[derive(Debug, Serialize, Deserialize)]
struct NearbyResponse {
    results: Vec<RawResult>,
}

#[derive(Debug, Serialize, Deserialize)]
struct RawResult {
    name: String,
    geometry: Geometry,
}

#[derive(Debug, Serialize, Deserialize)]
struct Geometry {
    location: Location,
}

#[derive(Debug, Serialize, Deserialize)]
struct Location {
    lat: f64,
    lng: f64,
}

// == Decode ==
/// Decodes a raw upstream payload into a result set.
///
/// Fails with `MalformedResponse` if the top-level shape is absent or a
/// required field cannot be parsed.
pub fn decode_results(raw: &[u8]) -> Result<ResultSet> {
    let response: NearbyResponse =
        serde_json::from_slice(raw).map_err(|e| ProxyError::MalformedResponse(e.to_string()))?;

    Ok(response
        .results
        .into_iter()
        .map(|r| Place {
            name: r.name,
            lat: r.geometry.location.lat,
            lng: r.geometry.location.lng,
        })
        .collect())
}
