//! Request DTOs for the proxy API
//!
//! Defines the structure of incoming query parameters.

use serde::Deserialize;

use crate::error::{ProxyError, Result};
use crate::places::SearchParams;

/// Default location used when the caller omits `location` (central Stockholm).
pub const DEFAULT_LOCATION: &str = "59.326165362,18.058666432";

/// Default place type used when the caller omits `type`.
pub const DEFAULT_PLACE_TYPE: &str = "bicycle_store";

/// Query parameters for GET /nearby
///
/// # Fields
/// - `key`: Upstream API credential (required)
/// - `location`: "lat,lng" string (optional, defaulted)
/// - `type`: Place type filter (optional, defaulted)
#[derive(Debug, Clone, Deserialize)]
pub struct NearbyQuery {
    /// Upstream API credential token
    pub key: Option<String>,
    /// Location as a "lat,lng" string
    pub location: Option<String>,
    /// Upstream place-type filter
    #[serde(rename = "type")]
    pub place_type: Option<String>,
}

impl NearbyQuery {
    /// Validates the query and applies defaults, producing client params.
    ///
    /// A missing or empty `key` is a caller error and fails before the
    /// client is ever involved.
    pub fn into_params(self) -> Result<SearchParams> {
        let api_key = match self.key {
            Some(key) if !key.is_empty() => key,
            _ => return Err(ProxyError::MissingApiKey),
        };

        Ok(SearchParams {
            api_key,
            location: self
                .location
                .unwrap_or_else(|| DEFAULT_LOCATION.to_string()),
            place_type: self
                .place_type
                .unwrap_or_else(|| DEFAULT_PLACE_TYPE.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nearby_query_deserialize() {
        let query: NearbyQuery =
            serde_json::from_str(r#"{"key": "abc", "location": "1,1", "type": "cafe"}"#).unwrap();
        assert_eq!(query.key.as_deref(), Some("abc"));
        assert_eq!(query.location.as_deref(), Some("1,1"));
        assert_eq!(query.place_type.as_deref(), Some("cafe"));
    }

    #[test]
    fn test_into_params_applies_defaults() {
        let query = NearbyQuery {
            key: Some("abc".to_string()),
            location: None,
            place_type: None,
        };

        let params = query.into_params().unwrap();
        assert_eq!(params.api_key, "abc");
        assert_eq!(params.location, DEFAULT_LOCATION);
        assert_eq!(params.place_type, DEFAULT_PLACE_TYPE);
    }

    #[test]
    fn test_into_params_missing_key_fails() {
        let query = NearbyQuery {
            key: None,
            location: Some("1,1".to_string()),
            place_type: Some("cafe".to_string()),
        };
        assert!(matches!(
            query.into_params(),
            Err(ProxyError::MissingApiKey)
        ));
    }

    #[test]
    fn test_into_params_empty_key_fails() {
        let query = NearbyQuery {
            key: Some(String::new()),
            location: None,
            place_type: None,
        };
        assert!(matches!(
            query.into_params(),
            Err(ProxyError::MissingApiKey)
        ));
    }

    #[test]
    fn test_into_params_keeps_explicit_values() {
        let query = NearbyQuery {
            key: Some("abc".to_string()),
            location: Some("1,1".to_string()),
            place_type: Some("cafe".to_string()),
        };

        let params = query.into_params().unwrap();
        assert_eq!(params.location, "1,1");
        assert_eq!(params.place_type, "cafe");
    }
}
