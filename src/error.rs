//! Error types for the proxy
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// == Proxy Error Enum ==
/// Unified error type for the nearby-places proxy.
#[derive(Error, Debug)]
pub enum ProxyError {
    /// Required 'key' query parameter was not supplied
    #[error("URL parameter 'key' missing")]
    MissingApiKey,

    /// Transport-level failure reaching the upstream service
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Upstream returned a body that cannot be decoded
    #[error("Malformed upstream response: {0}")]
    MalformedResponse(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match &self {
            ProxyError::MissingApiKey => StatusCode::UNAUTHORIZED,
            ProxyError::UpstreamUnavailable(_) => StatusCode::BAD_GATEWAY,
            ProxyError::MalformedResponse(_) => StatusCode::BAD_GATEWAY,
            ProxyError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string()
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the proxy.
pub type Result<T> = std::result::Result<T, ProxyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_maps_to_unauthorized() {
        let response = ProxyError::MissingApiKey.into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_upstream_errors_map_to_bad_gateway() {
        let response =
            ProxyError::UpstreamUnavailable("connection refused".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);

        let response =
            ProxyError::MalformedResponse("missing results".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_error_display() {
        let err = ProxyError::UpstreamUnavailable("timeout".to_string());
        assert_eq!(err.to_string(), "Upstream unavailable: timeout");
    }
}
