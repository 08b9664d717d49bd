//! Places Client
//!
//! Composes the transport, decoder and response cache into a single
//! cache-first fetch operation.

use std::sync::Arc;

use reqwest::Url;
use tokio::sync::RwLock;
use tracing::debug;

use crate::cache::{current_timestamp_ms, ResponseCache};
use crate::error::{ProxyError, Result};
use crate::places::{decode_results, Getter, ResultSet};

// == Constants ==
/// Fixed search radius in meters. Not user-configurable; part of the cache
/// key's identity in case it ever becomes so.
pub const SEARCH_RADIUS_METERS: u32 = 2000;

// == Search Params ==
/// Query parameters for a nearby-places fetch.
///
/// The credential is required; location and place-type defaults are the
/// HTTP layer's responsibility.
#[derive(Debug, Clone)]
pub struct SearchParams {
    /// Upstream API credential token
    pub api_key: String,
    /// Location as a "lat,lng" string, passed through to the upstream
    pub location: String,
    /// Upstream place-type filter (e.g. "cafe")
    pub place_type: String,
}

// == Request Key ==
/// Canonical cache key derived deterministically from request parameters
/// plus the fixed radius.
///
/// Two logically identical requests always produce identical keys; this is
/// the sole cache addressing scheme.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RequestKey(String);

impl RequestKey {
    /// Derives the canonical key for `params`.
    pub fn derive(params: &SearchParams) -> Self {
        Self(format!(
            "{}|{}|{}|{}",
            params.api_key, params.location, params.place_type, SEARCH_RADIUS_METERS
        ))
    }

    /// Builds a key directly from a raw string, bypassing derivation.
    pub fn from_raw(raw: &str) -> Self {
        Self(raw.to_string())
    }

    /// Returns the key as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// == Places Client ==
/// Cache-first client for the upstream nearby-places API.
///
/// On a fresh cache hit the upstream is never contacted. On a miss or a
/// stale entry a single upstream attempt is made; no retries, no backoff.
/// Cancellation is the caller dropping the fetch future, which aborts the
/// in-flight upstream call and leaves the cache untouched.
pub struct PlacesClient {
    /// Base URL of the upstream nearby-search endpoint
    base_url: String,
    /// Transport used for upstream calls
    getter: Arc<dyn Getter>,
    /// Shared response cache
    cache: Arc<RwLock<ResponseCache>>,
}

impl PlacesClient {
    // == Constructor ==
    /// Creates a new PlacesClient.
    pub fn new(
        base_url: impl Into<String>,
        getter: Arc<dyn Getter>,
        cache: Arc<RwLock<ResponseCache>>,
    ) -> Self {
        Self {
            base_url: base_url.into(),
            getter,
            cache,
        }
    }

    // == URL Construction ==
    /// Builds the upstream request URL with all variable fields URL-encoded.
    ///
    /// Raw user input never lands unescaped in the query string.
    fn build_url(&self, params: &SearchParams) -> Result<String> {
        let radius = SEARCH_RADIUS_METERS.to_string();
        let pairs = [
            ("key", params.api_key.as_str()),
            ("location", params.location.as_str()),
            ("type", params.place_type.as_str()),
            ("radius", radius.as_str()),
        ];

        let url = Url::parse_with_params(&self.base_url, &pairs)
            .map_err(|e| ProxyError::Internal(format!("invalid upstream URL: {}", e)))?;

        Ok(String::from(url))
    }

    // == Fetch ==
    /// Fetches nearby places for `params`, serving from the cache when a
    /// fresh entry exists.
    ///
    /// On a miss or stale entry: one upstream call, decode, store, return.
    /// Transport failures surface as `UpstreamUnavailable` and decode
    /// failures as `MalformedResponse`; neither touches the cache, so a
    /// failed refresh never clears a previously cached result set.
    pub async fn fetch(&self, params: &SearchParams) -> Result<ResultSet> {
        let key = RequestKey::derive(params);

        {
            let cache = self.cache.read().await;
            if let Some(entry) = cache.lookup(&key) {
                if entry.is_fresh(current_timestamp_ms(), cache.ttl()) {
                    cache.record_hit();
                    debug!(key = key.as_str(), "serving nearby results from cache");
                    return Ok(entry.results().clone());
                }
            }
            cache.record_miss();
            debug!(key = key.as_str(), "cache miss, fetching from upstream");
        }

        // The read lock is released across the upstream call. Two
        // concurrent misses for the same key may both fetch and both
        // store; duplicate work, never an inconsistent entry.
        let url = self.build_url(params)?;
        let raw = self.getter.get(&url).await?;
        let results = decode_results(&raw)?;

        let mut cache = self.cache.write().await;
        cache.store(key, results.clone(), current_timestamp_ms());

        Ok(results)
    }
}
