//! API Handlers
//!
//! HTTP request handlers for each proxy endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Query, State},
    Json,
};

use crate::cache::ResponseCache;
use crate::config::Config;
use crate::error::Result;
use crate::models::{HealthResponse, NearbyQuery, PlacesResponse, StatsResponse};
use crate::places::{Getter, HttpGetter, PlacesClient};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Cache-first upstream client
    pub client: Arc<PlacesClient>,
    /// Shared response cache, also read directly by the stats handler
    pub cache: Arc<RwLock<ResponseCache>>,
}

impl AppState {
    /// Creates a new AppState from a client and the cache it writes to.
    pub fn new(client: PlacesClient, cache: Arc<RwLock<ResponseCache>>) -> Self {
        Self {
            client: Arc::new(client),
            cache,
        }
    }

    /// Creates a new AppState from configuration, wiring a reqwest-backed
    /// transport to the configured upstream.
    pub fn from_config(config: &Config) -> Self {
        Self::with_getter(config, Arc::new(HttpGetter::new()))
    }

    /// Creates a new AppState with an explicit transport. Lets tests
    /// substitute a canned getter for the real network.
    pub fn with_getter(config: &Config, getter: Arc<dyn Getter>) -> Self {
        let cache = Arc::new(RwLock::new(ResponseCache::new(config.cache_ttl())));
        let client = PlacesClient::new(config.upstream_url.clone(), getter, cache.clone());
        Self::new(client, cache)
    }
}

/// Handler for GET /nearby
///
/// Validates query parameters, applies defaults, and returns the nearby
/// places for the request, from cache when fresh.
pub async fn nearby_handler(
    State(state): State<AppState>,
    Query(query): Query<NearbyQuery>,
) -> Result<Json<PlacesResponse>> {
    let params = query.into_params()?;
    let results = state.client.fetch(&params).await?;

    Ok(Json(PlacesResponse::new(results)))
}

/// Handler for GET /stats
///
/// Returns current cache counters and entry count.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;

    Json(StatsResponse::new(cache.stats(), cache.len()))
}

/// Handler for GET /health
///
/// Returns health status of the proxy.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
