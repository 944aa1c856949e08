//! API Handlers
//!
//! HTTP request handlers for each gateway endpoint.

use std::sync::Arc;

use axum::{extract::State, Json};
use tokio::sync::RwLock;
use tracing::warn;

use crate::cache::SheetCache;
use crate::config::Config;
use crate::error::{FetchError, Result};
use crate::fetch::FetchPipeline;
use crate::models::{ClearResponse, FetchResponse, HealthResponse, StatsResponse};
use crate::sheets::{RestSheetsClient, ServiceAccountKey, SheetSource};
use crate::status::{StatusSink, StatusSnapshot};

/// Application state shared across all handlers.
///
/// Holds the cache, the fetch pipeline and the status sink. The pipeline is
/// absent when credentials are missing or malformed; the service still
/// starts and `/` answers a configuration error.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe cache store
    pub cache: Arc<RwLock<SheetCache>>,
    /// Fetch pipeline, None without usable credentials
    pub pipeline: Option<Arc<FetchPipeline>>,
    /// Status snapshot sink
    pub sink: Arc<StatusSink>,
    /// Loaded configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates a new AppState from configuration, building the real REST
    /// client from the credentials blob.
    pub fn from_config(config: &Config) -> Self {
        let source: Option<Arc<dyn SheetSource>> = match &config.credentials_json {
            Some(blob) => match ServiceAccountKey::from_json(blob)
                .and_then(RestSheetsClient::new)
            {
                Ok(client) => Some(Arc::new(client)),
                Err(e) => {
                    warn!("Credentials rejected, fetches will fail: {}", e);
                    None
                }
            },
            None => {
                warn!("GOOGLE_APPLICATION_CREDENTIALS_JSON not set, fetches will fail");
                None
            }
        };

        Self::assemble(config.clone(), source)
    }

    /// Creates a new AppState with an explicit sheet source.
    ///
    /// Used by tests to substitute a scripted source for the REST client.
    pub fn with_source(config: Config, source: Arc<dyn SheetSource>) -> Self {
        Self::assemble(config, Some(source))
    }

    fn assemble(config: Config, source: Option<Arc<dyn SheetSource>>) -> Self {
        let cache = Arc::new(RwLock::new(SheetCache::new()));
        let pipeline = source.map(|source| {
            Arc::new(FetchPipeline::new(
                cache.clone(),
                source,
                config.retry_policy(),
                config.spreadsheet_id.clone(),
                config.range.clone(),
                config.cache_ttl,
            ))
        });
        let sink = Arc::new(StatusSink::new(config.status_file.clone()));

        Self {
            cache,
            pipeline,
            sink,
            config: Arc::new(config),
        }
    }
}

/// Handler for GET /
///
/// Runs the fetch pipeline and records a status snapshot for every outcome.
/// Failures become a structured error body via `FetchError::into_response`.
pub async fn fetch_handler(State(state): State<AppState>) -> Result<Json<FetchResponse>> {
    let result = match &state.pipeline {
        Some(pipeline) => pipeline.fetch().await,
        None => Err(FetchError::Config(
            "service account credentials are not configured".to_string(),
        )),
    };

    let config = &state.config;
    let snapshot = match &result {
        Ok(outcome) => StatusSnapshot::success(
            &config.spreadsheet_id,
            &config.range,
            outcome,
            config.max_retry_attempts,
            config.cache_ttl,
        ),
        Err(err) => {
            // Exhaustion consumes the whole retry budget; configuration
            // errors never reach the executor.
            let attempts_used = match err {
                FetchError::Remote(_) => config.max_retry_attempts,
                FetchError::Config(_) => 0,
            };
            StatusSnapshot::failure(
                &config.spreadsheet_id,
                &config.range,
                &err.to_string(),
                attempts_used,
                config.max_retry_attempts,
                config.cache_ttl,
            )
        }
    };
    state.sink.write(&snapshot);

    result.map(|outcome| Json(FetchResponse::from(outcome)))
}

/// Handler for GET /health
///
/// Returns `{"ok": true}` unconditionally.
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

/// Handler for GET /cache/clear
///
/// Removes all cached entries, regardless of expiry state.
pub async fn clear_handler(State(state): State<AppState>) -> Json<ClearResponse> {
    state.cache.write().await.clear();
    Json(ClearResponse::cleared())
}

/// Handler for GET /stats
///
/// Returns current cache statistics.
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let stats = state.cache.read().await.stats();
    Json(StatsResponse::new(
        stats.hits,
        stats.misses,
        stats.total_entries,
    ))
}
