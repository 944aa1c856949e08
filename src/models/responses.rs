//! Response DTOs for the gateway API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

use crate::fetch::{FetchOutcome, FetchSource};
use crate::sheets::SheetRows;

/// Response body for a successful fetch (GET /)
///
/// `attempts_used` is present only for live fetches; cache hits omit it.
#[derive(Debug, Clone, Serialize)]
pub struct FetchResponse {
    /// Always "success"
    pub status: String,
    /// "cache" or "live"
    pub source: String,
    /// The fetched rows
    pub data: SheetRows,
    /// Retry attempts consumed by the live fetch
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attempts_used: Option<u32>,
}

impl From<FetchOutcome> for FetchResponse {
    fn from(outcome: FetchOutcome) -> Self {
        let attempts_used = match outcome.source {
            FetchSource::Live => Some(outcome.attempts_used),
            FetchSource::Cache => None,
        };
        Self {
            status: "success".to_string(),
            source: outcome.source.as_str().to_string(),
            data: outcome.rows,
            attempts_used,
        }
    }
}

/// Error response body for all failure conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Always "error"
    pub status: String,
    /// What went wrong
    pub message: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            status: "error".to_string(),
            message: message.into(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Always true
    pub ok: bool,
}

impl HealthResponse {
    /// Creates the unconditional healthy response
    pub fn healthy() -> Self {
        Self { ok: true }
    }
}

/// Response body for the cache clear endpoint (GET /cache/clear)
#[derive(Debug, Clone, Serialize)]
pub struct ClearResponse {
    /// Always true
    pub ok: bool,
    /// Always true
    pub cleared: bool,
}

impl ClearResponse {
    /// Creates the cleared confirmation
    pub fn cleared() -> Self {
        Self {
            ok: true,
            cleared: true,
        }
    }
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl StatsResponse {
    /// Creates a new StatsResponse from cache statistics
    pub fn new(hits: u64, misses: u64, total_entries: usize) -> Self {
        let total = hits + misses;
        let hit_rate = if total > 0 {
            hits as f64 / total as f64
        } else {
            0.0
        };
        Self {
            hits,
            misses,
            total_entries,
            hit_rate,
        }
    }
}
