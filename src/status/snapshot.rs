//! Status Snapshot Module
//!
//! The serialized record of one fetch request's outcome.

use serde::Serialize;

use crate::fetch::FetchOutcome;

// == Status Snapshot ==
/// Point-in-time record written to the status sink after each request.
#[derive(Debug, Clone, Serialize)]
pub struct StatusSnapshot {
    /// When the request finished, RFC 3339
    pub timestamp: String,
    /// Target spreadsheet
    pub spreadsheet_id: String,
    /// Target cell range
    pub range: String,
    /// Retry attempts consumed by this request
    pub attempts_used: u32,
    /// Configured retry budget
    pub max_attempts: u32,
    /// Human-readable outcome description
    pub status: String,
    /// Configured cache TTL in seconds
    pub cache_ttl_seconds: u64,
    /// "cache" or "live" on success, absent on failure
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

impl StatusSnapshot {
    // == Success ==
    /// Snapshot for a served request.
    pub fn success(
        spreadsheet_id: &str,
        range: &str,
        outcome: &FetchOutcome,
        max_attempts: u32,
        cache_ttl_seconds: u64,
    ) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            spreadsheet_id: spreadsheet_id.to_string(),
            range: range.to_string(),
            attempts_used: outcome.attempts_used,
            max_attempts,
            status: format!(
                "served {} rows from {}",
                outcome.rows.len(),
                outcome.source.as_str()
            ),
            cache_ttl_seconds,
            source: Some(outcome.source.as_str().to_string()),
        }
    }

    // == Failure ==
    /// Snapshot for a failed request. Consumed attempts equal the full
    /// retry budget once the executor is exhausted; configuration errors
    /// consume none.
    pub fn failure(
        spreadsheet_id: &str,
        range: &str,
        message: &str,
        attempts_used: u32,
        max_attempts: u32,
        cache_ttl_seconds: u64,
    ) -> Self {
        Self {
            timestamp: chrono::Utc::now().to_rfc3339(),
            spreadsheet_id: spreadsheet_id.to_string(),
            range: range.to_string(),
            attempts_used,
            max_attempts,
            status: format!("fetch failed: {}", message),
            cache_ttl_seconds,
            source: None,
        }
    }
}
