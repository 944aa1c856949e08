//! Configuration Module
//!
//! Handles loading and managing gateway configuration from environment variables.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::retry::RetryPolicy;

/// Placeholder spreadsheet id used when `SPREADSHEET_ID` is not set.
pub const PLACEHOLDER_SPREADSHEET_ID: &str = "YOUR_SHEET_ID";

/// Gateway configuration parameters.
///
/// All values can be configured via environment variables with sensible
/// defaults, except the credentials blob which has no default.
#[derive(Debug, Clone)]
pub struct Config {
    /// Raw service account JSON blob, if provided
    pub credentials_json: Option<String>,
    /// Target spreadsheet id
    pub spreadsheet_id: String,
    /// Target cell range
    pub range: String,
    /// Cache TTL in seconds for fetched ranges
    pub cache_ttl: u64,
    /// Maximum retry attempts after the first try
    pub max_retry_attempts: u32,
    /// Initial delay before the first retry, in milliseconds
    pub initial_retry_delay_ms: u64,
    /// Multiplier applied to the retry delay after each failed attempt
    pub backoff_factor: f64,
    /// Random perturbation bound for retry delays, in milliseconds
    pub jitter_ms: u64,
    /// Primary path for the status snapshot file
    pub status_file: PathBuf,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `GOOGLE_APPLICATION_CREDENTIALS_JSON` - service account JSON (no default)
    /// - `SPREADSHEET_ID` - target spreadsheet (default: placeholder)
    /// - `SHEET_RANGE` - target cell range (default: `A1:B5`)
    /// - `CACHE_TTL_SECONDS` - cache TTL (default: 60)
    /// - `RETRY_MAX_ATTEMPTS` - retries after the first try (default: 3)
    /// - `RETRY_INITIAL_DELAY_MS` - first retry delay (default: 500)
    /// - `RETRY_BACKOFF_FACTOR` - delay multiplier (default: 1.7)
    /// - `RETRY_JITTER_MS` - jitter bound (default: 0)
    /// - `STATUS_FILE` - status snapshot path (default: /var/lib/sheet-relay/status.json)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        Self {
            credentials_json: env::var("GOOGLE_APPLICATION_CREDENTIALS_JSON")
                .ok()
                .filter(|v| !v.is_empty()),
            spreadsheet_id: env::var("SPREADSHEET_ID")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| PLACEHOLDER_SPREADSHEET_ID.to_string()),
            range: env::var("SHEET_RANGE")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| "A1:B5".to_string()),
            cache_ttl: env::var("CACHE_TTL_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
            max_retry_attempts: env::var("RETRY_MAX_ATTEMPTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3),
            initial_retry_delay_ms: env::var("RETRY_INITIAL_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(500),
            backoff_factor: env::var("RETRY_BACKOFF_FACTOR")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(1.7),
            jitter_ms: env::var("RETRY_JITTER_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(0),
            status_file: env::var("STATUS_FILE")
                .ok()
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("/var/lib/sheet-relay/status.json")),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
        }
    }

    /// Builds the retry policy from the configured knobs.
    pub fn retry_policy(&self) -> RetryPolicy {
        RetryPolicy::new(
            self.max_retry_attempts,
            Duration::from_millis(self.initial_retry_delay_ms),
            self.backoff_factor,
            Duration::from_millis(self.jitter_ms),
        )
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            credentials_json: None,
            spreadsheet_id: PLACEHOLDER_SPREADSHEET_ID.to_string(),
            range: "A1:B5".to_string(),
            cache_ttl: 60,
            max_retry_attempts: 3,
            initial_retry_delay_ms: 500,
            backoff_factor: 1.7,
            jitter_ms: 0,
            status_file: PathBuf::from("/var/lib/sheet-relay/status.json"),
            server_port: 3000,
        }
    }
}
