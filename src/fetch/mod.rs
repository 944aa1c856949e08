//! Fetch Pipeline Module
//!
//! Glue between the cache, the retry executor and the remote sheet source.
//! Control flow per request: compute cache key, serve a hit directly,
//! otherwise retry the remote read and cache the result.

use std::sync::Arc;

use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::cache::SheetCache;
use crate::error::Result;
use crate::retry::{self, RetryPolicy};
use crate::sheets::{SheetRows, SheetSource};

// == Fetch Source Tag ==
/// Where a successful response was served from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchSource {
    /// Served from the in-memory cache
    Cache,
    /// Fetched from the remote API on this request
    Live,
}

impl FetchSource {
    /// Wire name of the source tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchSource::Cache => "cache",
            FetchSource::Live => "live",
        }
    }
}

// == Fetch Outcome ==
/// A successful pipeline run.
#[derive(Debug, Clone)]
pub struct FetchOutcome {
    /// The fetched or cached rows
    pub rows: SheetRows,
    /// Where the rows came from
    pub source: FetchSource,
    /// Retry attempts consumed; always 0 for cache hits
    pub attempts_used: u32,
}

/// Builds the composite cache key for a spreadsheet range.
pub fn cache_key(spreadsheet_id: &str, range: &str) -> String {
    format!("{}:{}", spreadsheet_id, range)
}

// == Fetch Pipeline ==
/// Orchestrates one cached, retried read of a fixed spreadsheet range.
///
/// The pipeline itself is never retried; only the inner remote call is.
/// Failures are never cached.
pub struct FetchPipeline {
    cache: Arc<RwLock<SheetCache>>,
    source: Arc<dyn SheetSource>,
    policy: RetryPolicy,
    spreadsheet_id: String,
    range: String,
    cache_ttl: u64,
}

impl FetchPipeline {
    // == Constructor ==
    pub fn new(
        cache: Arc<RwLock<SheetCache>>,
        source: Arc<dyn SheetSource>,
        policy: RetryPolicy,
        spreadsheet_id: String,
        range: String,
        cache_ttl: u64,
    ) -> Self {
        Self {
            cache,
            source,
            policy,
            spreadsheet_id,
            range,
            cache_ttl,
        }
    }

    // == Fetch ==
    /// Runs the pipeline once: cache lookup, then a retried live fetch on a
    /// miss. A live success is stored in the cache with the configured TTL
    /// before returning.
    pub async fn fetch(&self) -> Result<FetchOutcome> {
        let key = cache_key(&self.spreadsheet_id, &self.range);

        // The lookup takes the write lock because lazy expiry removes stale
        // entries as a side effect of the read.
        if let Some(rows) = self.cache.write().await.get(&key) {
            debug!("Cache hit for {}", key);
            return Ok(FetchOutcome {
                rows,
                source: FetchSource::Cache,
                attempts_used: 0,
            });
        }

        debug!("Cache miss for {}, fetching live", key);

        let remote = Arc::clone(&self.source);
        let spreadsheet_id = self.spreadsheet_id.clone();
        let range = self.range.clone();

        let retried = retry::execute(&self.policy, move |_attempt| {
            let remote = Arc::clone(&remote);
            let spreadsheet_id = spreadsheet_id.clone();
            let range = range.clone();
            async move { remote.fetch_values(&spreadsheet_id, &range).await }
        })
        .await?;

        self.cache
            .write()
            .await
            .set(key, retried.value.clone(), self.cache_ttl);

        info!(
            "Fetched {} rows live after {} retry attempts",
            retried.value.len(),
            retried.attempts_used
        );

        Ok(FetchOutcome {
            rows: retried.value,
            source: FetchSource::Live,
            attempts_used: retried.attempts_used,
        })
    }
}
