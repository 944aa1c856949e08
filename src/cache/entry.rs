//! Cache Entry Module
//!
//! Defines the structure for individual cache entries with TTL support.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::sheets::SheetRows;

// == Cache Entry ==
/// A cached sheet range with its absolute expiry time.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The cached rows
    pub rows: SheetRows,
    /// Creation timestamp (Unix milliseconds)
    pub created_at: u64,
    /// Expiration timestamp (Unix milliseconds)
    pub expires_at: u64,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates a new cache entry expiring `ttl_seconds` from now.
    pub fn new(rows: SheetRows, ttl_seconds: u64) -> Self {
        let now = current_timestamp_ms();
        Self {
            rows,
            created_at: now,
            expires_at: now + ttl_seconds * 1000,
        }
    }

    // == Is Expired ==
    /// Checks if the entry has expired.
    ///
    /// An entry is visible to readers only while `now < expires_at`, so the
    /// boundary instant itself already counts as expired.
    pub fn is_expired(&self) -> bool {
        current_timestamp_ms() >= self.expires_at
    }

    // == Time To Live ==
    /// Returns remaining TTL in milliseconds, 0 once expired.
    pub fn ttl_remaining_ms(&self) -> u64 {
        let now = current_timestamp_ms();
        self.expires_at.saturating_sub(now)
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in milliseconds.
pub fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("Time went backwards")
        .as_millis() as u64
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;
    use std::thread::sleep;
    use std::time::Duration;

    fn sample_rows() -> SheetRows {
        vec![vec!["a".to_string(), "b".to_string()]]
    }

    #[test]
    fn test_entry_creation() {
        let entry = CacheEntry::new(sample_rows(), 60);

        assert_eq!(entry.rows, sample_rows());
        assert!(entry.expires_at > entry.created_at);
        assert!(!entry.is_expired());
    }

    #[test]
    fn test_entry_expiration() {
        // 1 second TTL
        let entry = CacheEntry::new(sample_rows(), 1);

        assert!(!entry.is_expired());

        sleep(Duration::from_millis(1100));

        assert!(entry.is_expired());
    }

    #[test]
    fn test_zero_ttl_expires_immediately() {
        let entry = CacheEntry::new(sample_rows(), 0);
        assert!(entry.is_expired());
    }

    #[test]
    fn test_ttl_remaining_ms() {
        let entry = CacheEntry::new(sample_rows(), 10);

        let remaining = entry.ttl_remaining_ms();
        assert!(remaining <= 10_000);
        assert!(remaining >= 9_000);
    }

    #[test]
    fn test_ttl_remaining_expired_is_zero() {
        let now = current_timestamp_ms();
        let entry = CacheEntry {
            rows: sample_rows(),
            created_at: now.saturating_sub(2000),
            expires_at: now.saturating_sub(1000),
        };

        assert_eq!(entry.ttl_remaining_ms(), 0);
        assert!(entry.is_expired());
    }

    #[test]
    fn test_expiration_boundary_condition() {
        let now = current_timestamp_ms();
        let entry = CacheEntry {
            rows: sample_rows(),
            created_at: now,
            expires_at: now, // expires exactly at creation time
        };

        assert!(entry.is_expired(), "Entry should be expired at boundary");
    }
}
