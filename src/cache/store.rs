//! Cache Store Module
//!
//! HashMap-backed storage for fetched sheet ranges with lazy TTL expiry.

use std::collections::HashMap;

use crate::cache::{CacheEntry, CacheStats};
use crate::sheets::SheetRows;

// == Sheet Cache ==
/// In-memory cache mapping `spreadsheet_id:range` keys to fetched rows.
///
/// Unbounded, with no eviction policy beyond lazy TTL expiry: an expired
/// entry is removed as a side effect of the next `get` on its key. All
/// operations are total. The store has no internal locking; callers wrap
/// it in `Arc<RwLock<_>>` to share it between request handlers.
#[derive(Debug, Default)]
pub struct SheetCache {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Performance statistics
    stats: CacheStats,
}

impl SheetCache {
    // == Constructor ==
    /// Creates a new empty SheetCache.
    pub fn new() -> Self {
        Self::default()
    }

    // == Get ==
    /// Retrieves the cached rows for a key.
    ///
    /// Returns the rows if present and not expired. A stale entry is removed
    /// as a side effect and counted as a miss, exactly like an absent key.
    pub fn get(&mut self, key: &str) -> Option<SheetRows> {
        if let Some(entry) = self.entries.get(key) {
            if entry.is_expired() {
                // Remove stale entry as a side effect of the read
                self.entries.remove(key);
                self.stats.set_total_entries(self.entries.len());
                self.stats.record_miss();
                return None;
            }

            let rows = entry.rows.clone();
            self.stats.record_hit();
            return Some(rows);
        }

        self.stats.record_miss();
        None
    }

    // == Set ==
    /// Stores rows under a key with the given TTL in seconds.
    ///
    /// Overwrites any existing entry for that key unconditionally and
    /// resets its expiry.
    pub fn set(&mut self, key: String, rows: SheetRows, ttl_seconds: u64) {
        let entry = CacheEntry::new(rows, ttl_seconds);
        self.entries.insert(key, entry);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Clear ==
    /// Removes all entries, regardless of expiry state.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.stats.set_total_entries(0);
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    /// Returns true if the cache is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
