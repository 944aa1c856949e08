//! Cache Module
//!
//! Provides in-memory caching of fetched sheet ranges with lazy TTL expiry.
//! There is no eviction policy and no background sweeper: stale entries are
//! removed opportunistically on the next read of their key.

mod entry;
mod stats;
mod store;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::SheetCache;
