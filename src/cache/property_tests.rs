//! Property-Based Tests for Cache Module
//!
//! Uses proptest to verify the cache contract over arbitrary operation
//! sequences and row shapes.

use proptest::prelude::*;
use std::collections::HashMap;

use crate::cache::SheetCache;
use crate::sheets::SheetRows;

// == Test Configuration ==
const TEST_TTL: u64 = 300;

// == Strategies ==
/// Generates cache keys shaped like `spreadsheet:range` composites
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_-]{1,32}:[A-Z]{1,2}[0-9]{1,3}:[A-Z]{1,2}[0-9]{1,3}"
}

/// Generates row grids of up to 10x10 short cells
fn rows_strategy() -> impl Strategy<Value = SheetRows> {
    prop::collection::vec(
        prop::collection::vec("[a-zA-Z0-9 ]{0,16}", 0..10),
        0..10,
    )
}

/// A sequence of cache operations for model-based testing
#[derive(Debug, Clone)]
enum CacheOp {
    Set { key: String, rows: SheetRows },
    Get { key: String },
    Clear,
}

fn cache_op_strategy() -> impl Strategy<Value = CacheOp> {
    prop_oneof![
        4 => (key_strategy(), rows_strategy())
            .prop_map(|(key, rows)| CacheOp::Set { key, rows }),
        4 => key_strategy().prop_map(|key| CacheOp::Get { key }),
        1 => Just(CacheOp::Clear),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // A key that was never set is always absent.
    #[test]
    fn prop_unset_keys_are_absent(key in key_strategy()) {
        let mut cache = SheetCache::new();
        prop_assert!(cache.get(&key).is_none());
    }

    // Immediately after a set with a positive TTL, get returns the value.
    #[test]
    fn prop_set_then_get(key in key_strategy(), rows in rows_strategy()) {
        let mut cache = SheetCache::new();
        cache.set(key.clone(), rows.clone(), TEST_TTL);
        prop_assert_eq!(cache.get(&key), Some(rows));
    }

    // Overwriting a key leaves exactly one entry holding the latest rows.
    #[test]
    fn prop_overwrite_keeps_latest(
        key in key_strategy(),
        first in rows_strategy(),
        second in rows_strategy(),
    ) {
        let mut cache = SheetCache::new();
        cache.set(key.clone(), first, TEST_TTL);
        cache.set(key.clone(), second.clone(), TEST_TTL);
        prop_assert_eq!(cache.len(), 1);
        prop_assert_eq!(cache.get(&key), Some(second));
    }

    // Clear empties the cache no matter what was stored before.
    #[test]
    fn prop_clear_empties(ops in prop::collection::vec(cache_op_strategy(), 1..30)) {
        let mut cache = SheetCache::new();
        for op in ops {
            match op {
                CacheOp::Set { key, rows } => cache.set(key, rows, TEST_TTL),
                CacheOp::Get { key } => { let _ = cache.get(&key); }
                CacheOp::Clear => cache.clear(),
            }
        }
        cache.clear();
        prop_assert!(cache.is_empty());
    }

    // The cache agrees with a plain HashMap model under unexpired TTLs.
    #[test]
    fn prop_matches_model(ops in prop::collection::vec(cache_op_strategy(), 1..50)) {
        let mut cache = SheetCache::new();
        let mut model: HashMap<String, SheetRows> = HashMap::new();

        for op in ops {
            match op {
                CacheOp::Set { key, rows } => {
                    cache.set(key.clone(), rows.clone(), TEST_TTL);
                    model.insert(key, rows);
                }
                CacheOp::Get { key } => {
                    prop_assert_eq!(cache.get(&key), model.get(&key).cloned());
                }
                CacheOp::Clear => {
                    cache.clear();
                    model.clear();
                }
            }
        }
        prop_assert_eq!(cache.len(), model.len());
    }
}
