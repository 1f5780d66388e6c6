//! Tests for maps built with non-default hashers.
//!
//! Every operation that returns a map reuses the input's `BuildHasher`.
//! These tests run the operations over a custom hasher and, when the
//! `fxhash` or `ahash` feature is enabled, over [`FastHashMap`].

use std::collections::HashMap;
use std::hash::{BuildHasherDefault, DefaultHasher};

use map_utils::maps::{at, convert, delete, join, remap, select, summarize};
use rstest::rstest;

type DeterministicMap<K, V> = HashMap<K, V, BuildHasherDefault<DefaultHasher>>;

fn deterministic(entries: &[(i32, i32)]) -> DeterministicMap<i32, i32> {
    entries.iter().copied().collect()
}

// =============================================================================
// Custom BuildHasher
// =============================================================================

#[rstest]
fn test_select_keeps_hasher_type() {
    let map = deterministic(&[(1, 1), (2, 2), (3, 3)]);
    let selected: DeterministicMap<i32, i32> = select(&map, |key, _| *key > 1);
    assert_eq!(selected, deterministic(&[(2, 2), (3, 3)]));
}

#[rstest]
fn test_convert_and_remap_keep_hasher_type() {
    let map = deterministic(&[(1, 10), (2, 20)]);

    let converted: DeterministicMap<i32, String> =
        convert(&map, |_, value| Ok::<_, ()>(value.to_string())).unwrap();
    assert_eq!(converted[&2], "20");

    let swapped: DeterministicMap<i32, i32> =
        remap(&map, |key, value| Ok::<_, ()>((*value, *key))).unwrap();
    assert_eq!(swapped, deterministic(&[(10, 1), (20, 2)]));
}

#[rstest]
fn test_ordered_operations_ignore_hasher() {
    let map = deterministic(&[(30, 3), (10, 1), (20, 2)]);
    assert_eq!(at(&map, 0), Ok(&1));
    assert_eq!(join(&map, ","), "10=1,20=2,30=3");
}

#[rstest]
fn test_delete_and_summarize() {
    let mut map = deterministic(&[(1, 5), (2, 6), (3, 7)]);
    assert_eq!(delete(&mut map, |key, _| *key == 2), 1);
    assert_eq!(summarize(&map, |_, value| *value), 12);
}

// =============================================================================
// FastHashMap
// =============================================================================

#[cfg(any(feature = "fxhash", feature = "ahash"))]
mod fast_hash_map {
    use map_utils::maps::{FastHashMap, contains_key, first, join, select};
    use rstest::rstest;

    fn sample() -> FastHashMap<String, i32> {
        [("alpha", 1), ("beta", 2), ("gamma", 3)]
            .into_iter()
            .map(|(key, value)| (key.to_string(), value))
            .collect()
    }

    #[rstest]
    fn test_operations_work_with_fast_hasher() {
        let map = sample();
        let odd: FastHashMap<String, i32> = select(&map, |_, value| value % 2 == 1);
        assert_eq!(odd.len(), 2);
        assert!(contains_key(&map, ["beta"]));
        assert_eq!(first(&map), Some(&1));
        assert_eq!(join(&odd, " "), "alpha=1 gamma=3");
    }

    #[rstest]
    fn test_same_entries_same_lookups() {
        let left = sample();
        let right = sample();
        for (key, value) in &left {
            assert_eq!(right.get(key), Some(value));
        }
    }
}
