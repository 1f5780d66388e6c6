#![cfg(feature = "sequence")]
//! Property-based tests for the sequence adapters.
//!
//! This module verifies the adapter contract with proptest: element counts,
//! size hints, early termination and failure handling.

use std::cell::Cell;

use map_utils::control::Either;
use map_utils::sequence::SequenceExt;
use proptest::prelude::*;

// =============================================================================
// Strategy for generating test data
// =============================================================================

fn arbitrary_pairs() -> impl Strategy<Value = Vec<(u16, i32)>> {
    prop::collection::vec((any::<u16>(), any::<i32>()), 0..64)
}

// =============================================================================
// Flatten: length doubles and pairs are reconstructible
// =============================================================================

proptest! {
    #[test]
    fn prop_flatten_doubles_length(pairs in arbitrary_pairs()) {
        let flattened = pairs.clone().into_iter().flatten_pairs();
        prop_assert_eq!(flattened.len(), pairs.len() * 2);
        prop_assert_eq!(flattened.count(), pairs.len() * 2);
    }

    #[test]
    fn prop_flatten_reconstructs_pairs(pairs in arbitrary_pairs()) {
        let flattened: Vec<Either<u16, i32>> = pairs.clone().into_iter().flatten_pairs().collect();

        let rebuilt: Vec<(u16, i32)> = flattened
            .chunks_exact(2)
            .map(|chunk| match chunk {
                [Either::Left(key), Either::Right(value)] => (*key, *value),
                other => panic!("unexpected chunk {other:?}"),
            })
            .collect();

        prop_assert_eq!(rebuilt, pairs);
    }
}

// =============================================================================
// Weight: one element per pair, in order
// =============================================================================

proptest! {
    #[test]
    fn prop_weight_matches_plain_map(pairs in arbitrary_pairs()) {
        let weights: Vec<i64> = pairs
            .clone()
            .into_iter()
            .weight_func(|key, value| i64::from(key) + i64::from(value))
            .collect();
        let expected: Vec<i64> = pairs
            .iter()
            .map(|(key, value)| i64::from(*key) + i64::from(*value))
            .collect();

        prop_assert_eq!(weights, expected);
    }
}

// =============================================================================
// Early termination: at most k callbacks for k pulled elements
// =============================================================================

proptest! {
    #[test]
    fn prop_take_bounds_callback_count(pairs in arbitrary_pairs(), taken in 0usize..80) {
        let calls = Cell::new(0usize);
        let collected = pairs
            .clone()
            .into_iter()
            .remap_func(|key, value| {
                calls.set(calls.get() + 1);
                Ok::<_, ()>((value, key))
            })
            .take(taken)
            .count();

        prop_assert_eq!(collected, taken.min(pairs.len()));
        prop_assert!(calls.get() <= taken);
    }
}

// =============================================================================
// Failure: collection stops at the first failing element
// =============================================================================

proptest! {
    #[test]
    fn prop_remap_failure_stops_collection(
        pairs in prop::collection::vec((any::<u16>(), any::<i32>()), 1..64),
        failing_position in any::<prop::sample::Index>()
    ) {
        let failing = failing_position.index(pairs.len());
        let calls = Cell::new(0usize);

        let collected: Result<Vec<(u16, i32)>, usize> = pairs
            .clone()
            .into_iter()
            .enumerate()
            .remap_func(|position, pair| {
                calls.set(calls.get() + 1);
                if position == failing { Err(position) } else { Ok(pair) }
            })
            .collect();

        prop_assert_eq!(collected, Err(failing));
        prop_assert_eq!(calls.get(), failing + 1);
    }

    #[test]
    fn prop_slice_keeps_only_present_results(pairs in arbitrary_pairs()) {
        let kept: Result<Vec<i32>, ()> = pairs
            .clone()
            .into_iter()
            .slice_func(|key, value| Ok((key % 3 == 0).then_some(value)))
            .collect();
        let expected: Vec<i32> = pairs
            .iter()
            .filter(|(key, _)| key % 3 == 0)
            .map(|(_, value)| *value)
            .collect();

        prop_assert_eq!(kept, Ok(expected));
    }
}
