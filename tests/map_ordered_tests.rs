#![cfg(feature = "maps")]
//! Tests for positional access and rendering in ascending key order.

use std::collections::HashMap;

use map_utils::MapError;
use map_utils::maps::{at, first, first_or_default, join, last, last_or_default, sorted_keys};
use rstest::{fixture, rstest};

#[fixture]
fn letters() -> HashMap<&'static str, i32> {
    HashMap::from([("c", 3), ("a", 1), ("b", 2)])
}

// =============================================================================
// sorted_keys
// =============================================================================

#[rstest]
fn test_sorted_keys_ascending(letters: HashMap<&'static str, i32>) {
    assert_eq!(sorted_keys(&letters), [&"a", &"b", &"c"]);
}

#[rstest]
fn test_sorted_keys_reflects_mutation(mut letters: HashMap<&'static str, i32>) {
    assert_eq!(sorted_keys(&letters).len(), 3);
    letters.insert("0", 0);
    assert_eq!(sorted_keys(&letters)[0], &"0");
}

// =============================================================================
// at
// =============================================================================

#[rstest]
#[case(0, 1)]
#[case(1, 2)]
#[case(2, 3)]
fn test_at_in_key_order(letters: HashMap<&'static str, i32>, #[case] index: usize, #[case] expected: i32) {
    assert_eq!(at(&letters, index), Ok(&expected));
}

#[rstest]
#[case(3)]
#[case(4)]
#[case(usize::MAX)]
fn test_at_out_of_bounds(letters: HashMap<&'static str, i32>, #[case] index: usize) {
    let error = at(&letters, index).unwrap_err();
    assert_eq!(error, MapError::IndexOutOfBounds { index, length: 3 });
    assert!(error.is_out_of_range());
}

#[rstest]
fn test_at_empty_map() {
    let map: HashMap<i32, i32> = HashMap::new();
    let error = at(&map, 0).unwrap_err();
    assert_eq!(error, MapError::Empty);
    assert!(error.is_out_of_range());
    assert_eq!(error.to_string(), "map is empty");
}

#[rstest]
fn test_at_single_entry() {
    let map = HashMap::from([(42, "answer")]);
    assert_eq!(at(&map, 0), Ok(&"answer"));
    assert!(at(&map, 1).is_err());
}

#[rstest]
fn test_at_string_keys_use_lexical_order() {
    let map = HashMap::from([
        ("10".to_string(), 'b'),
        ("9".to_string(), 'c'),
        ("1".to_string(), 'a'),
    ]);
    assert_eq!(at(&map, 0), Ok(&'a'));
    assert_eq!(at(&map, 1), Ok(&'b'));
    assert_eq!(at(&map, 2), Ok(&'c'));
}

// =============================================================================
// first / last
// =============================================================================

#[rstest]
fn test_first_and_last(letters: HashMap<&'static str, i32>) {
    assert_eq!(first(&letters), Some(&1));
    assert_eq!(last(&letters), Some(&3));
}

#[rstest]
fn test_first_and_last_match_at(letters: HashMap<&'static str, i32>) {
    assert_eq!(first(&letters), at(&letters, 0).ok());
    assert_eq!(last(&letters), at(&letters, letters.len() - 1).ok());
}

#[rstest]
fn test_first_and_last_empty_map_are_not_errors() {
    let map: HashMap<i32, i32> = HashMap::new();
    assert_eq!(first(&map), None);
    assert_eq!(last(&map), None);
    assert_eq!(first_or_default(&map), 0);
    assert_eq!(last_or_default(&map), 0);
}

#[rstest]
fn test_or_default_on_populated_map(letters: HashMap<&'static str, i32>) {
    assert_eq!(first_or_default(&letters), 1);
    assert_eq!(last_or_default(&letters), 3);
}

// =============================================================================
// join
// =============================================================================

#[rstest]
fn test_join_orders_by_key() {
    let map = HashMap::from([(3, 30), (1, 10), (2, 20)]);
    assert_eq!(join(&map, ", "), "1=10, 2=20, 3=30");
}

#[rstest]
#[case(", ")]
#[case("")]
#[case("\n")]
fn test_join_empty_map(#[case] separator: &str) {
    let map: HashMap<i32, i32> = HashMap::new();
    assert_eq!(join(&map, separator), "");
}

#[rstest]
fn test_join_single_entry_has_no_separator() {
    let map = HashMap::from([("only", true)]);
    assert_eq!(join(&map, " | "), "only=true");
}

#[rstest]
fn test_join_string_values(letters: HashMap<&'static str, i32>) {
    assert_eq!(join(&letters, ";"), "a=1;b=2;c=3");
}
