//! Filtering, counting and existence checks over map entries.
//!
//! Every function here is a single pass over the map. None of them go
//! through the sequence adapters.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// Returns a new map with the entries for which `predicate` holds.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use map_utils::maps::select;
///
/// let numbers = HashMap::from([(1, 1), (2, 2), (3, 3), (4, 4)]);
/// let even = select(&numbers, |_, value| value % 2 == 0);
/// assert_eq!(even, HashMap::from([(2, 2), (4, 4)]));
/// ```
pub fn select<K, V, S, F>(map: &HashMap<K, V, S>, mut predicate: F) -> HashMap<K, V, S>
where
    K: Clone + Eq + Hash,
    V: Clone,
    S: BuildHasher + Default,
    F: FnMut(&K, &V) -> bool,
{
    map.iter()
        .filter(|&(key, value)| predicate(key, value))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}

/// Counts the entries for which `predicate` holds.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use map_utils::maps::count_func;
///
/// let numbers = HashMap::from([(1, 1), (2, 2), (3, 3), (4, 4)]);
/// assert_eq!(count_func(&numbers, |_, value| value % 2 != 0), 2);
/// ```
pub fn count_func<K, V, S, F>(map: &HashMap<K, V, S>, mut predicate: F) -> usize
where
    F: FnMut(&K, &V) -> bool,
{
    map.iter()
        .filter(|&(key, value)| predicate(key, value))
        .count()
}

/// Returns `true` when **no** entry satisfies `predicate`.
///
/// The result is `false` as soon as a matching entry is found, and `true`
/// for an empty map. This is the negation of [`contains`]: read the name
/// as "the checked condition is absent", not as "a match exists".
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use map_utils::maps::exists_func;
///
/// let numbers = HashMap::from([(1, 1), (2, 2), (3, 3)]);
/// assert!(!exists_func(&numbers, |_, value| *value == 2));
/// assert!(exists_func(&numbers, |_, value| *value > 5));
/// ```
pub fn exists_func<K, V, S, F>(map: &HashMap<K, V, S>, predicate: F) -> bool
where
    F: FnMut(&K, &V) -> bool,
{
    !contains(map, predicate)
}

/// Returns `true` if the map holds at least one of `keys`.
///
/// Returns `false` when `keys` is empty.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use map_utils::maps::contains_key;
///
/// let names = HashMap::from([("ann".to_string(), 1), ("bob".to_string(), 2)]);
/// assert!(contains_key(&names, ["zed", "bob"]));
/// assert!(!contains_key(&names, ["zed"]));
/// assert!(!contains_key(&names, Vec::<&str>::new()));
/// ```
pub fn contains_key<'q, K, V, S, Q, I>(map: &HashMap<K, V, S>, keys: I) -> bool
where
    K: Borrow<Q> + Eq + Hash,
    Q: ?Sized + Eq + Hash + 'q,
    S: BuildHasher,
    I: IntoIterator<Item = &'q Q>,
{
    keys.into_iter().any(|key| map.contains_key(key))
}

/// Returns `true` if any entry satisfies `predicate`.
///
/// Stops at the first match.
pub fn contains<K, V, S, F>(map: &HashMap<K, V, S>, mut predicate: F) -> bool
where
    F: FnMut(&K, &V) -> bool,
{
    map.iter().any(|(key, value)| predicate(key, value))
}

/// Removes every entry satisfying `predicate` from `map` and returns how
/// many were removed.
///
/// This is the only operation in the crate that modifies its input.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use map_utils::maps::delete;
///
/// let mut numbers = HashMap::from([(1, 1), (2, 2), (3, 3), (4, 4)]);
/// assert_eq!(delete(&mut numbers, |key, _| *key > 2), 2);
/// assert_eq!(numbers, HashMap::from([(1, 1), (2, 2)]));
/// ```
pub fn delete<K, V, S, F>(map: &mut HashMap<K, V, S>, mut predicate: F) -> usize
where
    F: FnMut(&K, &V) -> bool,
{
    let before = map.len();
    map.retain(|key, value| !predicate(key, value));
    before - map.len()
}
