//! Positional access and rendering in ascending key order.
//!
//! A `HashMap` has no order of its own. Each function here derives one
//! from the keys' `Ord` implementation on every call; nothing is cached,
//! so the result always reflects the map's current contents.
//!
//! Cost: [`sorted_keys`] and [`join`] sort all entries (O(n log n)).
//! [`at`] partitions around the requested position (O(n) on average) and
//! [`first`]/[`last`] are a single min/max scan (O(n)).

use std::collections::HashMap;
use std::fmt::Display;

use crate::error::MapError;

/// Returns the map's keys in ascending order.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use map_utils::maps::sorted_keys;
///
/// let map = HashMap::from([("c", 3), ("a", 1), ("b", 2)]);
/// assert_eq!(sorted_keys(&map), [&"a", &"b", &"c"]);
/// ```
pub fn sorted_keys<K: Ord, V, S>(map: &HashMap<K, V, S>) -> Vec<&K> {
    let mut keys: Vec<&K> = map.keys().collect();
    keys.sort_unstable();
    keys
}

fn sorted_entries<K: Ord, V, S>(map: &HashMap<K, V, S>) -> Vec<(&K, &V)> {
    let mut entries: Vec<(&K, &V)> = map.iter().collect();
    entries.sort_unstable_by(|(left, _), (right, _)| left.cmp(right));
    entries
}

/// Returns the value of the smallest key, or `None` for an empty map.
///
/// An empty map is not an error here, unlike [`at`].
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use map_utils::maps::first;
///
/// assert_eq!(first(&HashMap::from([(2, "b"), (1, "a")])), Some(&"a"));
/// assert_eq!(first(&HashMap::<i32, &str>::new()), None);
/// ```
pub fn first<K: Ord, V, S>(map: &HashMap<K, V, S>) -> Option<&V> {
    map.iter()
        .min_by_key(|&(key, _)| key)
        .map(|(_, value)| value)
}

/// Returns the value of the largest key, or `None` for an empty map.
pub fn last<K: Ord, V, S>(map: &HashMap<K, V, S>) -> Option<&V> {
    map.iter()
        .max_by_key(|&(key, _)| key)
        .map(|(_, value)| value)
}

/// Like [`first`], but returns `V::default()` for an empty map.
pub fn first_or_default<K: Ord, V: Clone + Default, S>(map: &HashMap<K, V, S>) -> V {
    first(map).cloned().unwrap_or_default()
}

/// Like [`last`], but returns `V::default()` for an empty map.
pub fn last_or_default<K: Ord, V: Clone + Default, S>(map: &HashMap<K, V, S>) -> V {
    last(map).cloned().unwrap_or_default()
}

/// Returns the value at `index` in ascending key order.
///
/// # Errors
///
/// Returns [`MapError::Empty`] if the map has no entries and
/// [`MapError::IndexOutOfBounds`] if `index >= map.len()`.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use map_utils::MapError;
/// use map_utils::maps::at;
///
/// let map = HashMap::from([("a", 1), ("b", 2), ("c", 3)]);
/// assert_eq!(at(&map, 1), Ok(&2));
/// assert_eq!(at(&map, 3), Err(MapError::IndexOutOfBounds { index: 3, length: 3 }));
/// ```
pub fn at<K: Ord, V, S>(map: &HashMap<K, V, S>, index: usize) -> Result<&V, MapError> {
    let length = map.len();
    if length == 0 {
        return Err(MapError::Empty);
    }
    if index >= length {
        return Err(MapError::IndexOutOfBounds { index, length });
    }

    let mut entries: Vec<(&K, &V)> = map.iter().collect();
    let (_, nth, _) =
        entries.select_nth_unstable_by(index, |(left, _), (right, _)| left.cmp(right));
    Ok(nth.1)
}

/// Renders the entries as `key=value` in ascending key order, joined by
/// `separator`. An empty map renders as an empty string.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use map_utils::maps::join;
///
/// let map = HashMap::from([(3, 30), (1, 10), (2, 20)]);
/// assert_eq!(join(&map, ", "), "1=10, 2=20, 3=30");
/// ```
pub fn join<K, V, S>(map: &HashMap<K, V, S>, separator: &str) -> String
where
    K: Ord + Display,
    V: Display,
{
    sorted_entries(map)
        .into_iter()
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join(separator)
}
