//! Eager transformations built on the sequence adapters.
//!
//! Each function builds one adapter from [`crate::sequence`] over the
//! borrowed map and drains it into a new map, vector or scalar. Fallible
//! transforms return the callback's error unchanged; the first failure
//! stops the traversal and the partially built result is discarded.

use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};
use std::ops::Add;

use crate::control::Either;
use crate::sequence::{flatten_seq, remap_func_seq, slice_func_seq, weight_func_seq};
use crate::typeclass::{Monoid, Sum};

/// Returns a map with the same keys and every value replaced by
/// `function(key, value)`.
///
/// # Errors
///
/// Returns the first error produced by `function`. Entries visited after
/// it are not transformed.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use map_utils::maps::convert;
///
/// let raw = HashMap::from([("a", "1"), ("b", "2")]);
/// let parsed = convert(&raw, |_, value| value.parse::<i32>()).unwrap();
/// assert_eq!(parsed, HashMap::from([("a", 1), ("b", 2)]));
///
/// let broken = HashMap::from([("a", "x")]);
/// assert!(convert(&broken, |_, value| value.parse::<i32>()).is_err());
/// ```
pub fn convert<K, V, V2, S, E, F>(
    map: &HashMap<K, V, S>,
    mut function: F,
) -> Result<HashMap<K, V2, S>, E>
where
    K: Clone + Eq + Hash,
    S: BuildHasher + Default,
    F: FnMut(&K, &V) -> Result<V2, E>,
{
    remap_func_seq(map, |key, value| {
        function(key, value).map(|converted| (key.clone(), converted))
    })
    .collect()
}

/// Returns a map whose keys and values are both produced by `function`.
///
/// When two entries are mapped to the same key, the one processed later
/// wins. The processing order follows the source map's iteration order,
/// which is unspecified.
///
/// # Errors
///
/// Returns the first error produced by `function`.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use std::convert::Infallible;
/// use map_utils::maps::remap;
///
/// let map = HashMap::from([(1, 10), (2, 20)]);
/// let renamed = remap(&map, |key, value| {
///     Ok::<_, Infallible>((format!("k{key}"), format!("v{value}")))
/// })
/// .unwrap();
/// assert_eq!(renamed["k1"], "v10");
/// assert_eq!(renamed["k2"], "v20");
/// ```
pub fn remap<K, V, K2, V2, S, E, F>(
    map: &HashMap<K, V, S>,
    function: F,
) -> Result<HashMap<K2, V2, S>, E>
where
    K2: Eq + Hash,
    S: BuildHasher + Default,
    F: FnMut(&K, &V) -> Result<(K2, V2), E>,
{
    remap_func_seq(map, function).collect()
}

/// Collects the present results of `function` into a vector.
///
/// Entries for which `function` returns `Ok(None)` are skipped. The order
/// of the results follows the map's iteration order.
///
/// # Errors
///
/// Returns the first error produced by `function`.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use map_utils::maps::slice;
///
/// let stock = HashMap::from([("apple", 3), ("pear", 0), ("plum", 5)]);
/// let mut available = slice(&stock, |name, count| {
///     Ok::<_, String>((*count > 0).then(|| name.to_string()))
/// })
/// .unwrap();
/// available.sort();
/// assert_eq!(available, ["apple", "plum"]);
/// ```
pub fn slice<K, V, S, R, E, F>(map: &HashMap<K, V, S>, function: F) -> Result<Vec<R>, E>
where
    F: FnMut(&K, &V) -> Result<Option<R>, E>,
{
    slice_func_seq(map, function).collect()
}

/// Adds up `function(key, value)` over all entries.
///
/// Returns `T::default()` (zero for the numeric types) for an empty map.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use map_utils::maps::summarize;
///
/// let cart = HashMap::from([("tea", (2, 3.5)), ("milk", (1, 1.25))]);
/// let total = summarize(&cart, |_, (quantity, price)| f64::from(*quantity) * price);
/// assert!((total - 8.25).abs() < f64::EPSILON);
/// ```
pub fn summarize<K, V, S, T, F>(map: &HashMap<K, V, S>, mut function: F) -> T
where
    T: Add<Output = T> + Default,
    F: FnMut(&K, &V) -> T,
{
    fold_map(map, |key, value| Sum::new(function(key, value))).into_inner()
}

/// Combines `function(key, value)` over all entries with a [`Monoid`].
///
/// Returns `M::empty()` for an empty map.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use map_utils::maps::fold_map;
/// use map_utils::typeclass::{Max, Min};
///
/// let latency = HashMap::from([("eu", 42u32), ("us", 17), ("ap", 88)]);
/// assert_eq!(fold_map(&latency, |_, ms| Max::new(*ms)).into_inner(), 88);
/// assert_eq!(fold_map(&latency, |_, ms| Min::new(*ms)).into_inner(), 17);
/// ```
pub fn fold_map<K, V, S, M, F>(map: &HashMap<K, V, S>, function: F) -> M
where
    M: Monoid,
    F: FnMut(&K, &V) -> M,
{
    M::combine_all(weight_func_seq(map, function))
}

/// Returns every entry as two elements, the key followed by its value.
///
/// The result has exactly `2 * map.len()` elements. Pairs appear in the
/// map's iteration order.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use map_utils::control::Either;
/// use map_utils::maps::flatten;
///
/// let flat = flatten(&HashMap::from([("id", 7)]));
/// assert_eq!(flat, [Either::Left("id"), Either::Right(7)]);
/// ```
pub fn flatten<K: Clone, V: Clone, S>(map: &HashMap<K, V, S>) -> Vec<Either<K, V>> {
    flatten_seq(map).map(|element| element.cloned()).collect()
}
