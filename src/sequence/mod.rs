//! Lazy adapters over key/value sequences.
//!
//! A key/value sequence is any iterator of `(K, V)` pairs, most commonly
//! `map.iter()` or `map.into_iter()`. The adapters in this module wrap such
//! a sequence together with a per-entry callback and produce a new lazy
//! sequence:
//!
//! - [`RemapFunc`]: `(K, V) -> Result<(K2, V2), E>`, yields `Result<(K2, V2), E>`
//! - [`WeightFunc`]: `(K, V) -> S`, yields `S`
//! - [`SliceFunc`]: `(K, V) -> Result<Option<R>, E>`, yields `Result<R, E>`
//! - [`FlattenPairs`]: yields `Either::Left(key)` then `Either::Right(value)`
//!
//! # Contract
//!
//! All adapters are pull-based. Nothing runs until the consumer calls
//! `next`, and each call pulls only as many source pairs as it needs. A
//! consumer cancels by not pulling any more (`take`, `find`, dropping the
//! adapter); the source keeps whatever position it reached and no further
//! callbacks run. Cancellation propagates through any nesting of adapters.
//!
//! The fallible adapters end after the first `Err`. Collecting into a
//! `Result<C, E>` therefore stops at the first failure and no partial
//! container is produced.
//!
//! # Examples
//!
//! ```rust
//! use std::collections::HashMap;
//! use map_utils::sequence::SequenceExt;
//!
//! let ages = HashMap::from([("ann", 31), ("bob", 17), ("cy", 45)]);
//!
//! let adults: Result<Vec<&str>, String> = ages
//!     .iter()
//!     .slice_func(|name, age| Ok((*age >= 18).then_some(*name)))
//!     .collect();
//! let mut adults = adults.unwrap();
//! adults.sort_unstable();
//! assert_eq!(adults, ["ann", "cy"]);
//!
//! let total: i32 = ages.iter().weight_func(|_, age| *age).sum();
//! assert_eq!(total, 93);
//! ```

mod filter_map;
mod flatten;
mod remap;
mod weight;

pub use filter_map::SliceFunc;
pub use flatten::FlattenPairs;
pub use remap::RemapFunc;
pub use weight::WeightFunc;

/// Remaps every pair of a key/value sequence with a fallible transform.
///
/// See [`RemapFunc`] for the failure semantics.
///
/// # Examples
///
/// ```rust
/// use std::collections::HashMap;
/// use map_utils::sequence::remap_func_seq;
///
/// let scores = HashMap::from([(1, 10)]);
/// let inverted: Result<HashMap<i32, i32>, String> =
///     remap_func_seq(&scores, |key, value| Ok((*value, *key))).collect();
/// assert_eq!(inverted, Ok(HashMap::from([(10, 1)])));
/// ```
pub fn remap_func_seq<I, F, K1, V1, K2, V2, E>(source: I, function: F) -> RemapFunc<I::IntoIter, F>
where
    I: IntoIterator<Item = (K1, V1)>,
    F: FnMut(K1, V1) -> Result<(K2, V2), E>,
{
    RemapFunc::new(source.into_iter(), function)
}

/// Maps every pair of a key/value sequence to a weight.
///
/// # Examples
///
/// ```rust
/// use map_utils::sequence::weight_func_seq;
///
/// let lengths: Vec<usize> = weight_func_seq(vec![("a", "xyz")], |_, value: &str| value.len())
///     .collect();
/// assert_eq!(lengths, [3]);
/// ```
pub fn weight_func_seq<I, F, K, V, S>(source: I, function: F) -> WeightFunc<I::IntoIter, F>
where
    I: IntoIterator<Item = (K, V)>,
    F: FnMut(K, V) -> S,
{
    WeightFunc::new(source.into_iter(), function)
}

/// Filter-maps every pair of a key/value sequence with a fallible transform.
///
/// See [`SliceFunc`] for the skip and failure semantics.
pub fn slice_func_seq<I, F, K, V, R, E>(source: I, function: F) -> SliceFunc<I::IntoIter, F>
where
    I: IntoIterator<Item = (K, V)>,
    F: FnMut(K, V) -> Result<Option<R>, E>,
{
    SliceFunc::new(source.into_iter(), function)
}

/// Flattens a key/value sequence into alternating keys and values.
pub fn flatten_seq<I, K, V>(source: I) -> FlattenPairs<I::IntoIter, V>
where
    I: IntoIterator<Item = (K, V)>,
{
    FlattenPairs::new(source.into_iter())
}

/// Adapter methods for every iterator of key/value pairs.
///
/// Method-call forms of [`remap_func_seq`], [`weight_func_seq`],
/// [`slice_func_seq`] and [`flatten_seq`].
///
/// # Examples
///
/// ```rust
/// use map_utils::sequence::SequenceExt;
///
/// let flat: Vec<String> = vec![("x", 1)]
///     .into_iter()
///     .flatten_pairs()
///     .map(|element| element.to_string())
///     .collect();
/// assert_eq!(flat, ["x", "1"]);
/// ```
pub trait SequenceExt<K, V>: Iterator<Item = (K, V)> + Sized {
    /// See [`remap_func_seq`].
    fn remap_func<F, K2, V2, E>(self, function: F) -> RemapFunc<Self, F>
    where
        F: FnMut(K, V) -> Result<(K2, V2), E>,
    {
        RemapFunc::new(self, function)
    }

    /// See [`weight_func_seq`].
    fn weight_func<F, S>(self, function: F) -> WeightFunc<Self, F>
    where
        F: FnMut(K, V) -> S,
    {
        WeightFunc::new(self, function)
    }

    /// See [`slice_func_seq`].
    fn slice_func<F, R, E>(self, function: F) -> SliceFunc<Self, F>
    where
        F: FnMut(K, V) -> Result<Option<R>, E>,
    {
        SliceFunc::new(self, function)
    }

    /// See [`flatten_seq`].
    fn flatten_pairs(self) -> FlattenPairs<Self, V> {
        FlattenPairs::new(self)
    }
}

impl<I, K, V> SequenceExt<K, V> for I where I: Iterator<Item = (K, V)> {}

mod assertions {
    use std::convert::Infallible;
    use std::iter::FusedIterator;
    use std::vec::IntoIter;

    use super::{FlattenPairs, RemapFunc, SliceFunc, WeightFunc};

    type Pairs = IntoIter<(i32, i32)>;

    static_assertions::assert_impl_all!(
        RemapFunc<Pairs, fn(i32, i32) -> Result<(i32, i32), Infallible>>: FusedIterator, Send, Sync
    );
    static_assertions::assert_impl_all!(
        SliceFunc<Pairs, fn(i32, i32) -> Result<Option<i32>, Infallible>>: FusedIterator, Send, Sync
    );
    static_assertions::assert_impl_all!(
        WeightFunc<Pairs, fn(i32, i32) -> i64>: FusedIterator, ExactSizeIterator, DoubleEndedIterator
    );
    static_assertions::assert_impl_all!(FlattenPairs<Pairs, i32>: FusedIterator, ExactSizeIterator);
    static_assertions::assert_not_impl_any!(
        RemapFunc<Pairs, fn(i32, i32) -> Result<(i32, i32), Infallible>>: ExactSizeIterator
    );
}
