//! Eager operations on hash maps.
//!
//! Every operation borrows a `HashMap<K, V, S>` and returns a new value;
//! only [`delete`] modifies the map it is given. Maps produced by an
//! operation use the same hasher type `S` as the input, so the functions
//! work unchanged with [`FastHashMap`] or any other `BuildHasher`.
//!
//! - Filtering and tests: [`select`], [`count_func`], [`exists_func`],
//!   [`contains_key`], [`contains`], [`delete`]
//! - Ascending key order: [`sorted_keys`], [`first`], [`last`],
//!   [`first_or_default`], [`last_or_default`], [`at`], [`join`]
//! - Transformations: [`convert`], [`remap`], [`slice`], [`summarize`],
//!   [`fold_map`], [`flatten`]
//!
//! # Examples
//!
//! ```rust
//! use std::collections::HashMap;
//! use map_utils::maps::{at, join, select, summarize};
//!
//! let stock = HashMap::from([("apple", 3), ("pear", 0), ("plum", 5)]);
//!
//! let in_stock = select(&stock, |_, count| *count > 0);
//! assert_eq!(join(&in_stock, ", "), "apple=3, plum=5");
//! assert_eq!(summarize(&stock, |_, count| *count), 8);
//! assert_eq!(at(&stock, 1), Ok(&0));
//! ```

mod ordered;
mod query;
mod transform;

pub use ordered::{at, first, first_or_default, join, last, last_or_default, sorted_keys};
pub use query::{contains, contains_key, count_func, delete, exists_func, select};
pub use transform::{convert, flatten, fold_map, remap, slice, summarize};

/// A `HashMap` using the hasher selected by the `fxhash` feature.
///
/// `rustc-hash` is faster than the default SipHash but offers no protection
/// against collision attacks.
#[cfg(feature = "fxhash")]
pub type FastHashMap<K, V> = std::collections::HashMap<K, V, rustc_hash::FxBuildHasher>;

/// A `HashMap` using the hasher selected by the `ahash` feature.
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub type FastHashMap<K, V> = std::collections::HashMap<K, V, ahash::RandomState>;
