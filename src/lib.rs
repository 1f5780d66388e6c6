//! # map-utils
//!
//! Functional utilities for hash maps: filtering, counting, existence
//! checks, key/value transformation, aggregation, ordered positional
//! access, and conversion to flat sequences or strings.
//!
//! ## Overview
//!
//! The crate has two layers:
//!
//! - **Sequence adapters** ([`sequence`]): lazy, pull-based iterators over
//!   key/value pairs that apply a per-entry callback on demand and end at
//!   the first failure.
//! - **Map operations** ([`maps`]): eager functions that either scan a map
//!   directly or drain one of the adapters into a new map, vector or scalar.
//!
//! Supporting modules:
//!
//! - **Type classes** ([`typeclass`]): `Semigroup`, `Monoid` and the `Sum`,
//!   `Max`, `Min` wrappers used for summaries
//! - **Control** ([`control`]): `Either`, the element type of flattened
//!   sequences
//! - **Errors** ([`MapError`]): out-of-range positional access
//!
//! ## Feature Flags
//!
//! - `typeclass`: Semigroup/Monoid and the numeric wrappers
//! - `control`: `Either`
//! - `sequence`: the lazy adapters (enables `control`)
//! - `maps`: the eager operations (enables `sequence` and `typeclass`)
//! - `serde`: `Serialize`/`Deserialize` for `Either`, the wrappers and `MapError`
//! - `fxhash` / `ahash`: the [`maps::FastHashMap`] alias
//! - `full`: everything except the hasher selection
//!
//! ## Example
//!
//! ```rust
//! use std::collections::HashMap;
//! use map_utils::prelude::*;
//!
//! let map = HashMap::from([(1, 10), (2, 20)]);
//! let renamed = remap(&map, |key, value| {
//!     Ok::<_, String>((format!("k{key}"), format!("v{value}")))
//! })
//! .unwrap();
//! assert_eq!(join(&renamed, ","), "k1=v10,k2=v20");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
// Note: Disabling redundant_closure_for_method_calls due to clippy 0.1.92 panic bug
#![allow(clippy::redundant_closure_for_method_calls)]

/// Prelude module for convenient imports.
///
/// Re-exports the map operations, the adapter extension trait and the
/// supporting types.
///
/// # Usage
///
/// ```rust
/// use map_utils::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::MapError;

    #[cfg(feature = "typeclass")]
    pub use crate::typeclass::*;

    #[cfg(feature = "control")]
    pub use crate::control::*;

    #[cfg(feature = "sequence")]
    pub use crate::sequence::*;

    #[cfg(feature = "maps")]
    pub use crate::maps::*;
}

mod error;

pub use error::MapError;

#[cfg(feature = "typeclass")]
pub mod typeclass;

#[cfg(feature = "control")]
pub mod control;

#[cfg(feature = "sequence")]
pub mod sequence;

#[cfg(feature = "maps")]
pub mod maps;
