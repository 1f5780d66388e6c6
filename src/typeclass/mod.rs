//! Algebraic structures used to summarize map entries.
//!
//! - [`Semigroup`]: types with an associative binary operation (`combine`)
//! - [`Monoid`]: semigroups with an identity element (`empty`)
//! - [`Sum`], [`Max`], [`Min`]: wrappers choosing the operation for a weight
//! - [`Bounded`]: types with minimum and maximum values
//!
//! [`maps::summarize`](crate::maps::summarize) folds with [`Sum`];
//! [`maps::fold_map`](crate::maps::fold_map) accepts any [`Monoid`].
//!
//! # Examples
//!
//! ```rust
//! use map_utils::typeclass::{Monoid, Semigroup, Sum};
//!
//! let weights = vec![Sum::new(1), Sum::new(2), Sum::new(3)];
//! assert_eq!(Sum::combine_all(weights), Sum::new(6));
//! assert_eq!(Sum::new(1).combine(Sum::empty()), Sum::new(1));
//! ```

mod monoid;
mod semigroup;
mod wrappers;

pub use monoid::Monoid;
pub use semigroup::Semigroup;
pub use wrappers::{Bounded, Max, Min, Sum};
