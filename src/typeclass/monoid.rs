//! Monoid type class - semigroups with an identity element.
//!
//! The identity element is what a summary over an empty map evaluates to:
//! `Sum(0)` for totals, the type's minimum for `Max`, the empty string for
//! concatenation.
//!
//! # Laws
//!
//! In addition to associativity, for all `a`:
//!
//! ```text
//! T::empty().combine(a) == a
//! a.combine(T::empty()) == a
//! ```
//!
//! # Examples
//!
//! ```rust
//! use map_utils::typeclass::{Monoid, Sum};
//!
//! assert_eq!(Sum::<i64>::empty(), Sum(0));
//! assert_eq!(Sum::combine_all(vec![Sum(1), Sum(2), Sum(3)]), Sum(6));
//! assert_eq!(Sum::<i64>::combine_all(Vec::new()), Sum(0));
//! ```

use std::ops::Add;

use super::semigroup::Semigroup;
use super::wrappers::{Bounded, Max, Min, Sum};

/// A type class for semigroups with an identity element.
pub trait Monoid: Semigroup {
    /// Returns the identity element for this monoid.
    fn empty() -> Self;

    /// Combines all elements in an iterator, starting from the identity element.
    ///
    /// Unlike [`Semigroup::reduce_all`], this always returns a value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use map_utils::typeclass::{Monoid, Max};
    ///
    /// assert_eq!(Max::combine_all(vec![Max(3u8), Max(9)]), Max(9));
    /// assert_eq!(Max::<u8>::combine_all(Vec::new()), Max(0));
    /// ```
    fn combine_all<I>(iterator: I) -> Self
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .fold(Self::empty(), |accumulator, element| {
                accumulator.combine(element)
            })
    }
}

impl Monoid for String {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T> Monoid for Vec<T> {
    fn empty() -> Self {
        Self::new()
    }
}

impl<T: Semigroup> Monoid for Option<T> {
    fn empty() -> Self {
        None
    }
}

/// `Default` supplies the additive identity (`0` for the numeric types).
impl<A: Add<Output = A> + Default> Monoid for Sum<A> {
    fn empty() -> Self {
        Self(A::default())
    }
}

impl<A: PartialOrd + Bounded> Monoid for Max<A> {
    fn empty() -> Self {
        Self(A::MIN_VALUE)
    }
}

impl<A: PartialOrd + Bounded> Monoid for Min<A> {
    fn empty() -> Self {
        Self(A::MAX_VALUE)
    }
}
