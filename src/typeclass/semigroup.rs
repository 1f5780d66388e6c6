//! Semigroup type class - types with an associative binary operation.
//!
//! Summaries over map entries are built by combining one value per entry.
//! As long as the combining operation is associative, the result does not
//! depend on how the entries are grouped, which is what makes a summary
//! well-defined even though a `HashMap` has no intrinsic order (for
//! commutative operations such as `Sum`, `Max` and `Min`).
//!
//! # Laws
//!
//! For all `a`, `b`, `c` of type `T`:
//!
//! ```text
//! (a.combine(b)).combine(c) == a.combine(b.combine(c))
//! ```
//!
//! # Examples
//!
//! ```rust
//! use map_utils::typeclass::{Semigroup, Sum, Max};
//!
//! assert_eq!(Sum::new(2).combine(Sum::new(3)), Sum::new(5));
//! assert_eq!(Max::new(2).combine(Max::new(3)), Max::new(3));
//! assert_eq!(String::from("a=1").combine(String::from(",b=2")), "a=1,b=2");
//! ```

use std::ops::Add;

use super::wrappers::{Max, Min, Sum};

/// A type class for types with an associative binary operation.
///
/// # Examples
///
/// ```rust
/// use map_utils::typeclass::Semigroup;
///
/// let weights = vec![1, 2];
/// assert_eq!(weights.combine(vec![3]), vec![1, 2, 3]);
/// ```
pub trait Semigroup {
    /// Combines two values into one.
    ///
    /// This operation must be associative.
    #[must_use]
    fn combine(self, other: Self) -> Self;

    /// Reduces all elements of an iterator with [`Semigroup::combine`].
    ///
    /// Returns `None` if the iterator is empty. For a version that falls
    /// back to an identity element, see
    /// [`Monoid::combine_all`](super::Monoid::combine_all).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use map_utils::typeclass::{Semigroup, Min};
    ///
    /// assert_eq!(Min::reduce_all(vec![Min(4), Min(1), Min(7)]), Some(Min(1)));
    /// assert_eq!(Min::<i32>::reduce_all(Vec::new()), None);
    /// ```
    fn reduce_all<I>(iterator: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
        Self: Sized,
    {
        iterator
            .into_iter()
            .reduce(|accumulator, element| accumulator.combine(element))
    }
}

impl Semigroup for String {
    fn combine(mut self, other: Self) -> Self {
        self.push_str(&other);
        self
    }
}

impl<T> Semigroup for Vec<T> {
    fn combine(mut self, mut other: Self) -> Self {
        self.append(&mut other);
        self
    }
}

/// `Some` values are combined, `None` is skipped.
impl<T: Semigroup> Semigroup for Option<T> {
    fn combine(self, other: Self) -> Self {
        match (self, other) {
            (Some(left), Some(right)) => Some(left.combine(right)),
            (Some(value), None) | (None, Some(value)) => Some(value),
            (None, None) => None,
        }
    }
}

impl<A: Add<Output = A>> Semigroup for Sum<A> {
    fn combine(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

/// Keeps the larger value. On ties (or incomparable values) the left one wins.
impl<A: PartialOrd> Semigroup for Max<A> {
    fn combine(self, other: Self) -> Self {
        if other.0 > self.0 { other } else { self }
    }
}

/// Keeps the smaller value. On ties (or incomparable values) the left one wins.
impl<A: PartialOrd> Semigroup for Min<A> {
    fn combine(self, other: Self) -> Self {
        if other.0 < self.0 { other } else { self }
    }
}
