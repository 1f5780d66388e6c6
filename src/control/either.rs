//! Either type - one element of a flattened key/value sequence.
//!
//! Flattening a map turns every entry into two consecutive elements: the
//! key, then the value. Keys and values usually have different types, so
//! each element is an `Either<K, V>`: `Left` for a key, `Right` for a value.
//! When both types coincide, [`Either::into_inner`] recovers a plain
//! sequence.
//!
//! # Examples
//!
//! ```rust
//! use map_utils::control::Either;
//!
//! let key: Either<&str, i32> = Either::Left("a");
//! let value: Either<&str, i32> = Either::Right(1);
//!
//! let rendered: Vec<String> = [key, value]
//!     .into_iter()
//!     .map(|element| element.fold(|k| format!("key {k}"), |v| format!("value {v}")))
//!     .collect();
//! assert_eq!(rendered, ["key a", "value 1"]);
//! ```

use std::fmt;
use std::hash::Hash;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A value that is either `Left(L)` or `Right(R)`.
///
/// Within this crate `Left` carries a map key and `Right` a map value.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Either<L, R> {
    /// The left variant, holding a key in a flattened sequence.
    Left(L),
    /// The right variant, holding a value in a flattened sequence.
    Right(R),
}

impl<L, R> Either<L, R> {
    /// Returns `true` if this is a `Left` value.
    #[inline]
    pub const fn is_left(&self) -> bool {
        matches!(self, Self::Left(_))
    }

    /// Returns `true` if this is a `Right` value.
    #[inline]
    pub const fn is_right(&self) -> bool {
        matches!(self, Self::Right(_))
    }

    /// Converts into an `Option` of the left value, discarding a right value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use map_utils::control::Either;
    ///
    /// assert_eq!(Either::<i32, &str>::Left(3).left(), Some(3));
    /// assert_eq!(Either::<i32, &str>::Right("x").left(), None);
    /// ```
    #[inline]
    pub fn left(self) -> Option<L> {
        match self {
            Self::Left(value) => Some(value),
            Self::Right(_) => None,
        }
    }

    /// Converts into an `Option` of the right value, discarding a left value.
    #[inline]
    pub fn right(self) -> Option<R> {
        match self {
            Self::Left(_) => None,
            Self::Right(value) => Some(value),
        }
    }

    /// Borrows the contents as `Either<&L, &R>`.
    #[inline]
    pub const fn as_ref(&self) -> Either<&L, &R> {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies a function to a left value, leaving a right value untouched.
    #[inline]
    pub fn map_left<T, F>(self, function: F) -> Either<T, R>
    where
        F: FnOnce(L) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(function(value)),
            Self::Right(value) => Either::Right(value),
        }
    }

    /// Applies a function to a right value, leaving a left value untouched.
    #[inline]
    pub fn map_right<T, F>(self, function: F) -> Either<L, T>
    where
        F: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => Either::Left(value),
            Self::Right(value) => Either::Right(function(value)),
        }
    }

    /// Collapses both variants into one type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use map_utils::control::Either;
    ///
    /// let element: Either<&str, i32> = Either::Right(7);
    /// assert_eq!(element.fold(str::len, |v| v as usize), 7);
    /// ```
    #[inline]
    pub fn fold<T, F, G>(self, left_function: F, right_function: G) -> T
    where
        F: FnOnce(L) -> T,
        G: FnOnce(R) -> T,
    {
        match self {
            Self::Left(value) => left_function(value),
            Self::Right(value) => right_function(value),
        }
    }
}

impl<L: Clone, R: Clone> Either<&L, &R> {
    /// Clones the borrowed contents, like [`Option::cloned`].
    #[inline]
    pub fn cloned(self) -> Either<L, R> {
        match self {
            Self::Left(value) => Either::Left(value.clone()),
            Self::Right(value) => Either::Right(value.clone()),
        }
    }
}

impl<T> Either<T, T> {
    /// Extracts the value when both sides have the same type.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use map_utils::control::Either;
    ///
    /// let flat: Vec<i32> = vec![Either::Left(1), Either::Right(10)]
    ///     .into_iter()
    ///     .map(Either::into_inner)
    ///     .collect();
    /// assert_eq!(flat, [1, 10]);
    /// ```
    #[inline]
    pub fn into_inner(self) -> T {
        match self {
            Self::Left(value) | Self::Right(value) => value,
        }
    }
}

impl<L: fmt::Debug, R: fmt::Debug> fmt::Debug for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => formatter.debug_tuple("Left").field(value).finish(),
            Self::Right(value) => formatter.debug_tuple("Right").field(value).finish(),
        }
    }
}

impl<L: fmt::Display, R: fmt::Display> fmt::Display for Either<L, R> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left(value) => write!(formatter, "{value}"),
            Self::Right(value) => write!(formatter, "{value}"),
        }
    }
}
