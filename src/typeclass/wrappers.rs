//! Newtype wrappers selecting how per-entry weights are combined.
//!
//! The same weight type can be summarized in more than one way. Wrapping
//! it picks the `Semigroup`/`Monoid` instance:
//!
//! - [`Sum`]: addition, identity `0`
//! - [`Max`]: maximum, identity is the type's minimum ([`Bounded`])
//! - [`Min`]: minimum, identity is the type's maximum ([`Bounded`])

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// =============================================================================
// Sum Wrapper
// =============================================================================

/// The additive monoid: `Sum(a).combine(Sum(b)) == Sum(a + b)`.
///
/// # Examples
///
/// ```rust
/// use map_utils::typeclass::{Semigroup, Sum};
///
/// assert_eq!(Sum::new(3).combine(Sum::new(5)).into_inner(), 8);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Sum<A>(pub A);

// =============================================================================
// Max Wrapper
// =============================================================================

/// The maximum monoid: keeps the larger of two values.
///
/// # Examples
///
/// ```rust
/// use map_utils::typeclass::{Monoid, Max};
///
/// assert_eq!(Max::combine_all(vec![Max(3), Max(11), Max(5)]).into_inner(), 11);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Max<A>(pub A);

// =============================================================================
// Min Wrapper
// =============================================================================

/// The minimum monoid: keeps the smaller of two values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Min<A>(pub A);

macro_rules! impl_wrapper_accessors {
    ($($wrapper:ident),* $(,)?) => {
        $(
            impl<A> $wrapper<A> {
                #[doc = concat!("Creates a new `", stringify!($wrapper), "` wrapping the given value.")]
                #[inline]
                pub const fn new(value: A) -> Self {
                    Self(value)
                }

                /// Consumes the wrapper and returns the inner value.
                #[inline]
                pub fn into_inner(self) -> A {
                    self.0
                }

                /// Returns a reference to the inner value.
                #[inline]
                pub const fn as_inner(&self) -> &A {
                    &self.0
                }
            }

            impl<A> From<A> for $wrapper<A> {
                fn from(value: A) -> Self {
                    Self::new(value)
                }
            }
        )*
    };
}

impl_wrapper_accessors!(Sum, Max, Min);

// =============================================================================
// Bounded Trait
// =============================================================================

/// Types with a smallest and a largest value.
///
/// Provides the identity elements of [`Max`] and [`Min`].
///
/// ```rust
/// use map_utils::typeclass::Bounded;
///
/// #[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
/// struct Priority(u8);
///
/// impl Bounded for Priority {
///     const MIN_VALUE: Self = Priority(0);
///     const MAX_VALUE: Self = Priority(9);
/// }
///
/// assert_eq!(Priority::MAX_VALUE, Priority(9));
/// ```
pub trait Bounded {
    /// The minimum value of this type.
    const MIN_VALUE: Self;

    /// The maximum value of this type.
    const MAX_VALUE: Self;
}

macro_rules! impl_bounded_for_integers {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Bounded for $integer {
                const MIN_VALUE: Self = Self::MIN;
                const MAX_VALUE: Self = Self::MAX;
            }
        )*
    };
}

impl_bounded_for_integers!(
    i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize
);

impl Bounded for f32 {
    const MIN_VALUE: Self = Self::NEG_INFINITY;
    const MAX_VALUE: Self = Self::INFINITY;
}

impl Bounded for f64 {
    const MIN_VALUE: Self = Self::NEG_INFINITY;
    const MAX_VALUE: Self = Self::INFINITY;
}

impl Bounded for char {
    const MIN_VALUE: Self = '\0';
    const MAX_VALUE: Self = Self::MAX;
}
