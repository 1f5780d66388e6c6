//! Error types for positional map access.
//!
//! Transform failures are not represented here: fallible callbacks passed
//! to [`remap`](crate::maps::remap), [`convert`](crate::maps::convert) and
//! [`slice`](crate::maps::slice) choose their own error type, which is
//! returned unchanged.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An error returned when an ordered position does not exist in a map.
///
/// Both variants are out-of-range conditions; [`MapError::is_out_of_range`]
/// tests for either.
///
/// # Examples
///
/// ```rust
/// use map_utils::MapError;
///
/// let error = MapError::IndexOutOfBounds { index: 5, length: 3 };
/// assert_eq!(
///     format!("{error}"),
///     "index 5 out of bounds for map of length 3"
/// );
/// assert!(error.is_out_of_range());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MapError {
    /// The map has no entries, so no position exists.
    Empty,
    /// The requested position is not smaller than the number of entries.
    IndexOutOfBounds {
        /// The requested position.
        index: usize,
        /// The number of entries in the map.
        length: usize,
    },
}

impl MapError {
    /// Returns `true` for every variant; all map errors report a missing position.
    ///
    /// Lets callers match on the condition without depending on the variant set.
    #[inline]
    pub const fn is_out_of_range(&self) -> bool {
        matches!(self, Self::Empty | Self::IndexOutOfBounds { .. })
    }
}

impl std::fmt::Display for MapError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(formatter, "map is empty"),
            Self::IndexOutOfBounds { index, length } => write!(
                formatter,
                "index {index} out of bounds for map of length {length}"
            ),
        }
    }
}

impl std::error::Error for MapError {}
