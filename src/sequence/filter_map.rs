//! Filter-map adapter: optional, fallible results per key/value pair.

use std::fmt;
use std::iter::FusedIterator;

/// A lazy value sequence keeping only the present results of a fallible
/// transform.
///
/// Created by [`slice_func_seq`](super::slice_func_seq) or
/// [`SequenceExt::slice_func`](super::SequenceExt::slice_func).
///
/// `Ok(Some(result))` is yielded as `Ok(result)`, `Ok(None)` is skipped
/// and the next pair is pulled. The first `Err(error)` is yielded and ends
/// the sequence, exactly like [`RemapFunc`](super::RemapFunc).
///
/// # Examples
///
/// ```rust
/// use map_utils::sequence::slice_func_seq;
///
/// let pairs = vec![("a", 1), ("b", 2), ("c", 3), ("d", 4)];
/// let even: Result<Vec<i32>, ()> =
///     slice_func_seq(pairs, |_, value| Ok((value % 2 == 0).then_some(value * 100)))
///         .collect();
/// assert_eq!(even, Ok(vec![200, 400]));
/// ```
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct SliceFunc<I, F> {
    source: I,
    function: F,
    failed: bool,
}

impl<I, F> SliceFunc<I, F> {
    pub(super) const fn new(source: I, function: F) -> Self {
        Self {
            source,
            function,
            failed: false,
        }
    }

    /// Returns `true` once the transform has failed and the sequence has ended.
    #[inline]
    pub const fn has_failed(&self) -> bool {
        self.failed
    }
}

impl<I, F, K, V, R, E> Iterator for SliceFunc<I, F>
where
    I: Iterator<Item = (K, V)>,
    F: FnMut(K, V) -> Result<Option<R>, E>,
{
    type Item = Result<R, E>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        for (key, value) in self.source.by_ref() {
            match (self.function)(key, value) {
                Ok(Some(result)) => return Some(Ok(result)),
                Ok(None) => {}
                Err(error) => {
                    self.failed = true;
                    return Some(Err(error));
                }
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            (0, Some(0))
        } else {
            (0, self.source.size_hint().1)
        }
    }
}

impl<I, F, K, V, R, E> FusedIterator for SliceFunc<I, F>
where
    I: FusedIterator<Item = (K, V)>,
    F: FnMut(K, V) -> Result<Option<R>, E>,
{
}

impl<I: fmt::Debug, F> fmt::Debug for SliceFunc<I, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("SliceFunc")
            .field("source", &self.source)
            .field("failed", &self.failed)
            .finish_non_exhaustive()
    }
}
