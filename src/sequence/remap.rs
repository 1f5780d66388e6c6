//! Key/value remapping adapter.

use std::fmt;
use std::iter::FusedIterator;

/// A lazy key/value sequence whose pairs are produced by a fallible transform.
///
/// Created by [`remap_func_seq`](super::remap_func_seq) or
/// [`SequenceExt::remap_func`](super::SequenceExt::remap_func).
///
/// Every call to `next` pulls one pair from the source and passes it to the
/// transform. A successful result is yielded as `Ok((key, value))`. The first
/// failure is yielded as `Err(error)` and ends the sequence: the source is
/// not pulled again and the transform is not invoked again.
///
/// # Examples
///
/// ```rust
/// use map_utils::sequence::remap_func_seq;
///
/// let pairs = vec![(1, "one"), (2, "two")];
/// let remapped: Result<Vec<(String, usize)>, String> =
///     remap_func_seq(pairs, |key, value: &str| Ok((format!("k{key}"), value.len())))
///         .collect();
/// assert_eq!(
///     remapped,
///     Ok(vec![("k1".to_string(), 3), ("k2".to_string(), 3)])
/// );
/// ```
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct RemapFunc<I, F> {
    source: I,
    function: F,
    failed: bool,
}

impl<I, F> RemapFunc<I, F> {
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

impl<I, F, K1, V1, K2, V2, E> Iterator for RemapFunc<I, F>
where
    I: Iterator<Item = (K1, V1)>,
    F: FnMut(K1, V1) -> Result<(K2, V2), E>,
{
    type Item = Result<(K2, V2), E>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }

        let (key, value) = self.source.next()?;
        let transformed = (self.function)(key, value);
        self.failed = transformed.is_err();
        Some(transformed)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.failed {
            (0, Some(0))
        } else {
            // A failure may end the sequence at any element.
            (0, self.source.size_hint().1)
        }
    }
}

impl<I, F, K1, V1, K2, V2, E> FusedIterator for RemapFunc<I, F>
where
    I: FusedIterator<Item = (K1, V1)>,
    F: FnMut(K1, V1) -> Result<(K2, V2), E>,
{
}

impl<I: fmt::Debug, F> fmt::Debug for RemapFunc<I, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("RemapFunc")
            .field("source", &self.source)
            .field("failed", &self.failed)
            .finish_non_exhaustive()
    }
}
