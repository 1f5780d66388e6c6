//! Weight adapter: one scalar per key/value pair.

use std::fmt;
use std::iter::FusedIterator;

/// A lazy value sequence of per-entry weights.
///
/// Created by [`weight_func_seq`](super::weight_func_seq) or
/// [`SequenceExt::weight_func`](super::SequenceExt::weight_func).
/// The weight function cannot fail, so the sequence has exactly as many
/// elements as its source.
///
/// # Examples
///
/// ```rust
/// use map_utils::sequence::SequenceExt;
///
/// let weights: Vec<usize> = vec![("ab", 1), ("cde", 2)]
///     .into_iter()
///     .weight_func(|key, value| key.len() * value)
///     .collect();
/// assert_eq!(weights, [2, 6]);
/// ```
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct WeightFunc<I, F> {
    source: I,
    function: F,
}

impl<I, F> WeightFunc<I, F> {
    pub(super) const fn new(source: I, function: F) -> Self {
        Self { source, function }
    }
}

impl<I, F, K, V, S> Iterator for WeightFunc<I, F>
where
    I: Iterator<Item = (K, V)>,
    F: FnMut(K, V) -> S,
{
    type Item = S;

    #[inline]
    fn next(&mut self) -> Option<S> {
        let (key, value) = self.source.next()?;
        Some((self.function)(key, value))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.source.size_hint()
    }
}

impl<I, F, K, V, S> DoubleEndedIterator for WeightFunc<I, F>
where
    I: DoubleEndedIterator<Item = (K, V)>,
    F: FnMut(K, V) -> S,
{
    #[inline]
    fn next_back(&mut self) -> Option<S> {
        let (key, value) = self.source.next_back()?;
        Some((self.function)(key, value))
    }
}

impl<I, F, K, V, S> ExactSizeIterator for WeightFunc<I, F>
where
    I: ExactSizeIterator<Item = (K, V)>,
    F: FnMut(K, V) -> S,
{
    #[inline]
    fn len(&self) -> usize {
        self.source.len()
    }
}

impl<I, F, K, V, S> FusedIterator for WeightFunc<I, F>
where
    I: FusedIterator<Item = (K, V)>,
    F: FnMut(K, V) -> S,
{
}

impl<I: fmt::Debug, F> fmt::Debug for WeightFunc<I, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("WeightFunc")
            .field("source", &self.source)
            .finish_non_exhaustive()
    }
}
