//! Flatten adapter: key, value, key, value, ...

use std::fmt;
use std::iter::FusedIterator;

use crate::control::Either;

/// A lazy sequence yielding each source pair as two elements.
///
/// Created by [`flatten_seq`](super::flatten_seq) or
/// [`SequenceExt::flatten_pairs`](super::SequenceExt::flatten_pairs).
/// The key (`Either::Left`) is immediately followed by its value
/// (`Either::Right`). A source pair is only pulled when its key is
/// requested; the value is held until the following call.
///
/// # Examples
///
/// ```rust
/// use map_utils::control::Either;
/// use map_utils::sequence::flatten_seq;
///
/// let flat: Vec<Either<char, u8>> = flatten_seq(vec![('a', 1), ('b', 2)]).collect();
/// assert_eq!(
///     flat,
///     [Either::Left('a'), Either::Right(1), Either::Left('b'), Either::Right(2)]
/// );
/// ```
#[must_use = "iterators are lazy and do nothing unless consumed"]
#[derive(Clone)]
pub struct FlattenPairs<I, V> {
    source: I,
    pending: Option<V>,
}

impl<I, V> FlattenPairs<I, V> {
    pub(super) const fn new(source: I) -> Self {
        Self {
            source,
            pending: None,
        }
    }

    const fn pending_count(&self) -> usize {
        if self.pending.is_some() { 1 } else { 0 }
    }
}

impl<I, K, V> Iterator for FlattenPairs<I, V>
where
    I: Iterator<Item = (K, V)>,
{
    type Item = Either<K, V>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(value) = self.pending.take() {
            return Some(Either::Right(value));
        }

        let (key, value) = self.source.next()?;
        self.pending = Some(value);
        Some(Either::Left(key))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = self.pending_count();
        let (lower, upper) = self.source.size_hint();
        let lower = lower.saturating_mul(2).saturating_add(pending);
        let upper = upper
            .and_then(|upper| upper.checked_mul(2))
            .and_then(|upper| upper.checked_add(pending));
        (lower, upper)
    }
}

impl<I, K, V> ExactSizeIterator for FlattenPairs<I, V> where I: ExactSizeIterator<Item = (K, V)> {}

impl<I, K, V> FusedIterator for FlattenPairs<I, V> where I: FusedIterator<Item = (K, V)> {}

impl<I: fmt::Debug, V: fmt::Debug> fmt::Debug for FlattenPairs<I, V> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("FlattenPairs")
            .field("source", &self.source)
            .field("pending", &self.pending)
            .finish()
    }
}
