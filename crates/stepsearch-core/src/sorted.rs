//! `SortedSlice` — a borrowed slice whose ascending order has been checked.

use std::cmp::Ordering;

use crate::error::SearchError;
use crate::search::step_search;

/// A slice proven to be sorted ascending at construction time.
///
/// Construction is `O(n)`; every lookup after that is `O(log n)`.
#[derive(Debug)]
pub struct SortedSlice<'a, T> {
    inner: &'a [T],
}

// Not derived: the derives would bound `T: Clone` and `T: Copy`.
impl<T> Clone for SortedSlice<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for SortedSlice<'_, T> {}

impl<'a, T: PartialOrd> SortedSlice<'a, T> {
    /// Wrap `seq`, rejecting it if any adjacent pair is descending.
    ///
    /// Equal neighbours are accepted. A pair that does not compare at all
    /// (such as a NaN next to a number) counts as unsorted.
    pub fn new(seq: &'a [T]) -> Result<Self, SearchError> {
        if let Some(index) = first_unsorted(seq) {
            tracing::debug!(index, len = seq.len(), "rejecting unsorted sequence");
            return Err(SearchError::Unsorted { index });
        }
        Ok(Self { inner: seq })
    }

    /// Step-search for `target`. See [`step_search`].
    pub fn search(&self, target: &T) -> Option<usize> {
        step_search(self.inner, target)
    }

    pub fn contains(&self, target: &T) -> bool {
        self.search(target).is_some()
    }
}

impl<'a, T> SortedSlice<'a, T> {
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    pub fn as_slice(&self) -> &'a [T] {
        self.inner
    }
}

impl<'a, T> AsRef<[T]> for SortedSlice<'a, T> {
    fn as_ref(&self) -> &[T] {
        self.inner
    }
}

impl<'a, T: PartialOrd> TryFrom<&'a [T]> for SortedSlice<'a, T> {
    type Error = SearchError;

    fn try_from(seq: &'a [T]) -> Result<Self, Self::Error> {
        Self::new(seq)
    }
}

/// Index of the first element that is not `>=` its predecessor.
fn first_unsorted<T: PartialOrd>(seq: &[T]) -> Option<usize> {
    seq.windows(2)
        .position(|pair| {
            !matches!(
                pair[0].partial_cmp(&pair[1]),
                Some(Ordering::Less | Ordering::Equal)
            )
        })
        .map(|i| i + 1)
}
