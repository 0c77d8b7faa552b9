//! Step search — binary search by decreasing power-of-two jumps.

use crate::error::SearchError;
use crate::sorted::SortedSlice;

/// Highest power of two representable in a `usize`.
const MAX_STEP: usize = 1 << (usize::BITS - 1);

/// Search an ascending slice for `target`.
///
/// Returns the index of an element equal to `target`, or `None` when no such
/// element exists. Runs in `O(log n)` comparisons.
///
/// When `target` occurs more than once the returned index is whichever
/// occurrence the walk lands on. Callers must not rely on it being the first
/// or the last.
///
/// If `seq` is not sorted ascending the result is meaningless, though any
/// `Some(i)` still satisfies `seq[i] == *target`.
pub fn step_search<T: PartialOrd>(seq: &[T], target: &T) -> Option<usize> {
    let len = seq.len();
    if len == 0 {
        return None;
    }

    let mut step = initial_step(len);
    let mut i = 0;
    while step > 0 {
        if i + step < len && seq[i + step] <= *target {
            i += step;
        }
        step >>= 1;
    }

    let found = (seq[i] == *target).then_some(i);
    tracing::trace!(len, cursor = i, ?found, "step search finished");
    found
}

/// Search the first `length` elements of `seq` for `target`.
///
/// `length` must equal `seq.len()`; a mismatch is reported as
/// [`SearchError::LengthMismatch`] rather than indexing past either bound.
/// An empty sequence yields `Ok(None)`.
pub fn search<T: PartialOrd>(
    seq: &[T],
    length: usize,
    target: &T,
) -> Result<Option<usize>, SearchError> {
    check_length(seq, length)?;
    Ok(step_search(seq, target))
}

/// Like [`search`], but also verifies that `seq` is sorted ascending.
///
/// The sortedness check is linear, so prefer building a [`SortedSlice`] once
/// when the same sequence is searched repeatedly.
pub fn search_checked<T: PartialOrd>(
    seq: &[T],
    length: usize,
    target: &T,
) -> Result<Option<usize>, SearchError> {
    check_length(seq, length)?;
    Ok(SortedSlice::new(seq)?.search(target))
}

/// Smallest power of two `>= len`, capped at [`MAX_STEP`] for lengths only
/// zero-sized elements can reach.
fn initial_step(len: usize) -> usize {
    len.checked_next_power_of_two().unwrap_or(MAX_STEP)
}

fn check_length<T>(seq: &[T], length: usize) -> Result<(), SearchError> {
    if length != seq.len() {
        tracing::debug!(declared = length, actual = seq.len(), "length mismatch");
        return Err(SearchError::LengthMismatch {
            declared: length,
            actual: seq.len(),
        });
    }
    Ok(())
}
