//! Search-specific assertion macros for stepsearch harnesses.
//!
//! These wrap `pretty_assertions` and name the sequence and target in the
//! failure message, so a broken walk is easy to reproduce.

/// Assert that `step_search` finds `$target` at exactly `$index`.
///
/// ```rust
/// assert_found_at!(ODDS, 11, 5);
/// ```
#[macro_export]
macro_rules! assert_found_at {
    ($seq:expr, $target:expr, $index:expr) => {{
        let seq = &$seq[..];
        let target = $target;
        let actual = stepsearch::step_search(seq, &target);
        pretty_assertions::assert_eq!(
            actual,
            Some($index),
            "step_search({:?}, {:?}) returned the wrong index",
            seq,
            target
        );
    }};
}

/// Assert that `step_search` reports `$target` as absent.
#[macro_export]
macro_rules! assert_not_found {
    ($seq:expr, $target:expr) => {{
        let seq = &$seq[..];
        let target = $target;
        if let Some(i) = stepsearch::step_search(seq, &target) {
            panic!(
                "assert_not_found! failed: {:?} reported at index {} in {:?}",
                target, i, seq
            );
        }
    }};
}

/// Assert that an index returned by a search points at an element equal to
/// the target. Passes trivially for `None`.
pub fn assert_index_holds<T: PartialEq + std::fmt::Debug>(seq: &[T], target: &T, index: Option<usize>) {
    if let Some(i) = index {
        assert!(i < seq.len(), "index {i} out of bounds for length {}", seq.len());
        assert!(
            seq[i] == *target,
            "index {i} holds {:?}, expected {:?}",
            seq[i],
            target
        );
    }
}
