//! Fixed sequences and proptest strategies used across harnesses.

use proptest::prelude::*;

/// The demo sequence: the first nine odd numbers.
pub const ODDS: [i64; 9] = [1, 3, 5, 7, 9, 11, 13, 15, 17];

/// Even numbers absent from [`ODDS`], including both out-of-range sides.
pub const ODDS_MISSES: &[i64] = &[-2, 0, 2, 4, 6, 8, 10, 12, 14, 16, 18, 1_000];

/// Sizes that straddle powers of two, where the initial step changes.
pub const BOUNDARY_LENGTHS: &[usize] = &[1, 2, 3, 4, 5, 7, 8, 9, 15, 16, 17, 31, 32, 33, 64, 65];

/// `0, 2, 4, …` of length `len`: every element present once, every odd
/// number absent.
pub fn evens(len: usize) -> Vec<i64> {
    (0..len as i64).map(|i| i * 2).collect()
}

/// Strictly ascending vectors (unique elements) of up to `max_len` items.
pub fn strictly_ascending(max_len: usize) -> impl Strategy<Value = Vec<i64>> {
    prop::collection::btree_set(-10_000i64..10_000, 0..max_len)
        .prop_map(|set| set.into_iter().collect())
}

/// Ascending vectors that may contain duplicates.
pub fn ascending_with_duplicates(max_len: usize) -> impl Strategy<Value = Vec<i64>> {
    prop::collection::vec(-50i64..50, 0..max_len).prop_map(|mut v| {
        v.sort_unstable();
        v
    })
}
