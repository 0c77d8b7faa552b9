//! stepsearch-core — the step-search algorithm and its supporting types.
//!
//! Step search is a binary search that never computes a midpoint. It starts
//! from the smallest power of two covering the slice and walks a cursor
//! forward by halving jumps, taking each jump only while the element it lands
//! on is `<=` the target.
//!
//! ```text
//! len = 9, target = 11
//! [1, 3, 5, 7, 9, 11, 13, 15, 17]
//!  i=0 ─16✗─► 8✗ ─► 4✓ (i=4) ─► 2✗ ─► 1✓ (i=5) ─► found
//! ```
//!
//! The pure search lives in [`search`]; [`sorted::SortedSlice`] checks the
//! ascending precondition once so later lookups can rely on it.

pub mod config;
pub mod error;
pub mod search;
pub mod sorted;

pub use error::SearchError;
pub use search::{search, search_checked, step_search};
pub use sorted::SortedSlice;
