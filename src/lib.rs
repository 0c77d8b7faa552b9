//! stepsearch — binary search by halving power-of-two jumps.
//!
//! The algorithm and its precondition types live in [`stepsearch_core`] and
//! are re-exported here. This crate adds the [`demo`] used by the
//! `stepsearch` binary.
//!
//! ```
//! use stepsearch::search;
//!
//! let odds = [1, 3, 5, 7, 9, 11, 13, 15, 17];
//! assert_eq!(search(&odds, odds.len(), &11), Ok(Some(5)));
//! assert_eq!(search(&odds, odds.len(), &4), Ok(None));
//! ```

pub mod demo;

pub use stepsearch_core::{config, search, search_checked, step_search, SearchError, SortedSlice};
