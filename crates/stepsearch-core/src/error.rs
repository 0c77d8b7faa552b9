//! Precondition errors for step search.
//!
//! Not-found is never an error: it is `Ok(None)`. These variants cover inputs
//! the algorithm cannot give a meaningful answer for.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SearchError {
    /// The declared length disagrees with the slice actually passed.
    #[error("declared length {declared} does not match sequence length {actual}")]
    LengthMismatch { declared: usize, actual: usize },

    /// `seq[index]` is less than (or incomparable with) `seq[index - 1]`.
    #[error("sequence is not sorted ascending at index {index}")]
    Unsorted { index: usize },
}
