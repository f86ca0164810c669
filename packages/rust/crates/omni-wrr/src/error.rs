//! Error types for selector construction.
//!
//! Follows ODF-REP: Library crates use `thiserror` for explicit error enums.

use thiserror::Error;

/// Errors raised while validating a probability distribution.
///
/// Once a [`crate::WeightedSelector`] exists, no operation on it can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectorError {
    /// An entry lies outside `[0, 100]`
    #[error("value {value} at index {index} out of range [0;100]")]
    OutOfRange {
        /// Position of the first offending entry
        index: usize,
        /// The offending value
        value: i32,
    },
    /// Entries do not add up to 100
    #[error("sum of pdf elements must be equal to 100 percent, got {sum}")]
    SumMismatch {
        /// Actual sum of all entries
        sum: i64,
    },
}
