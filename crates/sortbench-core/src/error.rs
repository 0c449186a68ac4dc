//! Error types for SortBench

use thiserror::Error;

/// Main error type for SortBench core operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SortBenchError {
    /// A sort metric was built from a negative count.
    ///
    /// Algorithms count with unsigned integers, so seeing this means the
    /// counts came from somewhere that lost track of them.
    #[error("Sort metrics cannot be negative (comparisons={comparisons}, swaps={swaps})")]
    NegativeMetric { comparisons: i64, swaps: i64 },

    /// An algorithm name did not match any known sorting algorithm.
    #[error("Unknown sorting algorithm: {0}")]
    UnknownAlgorithm(String),
}

/// Result type alias for SortBench core operations
pub type Result<T> = std::result::Result<T, SortBenchError>;
