//! Benchmark error types.

use std::io;

use thiserror::Error;

/// Errors raised while configuring benchmarks or writing their reports.
#[derive(Debug, Error)]
pub enum BenchmarkError {
    /// The trial plan leaves no measured trial to take a median from.
    #[error("Invalid trial plan: {trial_count} trials with {warmup_count} warm-up trials leaves no measured trial")]
    InvalidTrialPlan {
        trial_count: usize,
        warmup_count: usize,
    },

    /// A report could not be written.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for benchmark operations.
pub type Result<T> = std::result::Result<T, BenchmarkError>;
