//! Sort metrics (zero-erasure).
//!
//! Stack-allocated operation counts reported by every instrumented sort.

use crate::error::{Result, SortBenchError};

/// Comparisons and swaps performed by one sort.
///
/// Counts are unsigned, so a value built through [`SortMetrics::new`] is
/// non-negative by construction. Counts arriving as signed integers go
/// through [`SortMetrics::try_from_counts`], which rejects negatives.
///
/// # Example
///
/// ```
/// use sortbench_core::SortMetrics;
///
/// let metrics = SortMetrics::new(4, 0);
/// assert_eq!(metrics.comparisons(), 4);
/// assert_eq!(metrics.swaps(), 0);
///
/// assert!(SortMetrics::try_from_counts(-1, 0).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SortMetrics {
    comparisons: u64,
    swaps: u64,
}

impl SortMetrics {
    /// Metrics of a sort that did no work.
    pub const ZERO: SortMetrics = SortMetrics {
        comparisons: 0,
        swaps: 0,
    };

    /// Creates metrics from unsigned counts.
    pub const fn new(comparisons: u64, swaps: u64) -> Self {
        Self { comparisons, swaps }
    }

    /// Creates metrics from signed counts.
    ///
    /// # Errors
    ///
    /// Returns [`SortBenchError::NegativeMetric`] if either count is negative.
    pub fn try_from_counts(comparisons: i64, swaps: i64) -> Result<Self> {
        match (u64::try_from(comparisons), u64::try_from(swaps)) {
            (Ok(comparisons), Ok(swaps)) => Ok(Self::new(comparisons, swaps)),
            _ => Err(SortBenchError::NegativeMetric { comparisons, swaps }),
        }
    }

    /// Returns the number of key comparisons.
    pub const fn comparisons(&self) -> u64 {
        self.comparisons
    }

    /// Returns the number of swaps (exchanges or shifts, per algorithm).
    pub const fn swaps(&self) -> u64 {
        self.swaps
    }
}

/// Running operation counter used while a sort is in progress.
///
/// # Example
///
/// ```
/// use sortbench_core::{OperationCounter, SortMetrics};
///
/// let mut counter = OperationCounter::new();
/// counter.record_comparison();
/// counter.record_comparison();
/// counter.record_swap();
///
/// assert_eq!(counter.finish(), SortMetrics::new(2, 1));
/// ```
#[derive(Debug, Default)]
pub struct OperationCounter {
    /// Comparisons recorded so far.
    pub comparisons: u64,
    /// Swaps recorded so far.
    pub swaps: u64,
}

impl OperationCounter {
    /// Creates a counter at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one key comparison.
    #[inline]
    pub fn record_comparison(&mut self) {
        self.comparisons += 1;
    }

    /// Records one swap.
    #[inline]
    pub fn record_swap(&mut self) {
        self.swaps += 1;
    }

    /// Freezes the counts into [`SortMetrics`].
    pub fn finish(self) -> SortMetrics {
        SortMetrics::new(self.comparisons, self.swaps)
    }
}
