//! Benchmark result types.

use std::fmt;
use std::time::Duration;

use sortbench_core::SortMetrics;

/// Outcome of a single trial.
///
/// Contains the elapsed time and operation counts of one sort over one copy
/// of the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrialSample {
    /// Trial index (0-based).
    pub trial_index: usize,
    /// Wall time spent inside the sort.
    pub elapsed: Duration,
    /// Comparisons and swaps the sort reported.
    pub metrics: SortMetrics,
}

impl TrialSample {
    /// Creates a trial sample.
    pub fn new(trial_index: usize, elapsed: Duration, metrics: SortMetrics) -> Self {
        Self {
            trial_index,
            elapsed,
            metrics,
        }
    }

    /// Returns the elapsed time in nanoseconds, saturating at `u64::MAX`.
    pub fn elapsed_nanos(&self) -> u64 {
        u64::try_from(self.elapsed.as_nanos()).unwrap_or(u64::MAX)
    }
}

/// Aggregated outcome of one algorithm over one dataset.
///
/// Comparisons and swaps are the truncating mean over every trial, warm-up
/// included. The time is the lower median of the trials after warm-up.
///
/// # Example
///
/// ```
/// use sortbench_benchmark::BenchmarkResult;
///
/// let result = BenchmarkResult::new("BubbleSort", "patients_500", "patients", 500, 124_750, 61_000, 1_250_000);
///
/// assert_eq!(
///     result.to_csv_row(),
///     "BubbleSort;patients_500;patients;500;124750;61000;1250000"
/// );
/// assert_eq!(
///     result.to_string(),
///     "BubbleSort | patients_500 | patients | N=500 | comp=124750 | swaps=61000 | time=1250000ns"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BenchmarkResult {
    algorithm_name: String,
    dataset_name: String,
    dataset_type: String,
    size: usize,
    comparisons: u64,
    swaps: u64,
    time_nanos: u64,
}

impl BenchmarkResult {
    /// Creates a benchmark result from already aggregated values.
    pub fn new(
        algorithm_name: impl Into<String>,
        dataset_name: impl Into<String>,
        dataset_type: impl Into<String>,
        size: usize,
        comparisons: u64,
        swaps: u64,
        time_nanos: u64,
    ) -> Self {
        Self {
            algorithm_name: algorithm_name.into(),
            dataset_name: dataset_name.into(),
            dataset_type: dataset_type.into(),
            size,
            comparisons,
            swaps,
            time_nanos,
        }
    }

    /// Aggregates trial samples into a result.
    ///
    /// The first `warmup_count` samples are left out of the time median only.
    /// An empty sample set, or one with nothing after warm-up, reports zero
    /// for the affected statistics.
    ///
    /// # Example
    ///
    /// ```
    /// use sortbench_benchmark::{BenchmarkResult, TrialSample};
    /// use sortbench_core::SortMetrics;
    /// use std::time::Duration;
    ///
    /// let samples: Vec<TrialSample> = [900, 800, 700, 30, 10, 20, 40]
    ///     .iter()
    ///     .enumerate()
    ///     .map(|(i, &ns)| TrialSample::new(i, Duration::from_nanos(ns), SortMetrics::new(6, 2)))
    ///     .collect();
    ///
    /// let result = BenchmarkResult::from_samples("InsertionSort", "tiny", "ints", 4, &samples, 3);
    /// // Measured timings 30, 10, 20, 40 -> sorted 10, 20, 30, 40 -> index 2.
    /// assert_eq!(result.time_nanos(), 30);
    /// assert_eq!(result.comparisons(), 6);
    /// ```
    pub fn from_samples(
        algorithm_name: impl Into<String>,
        dataset_name: impl Into<String>,
        dataset_type: impl Into<String>,
        size: usize,
        samples: &[TrialSample],
        warmup_count: usize,
    ) -> Self {
        let trials = samples.len() as u64;
        let (total_comparisons, total_swaps) = samples.iter().fold((0u64, 0u64), |(c, s), t| {
            (c + t.metrics.comparisons(), s + t.metrics.swaps())
        });
        let (comparisons, swaps) = if trials == 0 {
            (0, 0)
        } else {
            (total_comparisons / trials, total_swaps / trials)
        };

        let mut measured: Vec<u64> = samples
            .iter()
            .skip(warmup_count)
            .map(TrialSample::elapsed_nanos)
            .collect();
        measured.sort_unstable();
        let time_nanos = measured.get(measured.len() / 2).copied().unwrap_or(0);

        Self::new(
            algorithm_name,
            dataset_name,
            dataset_type,
            size,
            comparisons,
            swaps,
            time_nanos,
        )
    }

    /// Returns the algorithm label.
    pub fn algorithm_name(&self) -> &str {
        &self.algorithm_name
    }

    /// Returns the dataset name.
    pub fn dataset_name(&self) -> &str {
        &self.dataset_name
    }

    /// Returns the dataset type (e.g. `appointments`).
    pub fn dataset_type(&self) -> &str {
        &self.dataset_type
    }

    /// Returns the number of records in the dataset.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the mean comparisons per trial.
    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    /// Returns the mean swaps per trial.
    pub fn swaps(&self) -> u64 {
        self.swaps
    }

    /// Returns the median trial time in nanoseconds.
    pub fn time_nanos(&self) -> u64 {
        self.time_nanos
    }

    /// Returns the median trial time.
    pub fn time(&self) -> Duration {
        Duration::from_nanos(self.time_nanos)
    }

    /// Serializes the result as one `;`-delimited row:
    /// `algorithm;dataset;type;size;comparisons;swaps;time_ns`.
    pub fn to_csv_row(&self) -> String {
        format!(
            "{};{};{};{};{};{};{}",
            self.algorithm_name,
            self.dataset_name,
            self.dataset_type,
            self.size,
            self.comparisons,
            self.swaps,
            self.time_nanos
        )
    }
}

impl fmt::Display for BenchmarkResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | N={} | comp={} | swaps={} | time={}ns",
            self.algorithm_name,
            self.dataset_name,
            self.dataset_type,
            self.size,
            self.comparisons,
            self.swaps,
            self.time_nanos
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples(timings: &[u64], counts: &[(u64, u64)]) -> Vec<TrialSample> {
        timings
            .iter()
            .zip(counts)
            .enumerate()
            .map(|(i, (&ns, &(c, s)))| {
                TrialSample::new(i, Duration::from_nanos(ns), SortMetrics::new(c, s))
            })
            .collect()
    }

    #[test]
    fn test_warmup_excluded_from_median_only() {
        // Warm-up trials are slow and report more work; the work still counts.
        let timings = [1000, 1000, 1000, 5, 9, 7, 1, 3, 8, 6];
        let counts = [
            (20, 10),
            (20, 10),
            (20, 10),
            (10, 0),
            (10, 0),
            (10, 0),
            (10, 0),
            (10, 0),
            (10, 0),
            (10, 0),
        ];
        let result =
            BenchmarkResult::from_samples("A", "d", "t", 3, &samples(&timings, &counts), 3);

        // Measured: 5 9 7 1 3 8 6 -> 1 3 5 6 7 8 9 -> index 3.
        assert_eq!(result.time_nanos(), 6);
        // (3 * 20 + 7 * 10) / 10 = 13, (3 * 10) / 10 = 3.
        assert_eq!(result.comparisons(), 13);
        assert_eq!(result.swaps(), 3);
    }

    #[test]
    fn test_mean_truncates() {
        let timings = [1, 1, 1, 1];
        let counts = [(1, 0), (1, 0), (1, 1), (2, 1)];
        let result =
            BenchmarkResult::from_samples("A", "d", "t", 0, &samples(&timings, &counts), 1);
        // 5 / 4 and 2 / 4
        assert_eq!(result.comparisons(), 1);
        assert_eq!(result.swaps(), 0);
    }

    #[test]
    fn test_lower_median_for_even_remainder() {
        let timings = [0, 40, 10, 30, 20];
        let counts = [(0, 0); 5];
        let result =
            BenchmarkResult::from_samples("A", "d", "t", 0, &samples(&timings, &counts), 1);
        // 10 20 30 40 -> index 2
        assert_eq!(result.time_nanos(), 30);
    }

    #[test]
    fn test_elapsed_nanos_saturates() {
        let sample = TrialSample::new(0, Duration::MAX, SortMetrics::ZERO);
        assert_eq!(sample.elapsed_nanos(), u64::MAX);

        let sample = TrialSample::new(1, Duration::from_micros(3), SortMetrics::ZERO);
        assert_eq!(sample.elapsed_nanos(), 3_000);
    }

    #[test]
    fn test_empty_samples_are_zero() {
        let result = BenchmarkResult::from_samples("A", "d", "t", 7, &[], 3);
        assert_eq!(result.size(), 7);
        assert_eq!(result.comparisons(), 0);
        assert_eq!(result.swaps(), 0);
        assert_eq!(result.time_nanos(), 0);
    }

    #[test]
    fn test_csv_and_display_formats() {
        let result = BenchmarkResult::new("SelectionSort", "inventory_500", "inventory", 500, 124750, 250, 42);
        assert_eq!(
            result.to_csv_row(),
            "SelectionSort;inventory_500;inventory;500;124750;250;42"
        );
        assert_eq!(
            format!("{}", result),
            "SelectionSort | inventory_500 | inventory | N=500 | comp=124750 | swaps=250 | time=42ns"
        );
        assert_eq!(result.time(), Duration::from_nanos(42));
    }
}
