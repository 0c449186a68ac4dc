//! Benchmark runner.

use std::time::Instant;

use sortbench_core::KeyExtractor;
use sortbench_sort::SortAlgorithm;
use tracing::{debug, info};

use crate::config::BenchmarkConfig;
use crate::error::Result;
use crate::result::{BenchmarkResult, TrialSample};

/// Zero-erasure benchmark runner.
///
/// Runs one algorithm over one dataset for every trial of the configured plan.
/// The extractor and algorithm are stored as concrete generic type parameters
/// to avoid virtual dispatch inside the timed region.
///
/// Trials run one after another on the calling thread. Each trial sorts its
/// own copy of the dataset; the borrowed original is never written to.
///
/// # Type Parameters
///
/// * `T` - The record type
/// * `E` - The key extractor: `Fn(&T) -> K`
/// * `A` - The sorting algorithm
///
/// # Example
///
/// ```
/// use sortbench_benchmark::{Benchmark, BenchmarkConfig};
/// use sortbench_sort::SelectionSort;
///
/// let dataset = vec![3, 1, 2];
/// let by_value = |x: &i32| *x;
/// let benchmark = Benchmark::new(
///     BenchmarkConfig::new().with_trial_count(5).with_warmup_count(1),
///     "SelectionSort",
///     "tiny",
///     "integers",
///     &dataset,
///     &by_value,
///     SelectionSort,
/// );
///
/// let result = benchmark.run().unwrap();
/// assert_eq!(result.comparisons(), 3);
/// assert_eq!(result.swaps(), 1);
/// assert_eq!(benchmark.trials().len(), 5);
/// ```
pub struct Benchmark<'a, T, E, A>
where
    T: Clone,
    E: KeyExtractor<T>,
    A: SortAlgorithm,
{
    config: BenchmarkConfig,
    algorithm_name: String,
    dataset_name: String,
    dataset_type: String,
    dataset: &'a [T],
    extractor: &'a E,
    algorithm: A,
}

impl<'a, T, E, A> Benchmark<'a, T, E, A>
where
    T: Clone,
    E: KeyExtractor<T>,
    A: SortAlgorithm,
{
    /// Creates a new benchmark.
    ///
    /// # Arguments
    ///
    /// * `config` - Trial plan (trial count, warm-up count)
    /// * `algorithm_name` - Label for the algorithm in reports
    /// * `dataset_name` - Label for the dataset in reports
    /// * `dataset_type` - Kind of records in the dataset
    /// * `dataset` - The records; copied once per trial
    /// * `extractor` - Key extractor the algorithm orders by
    /// * `algorithm` - The sorting algorithm to time
    pub fn new(
        config: BenchmarkConfig,
        algorithm_name: impl Into<String>,
        dataset_name: impl Into<String>,
        dataset_type: impl Into<String>,
        dataset: &'a [T],
        extractor: &'a E,
        algorithm: A,
    ) -> Self {
        Self {
            config,
            algorithm_name: algorithm_name.into(),
            dataset_name: dataset_name.into(),
            dataset_type: dataset_type.into(),
            dataset,
            extractor,
            algorithm,
        }
    }

    /// Returns the trial plan.
    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Runs the benchmark and returns the aggregated result.
    ///
    /// # Errors
    ///
    /// Returns [`BenchmarkError::InvalidTrialPlan`](crate::BenchmarkError)
    /// if the plan leaves no measured trial.
    pub fn run(&self) -> Result<BenchmarkResult> {
        self.config.validate()?;
        Ok(self.summarize(&self.trials()))
    }

    /// Executes every trial of the plan and returns the raw samples.
    pub fn trials(&self) -> Vec<TrialSample> {
        info!(
            event = "benchmark_start",
            algorithm = %self.algorithm_name,
            dataset = %self.dataset_name,
            size = self.dataset.len(),
            trials = self.config.trial_count(),
        );

        (0..self.config.trial_count())
            .map(|trial_index| self.run_once(trial_index))
            .collect()
    }

    /// Executes a single trial on a fresh copy of the dataset.
    fn run_once(&self, trial_index: usize) -> TrialSample {
        let mut working = self.dataset.to_vec();

        let start = Instant::now();
        let metrics = self.algorithm.sort(&mut working, self.extractor);
        let sample = TrialSample::new(trial_index, start.elapsed(), metrics);

        debug!(
            event = "trial_end",
            trial = trial_index,
            warmup = trial_index < self.config.warmup_count(),
            elapsed_ns = sample.elapsed_nanos(),
            comparisons = metrics.comparisons(),
            swaps = metrics.swaps(),
        );

        sample
    }

    fn summarize(&self, samples: &[TrialSample]) -> BenchmarkResult {
        let result = BenchmarkResult::from_samples(
            self.algorithm_name.as_str(),
            self.dataset_name.as_str(),
            self.dataset_type.as_str(),
            self.dataset.len(),
            samples,
            self.config.warmup_count(),
        );

        info!(
            event = "benchmark_end",
            algorithm = %result.algorithm_name(),
            dataset = %result.dataset_name(),
            size = result.size(),
            comparisons = result.comparisons(),
            swaps = result.swaps(),
            time_ns = result.time_nanos(),
        );

        result
    }
}

/// Benchmarks `algorithm` over `dataset` with the default trial plan.
///
/// Runs 10 trials, drops the timings of the first 3, and reports the lower
/// median of the remaining 7 along with the truncating mean of comparisons
/// and swaps over all 10. `dataset` is left exactly as it was.
///
/// `algorithm_name` only labels the result; the algorithm that runs is
/// `algorithm`. A panicking extractor aborts the whole benchmark.
///
/// # Example
///
/// ```
/// use sortbench_benchmark::run_benchmark;
/// use sortbench_sort::InsertionSort;
///
/// let dataset = vec![2, 3, 1];
/// let result = run_benchmark("InsertionSort", "small", "integers", &dataset, &|x: &i32| *x, InsertionSort);
///
/// assert_eq!(result.comparisons(), 3);
/// assert_eq!(result.swaps(), 2);
/// ```
pub fn run_benchmark<T, E, A>(
    algorithm_name: &str,
    dataset_name: &str,
    dataset_type: &str,
    dataset: &[T],
    extractor: &E,
    algorithm: A,
) -> BenchmarkResult
where
    T: Clone,
    E: KeyExtractor<T>,
    A: SortAlgorithm,
{
    // 10 trials, 3 warm-up: always valid.
    let benchmark = Benchmark::new(
        BenchmarkConfig::default(),
        algorithm_name,
        dataset_name,
        dataset_type,
        dataset,
        extractor,
        algorithm,
    );
    benchmark.summarize(&benchmark.trials())
}

#[cfg(test)]
mod tests;
