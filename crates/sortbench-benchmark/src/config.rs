//! Benchmark configuration.

use crate::error::{BenchmarkError, Result};

/// Trial plan for a benchmark run.
///
/// Controls how many trials run in total and how many of the first ones are
/// warm-up trials whose timings are discarded.
///
/// # Example
///
/// ```
/// use sortbench_benchmark::BenchmarkConfig;
///
/// let config = BenchmarkConfig::new()
///     .with_trial_count(20)
///     .with_warmup_count(5);
///
/// assert_eq!(config.trial_count(), 20);
/// assert_eq!(config.warmup_count(), 5);
/// assert_eq!(config.measured_count(), 15);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchmarkConfig {
    trial_count: usize,
    warmup_count: usize,
}

impl BenchmarkConfig {
    /// Trials per benchmark when nothing else is configured.
    pub const DEFAULT_TRIAL_COUNT: usize = 10;

    /// Leading trials whose timings are discarded when nothing else is
    /// configured.
    pub const DEFAULT_WARMUP_COUNT: usize = 3;

    /// Creates the default trial plan.
    ///
    /// Defaults:
    /// - trial_count: 10
    /// - warmup_count: 3
    ///
    /// # Example
    ///
    /// ```
    /// use sortbench_benchmark::BenchmarkConfig;
    ///
    /// let config = BenchmarkConfig::new();
    /// assert_eq!(config.trial_count(), 10);
    /// assert_eq!(config.warmup_count(), 3);
    /// ```
    pub const fn new() -> Self {
        Self {
            trial_count: Self::DEFAULT_TRIAL_COUNT,
            warmup_count: Self::DEFAULT_WARMUP_COUNT,
        }
    }

    /// Sets the total number of trials, warm-up included.
    pub fn with_trial_count(mut self, count: usize) -> Self {
        self.trial_count = count;
        self
    }

    /// Sets the number of warm-up trials.
    pub fn with_warmup_count(mut self, count: usize) -> Self {
        self.warmup_count = count;
        self
    }

    /// Returns the total number of trials.
    pub fn trial_count(&self) -> usize {
        self.trial_count
    }

    /// Returns the number of warm-up trials.
    pub fn warmup_count(&self) -> usize {
        self.warmup_count
    }

    /// Returns the number of trials whose timings feed the median.
    pub fn measured_count(&self) -> usize {
        self.trial_count.saturating_sub(self.warmup_count)
    }

    /// Checks that at least one trial survives the warm-up.
    ///
    /// # Errors
    ///
    /// Returns [`BenchmarkError::InvalidTrialPlan`] when
    /// `trial_count <= warmup_count`.
    ///
    /// # Example
    ///
    /// ```
    /// use sortbench_benchmark::BenchmarkConfig;
    ///
    /// let config = BenchmarkConfig::new().with_trial_count(3);
    /// assert!(config.validate().is_err());
    /// ```
    pub fn validate(&self) -> Result<()> {
        if self.measured_count() == 0 {
            return Err(BenchmarkError::InvalidTrialPlan {
                trial_count: self.trial_count,
                warmup_count: self.warmup_count,
            });
        }
        Ok(())
    }
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self::new()
    }
}
