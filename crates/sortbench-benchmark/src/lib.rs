//! Benchmarking framework for SortBench.
//!
//! This crate runs one sorting algorithm over one dataset several times and
//! folds the trials into a single [`BenchmarkResult`].
//!
//! # Overview
//!
//! Each trial sorts a fresh copy of the dataset, so the caller's records are
//! never touched. The first trials are warm-up: their timings are dropped
//! before the lower median is taken, but their comparison and swap counts
//! still take part in the averages.
//!
//! # Example
//!
//! ```
//! use sortbench_benchmark::run_benchmark;
//! use sortbench_sort::BubbleSort;
//!
//! let dataset = vec![5, 4, 3, 2, 1];
//! let result = run_benchmark(
//!     "BubbleSort",
//!     "reversed_5",
//!     "integers",
//!     &dataset,
//!     &|x: &i32| *x,
//!     BubbleSort,
//! );
//!
//! assert_eq!(result.size(), 5);
//! assert_eq!(result.comparisons(), 10);
//! assert_eq!(result.swaps(), 10);
//! assert_eq!(dataset, vec![5, 4, 3, 2, 1]);
//! ```

mod config;
mod error;
mod report;
mod result;
mod runner;

pub use config::BenchmarkConfig;
pub use error::{BenchmarkError, Result};
pub use report::{CsvExporter, MarkdownReport};
pub use result::{BenchmarkResult, TrialSample};
pub use runner::{run_benchmark, Benchmark};
