//! SortBench - instrumented sorting algorithms and benchmarks in Rust.
//!
//! Bubble, insertion and selection sort that count their key comparisons and
//! swaps, a repeated-trial benchmark runner, and a suite that runs them over
//! generated appointment, patient and inventory datasets.
//!
//! # Example
//!
//! ```rust
//! use sortbench::prelude::*;
//!
//! let mut scores = vec![3, 1, 2];
//! let metrics = InsertionSort.sort(&mut scores, &|x: &i32| *x);
//! assert_eq!(scores, vec![1, 2, 3]);
//! assert_eq!(metrics.swaps(), 2);
//!
//! let result = run_benchmark("InsertionSort", "scores", "integers", &[3, 1, 2], &|x: &i32| *x, InsertionSort);
//! assert_eq!(result.to_csv_row().split(';').count(), 7);
//! ```

// Counting primitives
pub use sortbench_core::{is_sorted_by_key, KeyExtractor, OperationCounter, SortBenchError, SortMetrics};

// Algorithms
pub use sortbench_sort::{Algorithm, BubbleSort, InsertionSort, SelectionSort, SortAlgorithm};

// Benchmarking and reports
pub use sortbench_benchmark::{
    run_benchmark, Benchmark, BenchmarkConfig, BenchmarkError, BenchmarkResult, CsvExporter,
    MarkdownReport, TrialSample,
};

// Configuration
pub use sortbench_config::{ConfigError, SuiteConfig};

// Datasets
pub use sortbench_datasets::{
    Appointment, DatasetError, DatasetGenerator, InventoryItem, Patient, StandardDataset,
};

mod suite;
pub use suite::{run_all_algorithms, DatasetResults, Suite, SuiteError};

#[cfg(feature = "console")]
pub mod console;

pub mod prelude {
    pub use super::{Algorithm, BubbleSort, InsertionSort, SelectionSort, SortAlgorithm};
    pub use super::{BenchmarkConfig, BenchmarkResult};
    pub use super::{KeyExtractor, SortMetrics};
    pub use super::{run_all_algorithms, run_benchmark};
}
