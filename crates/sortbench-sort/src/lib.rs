//! SortBench sorting algorithms
//!
//! Three comparison sorts instrumented to count their operations:
//! - [`BubbleSort`] with early exit on a swap-free pass
//! - [`InsertionSort`] counting each right shift as a swap
//! - [`SelectionSort`] with at most one exchange per position
//!
//! All of them sort in place, ascending by the key a
//! [`KeyExtractor`](sortbench_core::KeyExtractor) yields, and return
//! [`SortMetrics`](sortbench_core::SortMetrics).

pub mod algorithm;

pub use algorithm::{Algorithm, BubbleSort, InsertionSort, SelectionSort, SortAlgorithm};
