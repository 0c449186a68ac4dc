//! SortBench Core - Core types and traits for instrumented sorting
//!
//! This crate provides the fundamental abstractions for SortBench:
//! - [`KeyExtractor`] for decoupling sort order from record shape
//! - [`SortMetrics`] for the operation counts a sort reports
//! - [`OperationCounter`] for accumulating those counts while sorting
//! - Error types shared by the rest of the workspace

pub mod error;
pub mod key;
pub mod metrics;

pub use error::{Result, SortBenchError};
pub use key::{is_sorted_by_key, KeyExtractor};
pub use metrics::{OperationCounter, SortMetrics};
