//! Shared test fixtures for SortBench crates.
//!
//! This crate provides record types and sequence builders for testing.
//! It does NOT depend on `sortbench-sort` to avoid circular dependencies.
//!
//! - [`record`] - Keyed records that remember their original position
//! - [`sequences`] - Sorted, reversed and duplicate-heavy inputs
//! - [`checks`] - Sortedness and inversion helpers
//!
//! # Usage
//!
//! Add as a dev-dependency in your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! sortbench-test = { workspace = true }
//! ```

pub mod checks;
pub mod record;
pub mod sequences;

pub use checks::{assert_sorted_by, inversions};
pub use record::{is_permutation_of, TaggedRecord};
pub use sequences::{duplicates, reversed, sorted, tagged};
