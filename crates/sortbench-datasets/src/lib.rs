//! Datasets for SortBench.
//!
//! The sorting core only needs a slice of records and a key extractor. This
//! crate supplies both for the three record shapes the benchmark suite uses:
//!
//! - [`model`] - [`Appointment`], [`Patient`] and [`InventoryItem`] with their
//!   default sort keys
//! - [`loader`] - `;`-delimited CSV loading
//! - [`generator`] - Seeded, reproducible dataset generation
//! - [`catalog`] - The file names and labels of the standard datasets

pub mod catalog;
pub mod error;
pub mod generator;
pub mod loader;
pub mod model;

pub use catalog::StandardDataset;
pub use error::{DatasetError, Result};
pub use generator::{generate_all, DatasetGenerator, DEFAULT_SEED};
pub use loader::{
    load_appointments, load_inventory, load_patients, read_appointments, read_inventory,
    read_patients,
};
pub use model::{Appointment, InventoryItem, Patient};
