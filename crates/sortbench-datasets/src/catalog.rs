//! The standard datasets.

use std::path::{Path, PathBuf};

/// Labels and file name of one standard dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StandardDataset {
    /// File name inside the datasets directory.
    pub file_name: &'static str,
    /// Dataset label used in results.
    pub name: &'static str,
    /// Record kind label used in results.
    pub kind: &'static str,
    /// Heading printed above the dataset's results.
    pub title: &'static str,
}

impl StandardDataset {
    pub const APPOINTMENTS: StandardDataset = StandardDataset {
        file_name: "appointments_100.csv",
        name: "appointments_100",
        kind: "appointments",
        title: "Appointments 100",
    };

    pub const APPOINTMENTS_NEARLY_SORTED: StandardDataset = StandardDataset {
        file_name: "appointments_100_nearly_sorted.csv",
        name: "appointments_100_nearly_sorted",
        kind: "appointments",
        title: "Appointments 100 Nearly Sorted",
    };

    pub const PATIENTS: StandardDataset = StandardDataset {
        file_name: "patients_500.csv",
        name: "patients_500",
        kind: "patients",
        title: "Patients 500",
    };

    pub const INVENTORY_REVERSED: StandardDataset = StandardDataset {
        file_name: "inventory_500_reversed.csv",
        name: "inventory_500",
        kind: "inventory",
        title: "Inventory 500 Reversed",
    };

    /// All standard datasets, in generation and reporting order.
    pub const ALL: [StandardDataset; 4] = [
        Self::APPOINTMENTS,
        Self::APPOINTMENTS_NEARLY_SORTED,
        Self::PATIENTS,
        Self::INVENTORY_REVERSED,
    ];

    /// Location of this dataset inside `dir`.
    pub fn path_in(&self, dir: impl AsRef<Path>) -> PathBuf {
        dir.as_ref().join(self.file_name)
    }

    /// Returns true if every standard dataset file exists in `dir`.
    pub fn all_present(dir: impl AsRef<Path>) -> bool {
        let dir = dir.as_ref();
        Self::ALL.iter().all(|dataset| dataset.path_in(dir).is_file())
    }
}
