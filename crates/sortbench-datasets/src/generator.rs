//! Seeded dataset generation.
//!
//! Every dataset draws from its own [`ChaCha8Rng`] seeded with the
//! generator's seed, so each file is reproducible on its own and the
//! nearly sorted appointments start from exactly the random appointments.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;
use tracing::info;

use crate::catalog::StandardDataset;
use crate::error::{DatasetError, Result};
use crate::model::{Appointment, InventoryItem, Patient};

/// Seed used when none is given.
pub const DEFAULT_SEED: u64 = 42;

/// Random-index attempts allowed when perturbing the sorted appointments.
const MAX_EXCHANGE_ATTEMPTS: usize = 1000;

const SURNAMES: [&str; 30] = [
    "González", "Rodríguez", "García", "Martínez", "López", "Hernández", "Pérez", "Sánchez",
    "Ramírez", "Torres", "Flores", "Rivera", "Gómez", "Díaz", "Vargas", "Castillo", "Morales",
    "Vásquez", "Ramos", "Ortiz", "Cruz", "Guerrero", "Naranjo", "Cedeño", "Benítez", "Rojas",
    "Acosta", "Mendoza", "Salazar", "Pacheco",
];

// First ten entries repeat common names so they dominate the common band.
const PATIENT_SURNAMES: [&str; 50] = [
    "Ramírez", "Ramírez", "Ramírez", "Ramírez", "González", "González", "González", "González",
    "Pérez", "Pérez", "López", "Hernández", "Sánchez", "Rodríguez", "García", "Martínez",
    "Flores", "Rivera", "Gómez", "Díaz", "Vargas", "Castillo", "Morales", "Vásquez", "Ramos",
    "Ortiz", "Cruz", "Guerrero", "Naranjo", "Cedeño", "Benítez", "Rojas", "Acosta", "Mendoza",
    "Salazar", "Pacheco", "Soto", "Valencia", "Navarro", "Suárez", "Lozada", "Camacho", "Arias",
    "Bravo", "Montero", "Silva", "León", "Ibarra", "Pérez-G", "Montaño",
];

const SUPPLIES: [&str; 20] = [
    "Guante Nitrilo Talla M",
    "Alcohol 70% 1L",
    "Gasas 10x10",
    "Mascarilla Quirúrgica",
    "Jeringa 5ml",
    "Catéter 14G",
    "Venda Elástica",
    "Termómetro Digital",
    "Bata Desechable",
    "Papel Gasas",
    "Alcohol 70% 500ml",
    "Tiritas",
    "Compresas Estériles",
    "Guantes Látex Talla L",
    "Gasa Hidrocoloide",
    "Silla Ruedas Plegable",
    "Bolsa Suero",
    "Tubos Ensayo",
    "Aguja 21G",
    "Solución Salina 0.9%",
];

/// Reproducible generator for the standard datasets.
///
/// # Example
///
/// ```
/// use sortbench_datasets::DatasetGenerator;
///
/// let generator = DatasetGenerator::new(7);
/// let items = generator.inventory(3);
/// let stock: Vec<i32> = items.iter().map(|i| i.stock).collect();
/// assert_eq!(stock, vec![3, 2, 1]);
///
/// assert_eq!(generator.patients(50), DatasetGenerator::new(7).patients(50));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DatasetGenerator {
    seed: u64,
}

impl Default for DatasetGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}

impl DatasetGenerator {
    pub const fn new(seed: u64) -> Self {
        Self { seed }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    fn rng(&self) -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(self.seed)
    }

    /// Random appointments in March 2025, 08:00 to 17:50 on ten-minute slots.
    pub fn appointments(&self, count: usize) -> Vec<Appointment> {
        random_appointments(&mut self.rng(), count)
    }

    /// The [`appointments`](Self::appointments) sorted by time, then perturbed
    /// by `exchanges` swaps of distinct index pairs.
    ///
    /// Fewer exchanges happen if the attempt limit runs out first, which only
    /// occurs for very small counts.
    pub fn nearly_sorted_appointments(&self, count: usize, exchanges: usize) -> Vec<Appointment> {
        let mut rng = self.rng();
        let mut appointments = random_appointments(&mut rng, count);
        appointments.sort_by_key(Appointment::date_time_key);

        if appointments.len() < 2 {
            return appointments;
        }

        let mut used = HashSet::new();
        let mut remaining = exchanges;
        let mut attempts = 0;
        while remaining > 0 && attempts < MAX_EXCHANGE_ATTEMPTS {
            attempts += 1;
            let i = rng.random_range(0..appointments.len());
            let j = rng.random_range(0..appointments.len());
            if i == j {
                continue;
            }
            let pair = (i.min(j), i.max(j));
            if !used.insert(pair) {
                continue;
            }
            appointments.swap(pair.0, pair.1);
            remaining -= 1;
        }
        appointments
    }

    /// Patients with a skewed surname distribution and priority 1 to 3.
    ///
    /// 40% draw from the first 10 pool entries, 30% from the next 20 and 30%
    /// from the last 20.
    pub fn patients(&self, count: usize) -> Vec<Patient> {
        let mut rng = self.rng();

        (1..=count)
            .map(|n| {
                let band: u32 = rng.random_range(0..100);
                let index = if band < 40 {
                    rng.random_range(0..10)
                } else if band < 70 {
                    10 + rng.random_range(0..20)
                } else {
                    30 + rng.random_range(0..20)
                };
                let priority = rng.random_range(1..=3);
                Patient::new(format!("PAT-{:04}", n), PATIENT_SURNAMES[index], priority)
            })
            .collect()
    }

    /// Inventory items with stock strictly decreasing from `count` to 1.
    pub fn inventory(&self, count: usize) -> Vec<InventoryItem> {
        (0..count)
            .map(|i| {
                let stock = i32::try_from(count - i).unwrap_or(i32::MAX);
                InventoryItem::new(format!("ITEM-{:04}", i + 1), SUPPLIES[i % SUPPLIES.len()], stock)
            })
            .collect()
    }

    /// Writes the four standard datasets into `dir`, creating it if needed.
    pub fn write_all(&self, dir: impl AsRef<Path>) -> Result<()> {
        let dir = dir.as_ref();
        fs::create_dir_all(dir).map_err(|e| DatasetError::from(e).in_file(dir))?;

        write_csv(&StandardDataset::APPOINTMENTS.path_in(dir), &self.appointments(100))?;
        write_csv(
            &StandardDataset::APPOINTMENTS_NEARLY_SORTED.path_in(dir),
            &self.nearly_sorted_appointments(100, 5),
        )?;
        write_csv(&StandardDataset::PATIENTS.path_in(dir), &self.patients(500))?;
        write_csv(&StandardDataset::INVENTORY_REVERSED.path_in(dir), &self.inventory(500))?;

        info!(
            event = "datasets_generated",
            dir = %dir.display(),
            seed = self.seed,
        );
        Ok(())
    }
}

/// Writes the four standard datasets into `dir` using `seed`.
pub fn generate_all(dir: impl AsRef<Path>, seed: u64) -> Result<()> {
    DatasetGenerator::new(seed).write_all(dir)
}

fn random_appointments(rng: &mut ChaCha8Rng, count: usize) -> Vec<Appointment> {
    let base = march_first();

    (1..=count)
        .map(|n| {
            let last_name = SURNAMES[rng.random_range(0..SURNAMES.len())];
            let day: i64 = rng.random_range(0..31);
            let hour: i64 = rng.random_range(8..18);
            let minute: i64 = rng.random_range(0..6) * 10;
            let date_time =
                base + TimeDelta::days(day) + TimeDelta::hours(hour) + TimeDelta::minutes(minute);
            Appointment::new(format!("APT-{:03}", n), last_name, date_time)
        })
        .collect()
}

fn march_first() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2025, 3, 1)
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .unwrap_or_default()
}

fn write_csv<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    let write = || -> Result<()> {
        let mut writer = csv::WriterBuilder::new().delimiter(b';').from_path(path)?;
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;
        Ok(())
    };
    write().map_err(|e| e.in_file(path))?;

    info!(
        event = "dataset_written",
        path = %path.display(),
        records = records.len(),
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::{load_appointments, load_inventory, load_patients};
    use chrono::{Datelike, Timelike};
    use sortbench_core::is_sorted_by_key;

    #[test]
    fn test_appointments_shape() {
        let appointments = DatasetGenerator::default().appointments(100);
        assert_eq!(appointments.len(), 100);
        assert_eq!(appointments[0].id, "APT-001");
        assert_eq!(appointments[99].id, "APT-100");

        for a in &appointments {
            assert_eq!((a.date_time.year(), a.date_time.month()), (2025, 3));
            assert!((8..=17).contains(&a.date_time.hour()));
            assert_eq!(a.date_time.minute() % 10, 0);
            assert!(SURNAMES.contains(&a.last_name.as_str()));
        }
    }

    #[test]
    fn test_same_seed_same_data() {
        let a = DatasetGenerator::new(9);
        let b = DatasetGenerator::new(9);
        assert_eq!(a.appointments(40), b.appointments(40));
        assert_eq!(a.nearly_sorted_appointments(40, 5), b.nearly_sorted_appointments(40, 5));
        assert_eq!(a.patients(40), b.patients(40));

        assert_ne!(a.appointments(40), DatasetGenerator::new(10).appointments(40));
    }

    #[test]
    fn test_nearly_sorted_is_permuted_sorted_copy() {
        let generator = DatasetGenerator::default();
        let mut sorted = generator.appointments(100);
        sorted.sort_by_key(Appointment::date_time_key);

        let nearly = generator.nearly_sorted_appointments(100, 5);
        assert_eq!(nearly.len(), 100);

        let mut ids: Vec<&str> = nearly.iter().map(|a| a.id.as_str()).collect();
        let mut expected: Vec<&str> = sorted.iter().map(|a| a.id.as_str()).collect();
        ids.sort_unstable();
        expected.sort_unstable();
        assert_eq!(ids, expected);

        // Five swaps move at most ten records.
        let moved = nearly.iter().zip(&sorted).filter(|(a, b)| a != b).count();
        assert!(moved <= 10);

        let zero = generator.nearly_sorted_appointments(100, 0);
        assert!(is_sorted_by_key(&zero, &Appointment::date_time_key));
    }

    #[test]
    fn test_nearly_sorted_tiny_inputs() {
        let generator = DatasetGenerator::default();
        assert!(generator.nearly_sorted_appointments(0, 5).is_empty());
        assert_eq!(generator.nearly_sorted_appointments(1, 5).len(), 1);
        // Two records have a single distinct pair; the loop stops at the attempt limit.
        assert_eq!(generator.nearly_sorted_appointments(2, 5).len(), 2);
    }

    #[test]
    fn test_patients_shape() {
        let patients = DatasetGenerator::default().patients(500);
        assert_eq!(patients.len(), 500);
        assert_eq!(patients[0].id, "PAT-0001");
        assert_eq!(patients[499].id, "PAT-0500");
        assert!(patients.iter().all(|p| (1..=3).contains(&p.priority)));
        assert!(patients
            .iter()
            .all(|p| PATIENT_SURNAMES.contains(&p.last_name.as_str())));
    }

    #[test]
    fn test_inventory_is_reversed() {
        let items = DatasetGenerator::default().inventory(500);
        assert_eq!(items[0].id, "ITEM-0001");
        assert_eq!(items[0].stock, 500);
        assert_eq!(items[499].stock, 1);
        assert_eq!(items[20].supply, items[0].supply);
        assert!(items.windows(2).all(|w| w[0].stock > w[1].stock));
    }

    #[test]
    fn test_write_all_round_trips_through_loader() {
        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("nested").join("datasets");
        generate_all(&target, DEFAULT_SEED).unwrap();

        assert!(StandardDataset::all_present(&target));

        let generator = DatasetGenerator::default();
        let appointments = load_appointments(StandardDataset::APPOINTMENTS.path_in(&target)).unwrap();
        assert_eq!(appointments, generator.appointments(100));

        let patients = load_patients(StandardDataset::PATIENTS.path_in(&target)).unwrap();
        assert_eq!(patients.len(), 500);

        let items = load_inventory(StandardDataset::INVENTORY_REVERSED.path_in(&target)).unwrap();
        assert_eq!(items, generator.inventory(500));
    }

    #[test]
    fn test_written_header_and_delimiter() {
        let dir = tempfile::tempdir().unwrap();
        DatasetGenerator::default().write_all(dir.path()).unwrap();

        let text = fs::read_to_string(StandardDataset::INVENTORY_REVERSED.path_in(dir.path())).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("id;supply;stock"));
        assert_eq!(lines.next(), Some("ITEM-0001;Guante Nitrilo Talla M;500"));
    }
}
