//! Benchmark suite over the standard datasets.

use std::fs;
use std::io;
use std::path::Path;

use sortbench_benchmark::{
    run_benchmark, Benchmark, BenchmarkConfig, BenchmarkError, BenchmarkResult, CsvExporter,
    MarkdownReport,
};
use sortbench_config::{ConfigError, SuiteConfig};
use sortbench_core::KeyExtractor;
use sortbench_datasets::{
    load_appointments, load_inventory, load_patients, Appointment, DatasetError,
    DatasetGenerator, InventoryItem, Patient, StandardDataset,
};
use sortbench_sort::{Algorithm, BubbleSort, InsertionSort, SelectionSort, SortAlgorithm};
use thiserror::Error;
use tracing::info;

/// Title of the Markdown report.
const REPORT_TITLE: &str = "SortBench results";

/// Errors raised while running the suite.
#[derive(Debug, Error)]
pub enum SuiteError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Benchmark(#[from] BenchmarkError),

    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Result type alias for suite operations.
pub type Result<T> = std::result::Result<T, SuiteError>;

/// Benchmarks bubble, insertion and selection sort, in that order, over one
/// dataset with the default trial plan.
///
/// # Example
///
/// ```
/// use sortbench::run_all_algorithms;
///
/// let dataset = vec![4, 1, 3, 2];
/// let results = run_all_algorithms(&dataset, "tiny", "integers", &|x: &i32| *x);
///
/// let names: Vec<&str> = results.iter().map(|r| r.algorithm_name()).collect();
/// assert_eq!(names, ["BubbleSort", "InsertionSort", "SelectionSort"]);
/// assert!(results.iter().all(|r| r.size() == 4));
/// ```
pub fn run_all_algorithms<T, E>(
    dataset: &[T],
    dataset_name: &str,
    dataset_type: &str,
    extractor: &E,
) -> Vec<BenchmarkResult>
where
    T: Clone,
    E: KeyExtractor<T>,
{
    vec![
        run_benchmark("BubbleSort", dataset_name, dataset_type, dataset, extractor, BubbleSort),
        run_benchmark("InsertionSort", dataset_name, dataset_type, dataset, extractor, InsertionSort),
        run_benchmark("SelectionSort", dataset_name, dataset_type, dataset, extractor, SelectionSort),
    ]
}

/// Results for one dataset, in algorithm order.
#[derive(Debug, Clone)]
pub struct DatasetResults {
    pub dataset: StandardDataset,
    pub results: Vec<BenchmarkResult>,
}

/// Runs the configured algorithms over the four standard datasets.
///
/// # Example
///
/// ```no_run
/// use sortbench::{Suite, SuiteConfig};
///
/// let suite = Suite::new(SuiteConfig::load("sortbench.toml").unwrap_or_default());
/// for run in suite.run().unwrap() {
///     println!("{}: {} results", run.dataset.title, run.results.len());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Suite {
    config: SuiteConfig,
}

impl Suite {
    pub fn new(config: SuiteConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SuiteConfig {
        &self.config
    }

    /// Trial plan with the configured overrides applied to the defaults.
    pub fn benchmark_config(&self) -> BenchmarkConfig {
        let mut plan = BenchmarkConfig::default();
        if let Some(count) = self.config.trials.trial_count {
            plan = plan.with_trial_count(count);
        }
        if let Some(count) = self.config.trials.warmup_count {
            plan = plan.with_warmup_count(count);
        }
        plan
    }

    /// Generates the datasets if any file is missing or regeneration is
    /// configured. Returns whether generation ran.
    pub fn prepare_datasets(&self) -> Result<bool> {
        let dir = &self.config.datasets_dir;
        if !self.config.regenerate && StandardDataset::all_present(dir) {
            return Ok(false);
        }
        DatasetGenerator::new(self.config.seed).write_all(dir)?;
        Ok(true)
    }

    /// Prepares, loads and benchmarks every standard dataset.
    ///
    /// # Errors
    ///
    /// Fails before any trial runs if the trial plan is invalid, or on the
    /// first dataset that cannot be generated or loaded.
    pub fn run(&self) -> Result<Vec<DatasetResults>> {
        let plan = self.benchmark_config();
        plan.validate()?;
        self.prepare_datasets()?;

        let dir = &self.config.datasets_dir;
        let appointments = load_appointments(StandardDataset::APPOINTMENTS.path_in(dir))?;
        let nearly_sorted =
            load_appointments(StandardDataset::APPOINTMENTS_NEARLY_SORTED.path_in(dir))?;
        let patients = load_patients(StandardDataset::PATIENTS.path_in(dir))?;
        let inventory = load_inventory(StandardDataset::INVENTORY_REVERSED.path_in(dir))?;

        let by_time = Appointment::date_time_key;
        let by_priority = Patient::priority_key;
        let by_stock = InventoryItem::stock_key;

        Ok(vec![
            self.run_dataset(plan, StandardDataset::APPOINTMENTS, &appointments, &by_time)?,
            self.run_dataset(
                plan,
                StandardDataset::APPOINTMENTS_NEARLY_SORTED,
                &nearly_sorted,
                &by_time,
            )?,
            self.run_dataset(plan, StandardDataset::PATIENTS, &patients, &by_priority)?,
            self.run_dataset(plan, StandardDataset::INVENTORY_REVERSED, &inventory, &by_stock)?,
        ])
    }

    /// Benchmarks the configured algorithms over one dataset.
    pub fn run_dataset<T, E>(
        &self,
        plan: BenchmarkConfig,
        dataset: StandardDataset,
        records: &[T],
        extractor: &E,
    ) -> Result<DatasetResults>
    where
        T: Clone,
        E: KeyExtractor<T>,
    {
        let results = self
            .config
            .algorithms
            .iter()
            .map(|&algorithm: &Algorithm| {
                Benchmark::new(
                    plan,
                    algorithm.name(),
                    dataset.name,
                    dataset.kind,
                    records,
                    extractor,
                    algorithm,
                )
                .run()
            })
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(DatasetResults { dataset, results })
    }

    /// Writes the configured CSV and Markdown reports, creating parent
    /// directories as needed. Returns the paths written.
    pub fn write_reports(&self, runs: &[DatasetResults]) -> Result<Vec<&Path>> {
        let results: Vec<BenchmarkResult> = runs
            .iter()
            .flat_map(|run| run.results.iter().cloned())
            .collect();

        let mut written = Vec::new();
        if let Some(path) = &self.config.output.csv {
            create_parent(path)?;
            CsvExporter::to_file(&results, path)?;
            written.push(path.as_path());
        }
        if let Some(path) = &self.config.output.markdown {
            create_parent(path)?;
            MarkdownReport::to_file(REPORT_TITLE, &results, path)?;
            written.push(path.as_path());
        }

        for path in &written {
            info!(event = "report_written", path = %path.display());
        }
        Ok(written)
    }
}

fn create_parent(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests;
