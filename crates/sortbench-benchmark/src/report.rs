//! Report generation for benchmark results.

use std::fmt::Write as _;
use std::fs;
use std::io::Write;
use std::path::Path;

use num_format::{Locale, ToFormattedString};

use crate::error::Result;
use crate::result::BenchmarkResult;

/// CSV exporter for benchmark results.
///
/// Writes a header followed by one [`BenchmarkResult::to_csv_row`] line per
/// result. Fields are `;`-delimited.
///
/// # Example
///
/// ```
/// use sortbench_benchmark::{BenchmarkResult, CsvExporter};
///
/// let results = vec![
///     BenchmarkResult::new("BubbleSort", "patients_500", "patients", 500, 124_000, 60_000, 900_000),
/// ];
/// let csv = CsvExporter::to_string(&results);
///
/// let mut lines = csv.lines();
/// assert_eq!(lines.next(), Some(CsvExporter::HEADER));
/// assert_eq!(lines.next(), Some("BubbleSort;patients_500;patients;500;124000;60000;900000"));
/// ```
pub struct CsvExporter;

impl CsvExporter {
    /// Column header line.
    pub const HEADER: &'static str = "algorithm;dataset;type;size;comparisons;swaps;time_ns";

    /// Exports benchmark results to a CSV string.
    pub fn to_string(results: &[BenchmarkResult]) -> String {
        let mut output = String::with_capacity(64 * (results.len() + 1));
        output.push_str(Self::HEADER);
        output.push('\n');
        for result in results {
            output.push_str(&result.to_csv_row());
            output.push('\n');
        }
        output
    }

    /// Exports benchmark results to a CSV file.
    pub fn to_file(results: &[BenchmarkResult], path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, Self::to_string(results))?;
        Ok(())
    }

    /// Writes benchmark results as CSV to a writer.
    pub fn write<W: Write>(results: &[BenchmarkResult], mut writer: W) -> Result<()> {
        writer.write_all(Self::to_string(results).as_bytes())?;
        Ok(())
    }
}

/// Markdown report generator.
///
/// Renders results as a table, one row per algorithm/dataset pair.
///
/// # Example
///
/// ```
/// use sortbench_benchmark::{BenchmarkResult, MarkdownReport};
///
/// let results = vec![
///     BenchmarkResult::new("BubbleSort", "inventory_500", "inventory", 500, 124_750, 124_750, 2_000_000),
///     BenchmarkResult::new("SelectionSort", "inventory_500", "inventory", 500, 124_750, 250, 1_000_000),
/// ];
///
/// let md = MarkdownReport::to_string("Sorting benchmark", &results);
/// assert!(md.contains("# Sorting benchmark"));
/// assert!(md.contains("| SelectionSort | inventory_500 | inventory | 500 | 124,750 | 250 | 1.000 |"));
/// ```
pub struct MarkdownReport;

impl MarkdownReport {
    /// Generates a Markdown report string.
    pub fn to_string(title: &str, results: &[BenchmarkResult]) -> String {
        let mut output = String::new();

        let _ = writeln!(output, "# {}", title);
        let _ = writeln!(output);

        if results.is_empty() {
            let _ = writeln!(output, "*No benchmarks completed.*");
            return output;
        }

        output.push_str(&Self::comparison(results));
        output
    }

    /// Generates the comparison table alone.
    ///
    /// Times are shown in milliseconds, counts with thousands separators.
    pub fn comparison(results: &[BenchmarkResult]) -> String {
        let mut output = String::new();

        let _ = writeln!(
            output,
            "| Algorithm | Dataset | Type | N | Comparisons | Swaps | Median (ms) |"
        );
        let _ = writeln!(
            output,
            "|-----------|---------|------|---|-------------|-------|-------------|"
        );

        for result in results {
            let _ = writeln!(
                output,
                "| {} | {} | {} | {} | {} | {} | {:.3} |",
                result.algorithm_name(),
                result.dataset_name(),
                result.dataset_type(),
                result.size(),
                result.comparisons().to_formatted_string(&Locale::en),
                result.swaps().to_formatted_string(&Locale::en),
                result.time().as_secs_f64() * 1000.0,
            );
        }

        output
    }

    /// Writes a Markdown report to a file.
    pub fn to_file(title: &str, results: &[BenchmarkResult], path: impl AsRef<Path>) -> Result<()> {
        fs::write(path, Self::to_string(title, results))?;
        Ok(())
    }
}
