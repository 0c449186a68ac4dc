//! Tests for the benchmark suite.

use super::*;
use sortbench_test::{reversed, tagged, TaggedRecord};

fn quick_config(dir: &Path) -> SuiteConfig {
    let mut config = SuiteConfig::new().with_datasets_dir(dir.join("datasets"));
    config.trials.trial_count = Some(2);
    config.trials.warmup_count = Some(1);
    config
}

#[test]
fn test_run_all_algorithms_order_and_counts() {
    let dataset = reversed(5);
    let results = run_all_algorithms(&dataset, "reversed_5", "integers", &|x: &i32| *x);

    let summary: Vec<(&str, u64, u64)> = results
        .iter()
        .map(|r| (r.algorithm_name(), r.comparisons(), r.swaps()))
        .collect();
    assert_eq!(
        summary,
        vec![
            ("BubbleSort", 10, 10),
            ("InsertionSort", 10, 10),
            ("SelectionSort", 10, 2),
        ]
    );
    assert!(results.iter().all(|r| r.dataset_name() == "reversed_5"));
    assert_eq!(dataset, reversed(5));
}

#[test]
fn test_run_all_algorithms_on_records() {
    let records = tagged(&[3, 1, 2, 1]);
    let results = run_all_algorithms(&records, "tagged", "records", &TaggedRecord::key);
    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|r| r.size() == 4));
}

#[test]
fn test_benchmark_config_overrides() {
    let suite = Suite::new(SuiteConfig::default());
    assert_eq!(suite.benchmark_config(), BenchmarkConfig::default());

    let mut config = SuiteConfig::default();
    config.trials.warmup_count = Some(1);
    let plan = Suite::new(config).benchmark_config();
    assert_eq!(plan.trial_count(), 10);
    assert_eq!(plan.warmup_count(), 1);
}

#[test]
fn test_config_defaults_match_benchmark_defaults() {
    use sortbench_config::TrialConfig;

    assert_eq!(TrialConfig::DEFAULT_TRIAL_COUNT, BenchmarkConfig::DEFAULT_TRIAL_COUNT);
    assert_eq!(TrialConfig::DEFAULT_WARMUP_COUNT, BenchmarkConfig::DEFAULT_WARMUP_COUNT);

    let trials = TrialConfig::default();
    let plan = Suite::new(SuiteConfig::default()).benchmark_config();
    assert_eq!(trials.effective_trial_count(), plan.trial_count());
    assert_eq!(trials.effective_warmup_count(), plan.warmup_count());
}

#[test]
fn test_prepare_datasets_generates_once() {
    let dir = tempfile::tempdir().unwrap();
    let suite = Suite::new(quick_config(dir.path()));

    assert!(suite.prepare_datasets().unwrap());
    assert!(StandardDataset::all_present(&suite.config().datasets_dir));
    assert!(!suite.prepare_datasets().unwrap());

    let mut config = quick_config(dir.path());
    config.regenerate = true;
    assert!(Suite::new(config).prepare_datasets().unwrap());
}

#[test]
fn test_run_covers_every_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let suite = Suite::new(quick_config(dir.path()));

    let runs = suite.run().unwrap();
    let names: Vec<&str> = runs.iter().map(|run| run.dataset.name).collect();
    assert_eq!(
        names,
        vec![
            "appointments_100",
            "appointments_100_nearly_sorted",
            "patients_500",
            "inventory_500",
        ]
    );

    for run in &runs {
        assert_eq!(run.results.len(), 3);
        for result in &run.results {
            assert_eq!(result.dataset_type(), run.dataset.kind);
        }
    }

    // Stock runs 500 down to 1: every pair is an inversion.
    let inventory = &runs[3].results;
    assert_eq!(inventory[0].algorithm_name(), "BubbleSort");
    assert_eq!(inventory[0].size(), 500);
    assert_eq!(inventory[0].comparisons(), 124_750);
    assert_eq!(inventory[0].swaps(), 124_750);
    assert_eq!(inventory[2].algorithm_name(), "SelectionSort");
    assert_eq!(inventory[2].swaps(), 250);
}

#[test]
fn test_run_honors_algorithm_selection() {
    let dir = tempfile::tempdir().unwrap();
    let config = quick_config(dir.path()).with_algorithms([Algorithm::Selection]);

    let runs = Suite::new(config).run().unwrap();
    assert!(runs
        .iter()
        .all(|run| run.results.len() == 1 && run.results[0].algorithm_name() == "SelectionSort"));
}

#[test]
fn test_invalid_plan_fails_before_generation() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = quick_config(dir.path());
    config.trials.warmup_count = None;

    let err = Suite::new(config).run().unwrap_err();
    assert!(matches!(
        err,
        SuiteError::Benchmark(BenchmarkError::InvalidTrialPlan {
            trial_count: 2,
            warmup_count: 3,
        })
    ));
    assert!(!dir.path().join("datasets").exists());
}

#[test]
fn test_corrupt_dataset_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let suite = Suite::new(quick_config(dir.path()));
    suite.prepare_datasets().unwrap();

    let path = StandardDataset::PATIENTS.path_in(&suite.config().datasets_dir);
    fs::write(&path, "id;last_name;priority\nPAT-0001;Soto;urgent\n").unwrap();

    let err = suite.run().unwrap_err();
    assert!(matches!(err, SuiteError::Dataset(_)));
    assert!(err.to_string().contains("patients_500.csv"));
}

#[test]
fn test_write_reports() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = quick_config(dir.path()).with_csv_output(dir.path().join("out/results.csv"));
    config.output.markdown = Some(dir.path().join("out/report.md"));
    let suite = Suite::new(config);

    let dataset = reversed(6);
    let runs = vec![suite
        .run_dataset(suite.benchmark_config(), StandardDataset::INVENTORY_REVERSED, &dataset, &|x: &i32| *x)
        .unwrap()];

    let written = suite.write_reports(&runs).unwrap();
    assert_eq!(written.len(), 2);

    let csv = fs::read_to_string(dir.path().join("out/results.csv")).unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines[0], CsvExporter::HEADER);
    assert_eq!(lines.len(), 4);
    assert!(lines[1].starts_with("BubbleSort;inventory_500;inventory;6;15;15;"));

    let md = fs::read_to_string(dir.path().join("out/report.md")).unwrap();
    assert!(md.starts_with("# SortBench results"));
}

#[test]
fn test_write_reports_without_outputs_is_noop() {
    let suite = Suite::new(SuiteConfig::default());
    assert!(suite.write_reports(&[]).unwrap().is_empty());
}
