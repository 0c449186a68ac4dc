//! Tests for the benchmark runner.

use std::cell::Cell;

use super::*;
use crate::error::BenchmarkError;
use sortbench_sort::{Algorithm, BubbleSort, InsertionSort, SelectionSort};
use sortbench_test::{reversed, sorted, tagged, TaggedRecord};

#[test]
fn test_original_dataset_is_untouched() {
    let original = tagged(&[9, 4, 7, 1, 8, 2]);
    let snapshot = original.clone();

    for algorithm in Algorithm::ALL {
        let result = run_benchmark(
            algorithm.name(),
            "tagged",
            "records",
            &original,
            &TaggedRecord::key,
            algorithm,
        );
        assert_eq!(result.size(), original.len());
    }

    assert_eq!(original, snapshot);
}

#[test]
fn test_counts_are_reproducible() {
    let dataset = vec![5, 3, 8, 1, 9, 2, 7, 4, 6, 0];
    let by_value = |x: &i32| *x;

    for algorithm in Algorithm::ALL {
        let first = run_benchmark("x", "d", "t", &dataset, &by_value, algorithm);
        let second = run_benchmark("x", "d", "t", &dataset, &by_value, algorithm);
        assert_eq!(first.comparisons(), second.comparisons());
        assert_eq!(first.swaps(), second.swaps());
        assert_eq!(first.size(), second.size());
    }
}

#[test]
fn test_counts_equal_single_sort_counts() {
    // Every trial does the same work, so the mean equals one trial's counts.
    let dataset = reversed(12);
    let by_value = |x: &i32| *x;

    let mut copy = dataset.clone();
    let single = InsertionSort.sort(&mut copy, &by_value);

    let result = run_benchmark("InsertionSort", "rev", "ints", &dataset, &by_value, InsertionSort);
    assert_eq!(result.comparisons(), single.comparisons());
    assert_eq!(result.swaps(), single.swaps());
}

#[test]
fn test_sorted_input_reports_one_bubble_pass() {
    let dataset = sorted(5);
    let result = run_benchmark("BubbleSort", "sorted_5", "ints", &dataset, &|x: &i32| *x, BubbleSort);

    assert_eq!(result.comparisons(), 4);
    assert_eq!(result.swaps(), 0);
    assert_eq!(result.algorithm_name(), "BubbleSort");
    assert_eq!(result.dataset_name(), "sorted_5");
    assert_eq!(result.dataset_type(), "ints");
}

#[test]
fn test_default_plan_runs_ten_trials() {
    let calls = Cell::new(0u64);
    let counting = |x: &i32| {
        calls.set(calls.get() + 1);
        *x
    };

    // Sorted input: bubble sort makes 4 comparisons, two extractions each.
    let dataset = sorted(5);
    run_benchmark("BubbleSort", "d", "t", &dataset, &counting, BubbleSort);

    assert_eq!(calls.get(), 10 * 4 * 2);
}

#[test]
fn test_custom_plan_trial_count() {
    let dataset = reversed(4);
    let by_value = |x: &i32| *x;
    let benchmark = Benchmark::new(
        BenchmarkConfig::new().with_trial_count(6).with_warmup_count(2),
        "SelectionSort",
        "d",
        "t",
        &dataset,
        &by_value,
        SelectionSort,
    );

    let samples = benchmark.trials();
    assert_eq!(samples.len(), 6);
    for (i, sample) in samples.iter().enumerate() {
        assert_eq!(sample.trial_index, i);
        assert_eq!(sample.metrics.comparisons(), 6);
        assert_eq!(sample.metrics.swaps(), 2);
    }
    assert_eq!(benchmark.config().measured_count(), 4);
}

#[test]
fn test_invalid_plan_is_rejected() {
    let dataset = sorted(3);
    let by_value = |x: &i32| *x;
    let benchmark = Benchmark::new(
        BenchmarkConfig::new().with_trial_count(3).with_warmup_count(3),
        "BubbleSort",
        "d",
        "t",
        &dataset,
        &by_value,
        BubbleSort,
    );

    match benchmark.run() {
        Err(BenchmarkError::InvalidTrialPlan {
            trial_count,
            warmup_count,
        }) => {
            assert_eq!(trial_count, 3);
            assert_eq!(warmup_count, 3);
        }
        other => panic!("expected InvalidTrialPlan, got {:?}", other),
    }
}

#[test]
fn test_empty_and_single_datasets() {
    let by_value = |x: &i32| *x;
    for algorithm in Algorithm::ALL {
        let empty: Vec<i32> = Vec::new();
        let result = run_benchmark("a", "empty", "t", &empty, &by_value, algorithm);
        assert_eq!(result.size(), 0);
        assert_eq!(result.comparisons(), 0);
        assert_eq!(result.swaps(), 0);

        let single = vec![1];
        let result = run_benchmark("a", "single", "t", &single, &by_value, algorithm);
        assert_eq!(result.size(), 1);
        assert_eq!(result.comparisons(), 0);
        assert_eq!(result.swaps(), 0);
    }
}

#[test]
#[should_panic(expected = "extractor failed")]
fn test_panicking_extractor_aborts_benchmark() {
    let dataset = vec![1, 2, 3];
    let failing = |_: &i32| -> i32 { panic!("extractor failed") };
    run_benchmark("BubbleSort", "d", "t", &dataset, &failing, BubbleSort);
}
