//! Bubble sort.

use sortbench_core::{KeyExtractor, OperationCounter, SortMetrics};

use super::SortAlgorithm;

/// Bubble sort with early exit.
///
/// Each pass walks the unsorted prefix left to right, exchanging neighbours
/// whose keys are out of order, so the largest remaining key settles at the
/// end. A pass that performs no exchange proves the slice is sorted and stops
/// the algorithm, which shows up in the comparison count.
///
/// # Example
///
/// ```
/// use sortbench_sort::{BubbleSort, SortAlgorithm};
///
/// // Already sorted: one pass, n - 1 comparisons, no swaps.
/// let mut data = vec![1, 2, 3, 4, 5];
/// let metrics = BubbleSort.sort(&mut data, &|x: &i32| *x);
/// assert_eq!(metrics.comparisons(), 4);
/// assert_eq!(metrics.swaps(), 0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct BubbleSort;

impl SortAlgorithm for BubbleSort {
    fn name(&self) -> &'static str {
        "BubbleSort"
    }

    fn sort<T, E>(&self, records: &mut [T], extractor: &E) -> SortMetrics
    where
        E: KeyExtractor<T>,
    {
        let n = records.len();
        if n < 2 {
            return SortMetrics::ZERO;
        }

        let mut counter = OperationCounter::new();

        for pass in 0..n - 1 {
            let mut swapped = false;

            for j in 0..n - 1 - pass {
                let left = extractor.extract(&records[j]);
                let right = extractor.extract(&records[j + 1]);
                counter.record_comparison();

                if left > right {
                    records.swap(j, j + 1);
                    counter.record_swap();
                    swapped = true;
                }
            }

            if !swapped {
                break;
            }
        }

        counter.finish()
    }
}
