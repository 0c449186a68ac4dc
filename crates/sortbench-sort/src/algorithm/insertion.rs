//! Insertion sort.

use sortbench_core::{KeyExtractor, OperationCounter, SortMetrics};

use super::SortAlgorithm;

/// Insertion sort counting shifts as swaps.
///
/// For every position `i` the element there is held aside and the sorted
/// prefix is scanned backwards while its keys are greater than the held key.
/// Each of those elements moves one slot right. A shift is a single move
/// rather than an exchange, but it is reported as one swap. The comparison
/// that stops the scan is counted too.
///
/// # Example
///
/// ```
/// use sortbench_sort::{InsertionSort, SortAlgorithm};
///
/// let mut data = vec![3, 2, 1];
/// let metrics = InsertionSort.sort(&mut data, &|x: &i32| *x);
/// assert_eq!(data, vec![1, 2, 3]);
/// assert_eq!(metrics.comparisons(), 3);
/// assert_eq!(metrics.swaps(), 3);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct InsertionSort;

impl SortAlgorithm for InsertionSort {
    fn name(&self) -> &'static str {
        "InsertionSort"
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

        for i in 1..n {
            let held = extractor.extract(&records[i]);
            let mut slot = i;

            while slot > 0 {
                counter.record_comparison();
                if extractor.extract(&records[slot - 1]) > held {
                    counter.record_swap();
                    slot -= 1;
                } else {
                    break;
                }
            }

            // Moves records[slot..i] one position right and drops the held
            // element into the gap.
            records[slot..=i].rotate_right(1);
        }

        counter.finish()
    }
}
