//! Selection sort.

use sortbench_core::{KeyExtractor, OperationCounter, SortMetrics};

use super::SortAlgorithm;

/// Selection sort with at most one exchange per position.
///
/// For each position `i` the suffix after it is scanned for the smallest key;
/// only a strictly smaller key replaces the running minimum, so ties keep the
/// earliest candidate. One exchange puts the minimum in place, and none is
/// made when it is already there.
///
/// # Example
///
/// ```
/// use sortbench_sort::{SelectionSort, SortAlgorithm};
///
/// let mut data = vec![3, 2, 1];
/// let metrics = SelectionSort.sort(&mut data, &|x: &i32| *x);
/// assert_eq!(data, vec![1, 2, 3]);
/// assert_eq!(metrics.comparisons(), 3);
/// assert_eq!(metrics.swaps(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionSort;

impl SortAlgorithm for SelectionSort {
    fn name(&self) -> &'static str {
        "SelectionSort"
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

        for i in 0..n - 1 {
            let mut min_index = i;
            let mut min_key = extractor.extract(&records[i]);

            for j in i + 1..n {
                let key = extractor.extract(&records[j]);
                counter.record_comparison();

                if key < min_key {
                    min_index = j;
                    min_key = key;
                }
            }

            if min_index != i {
                records.swap(i, min_index);
                counter.record_swap();
            }
        }

        counter.finish()
    }
}
