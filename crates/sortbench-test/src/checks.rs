//! Assertion helpers shared by sort and benchmark tests.

use std::fmt::Debug;

use sortbench_core::{is_sorted_by_key, KeyExtractor};

/// Panics with the offending slice unless `records` is in non-decreasing key
/// order.
pub fn assert_sorted_by<T, E>(records: &[T], extractor: &E)
where
    T: Debug,
    E: KeyExtractor<T>,
{
    assert!(
        is_sorted_by_key(records, extractor),
        "records are not sorted by key: {:?}",
        records
    );
}

/// Counts pairs `i < j` whose keys are strictly out of order.
pub fn inversions<T, E>(records: &[T], extractor: &E) -> u64
where
    E: KeyExtractor<T>,
{
    let keys: Vec<E::Key> = records.iter().map(|r| extractor.extract(r)).collect();
    let mut count = 0;
    for i in 0..keys.len() {
        for j in i + 1..keys.len() {
            if keys[i] > keys[j] {
                count += 1;
            }
        }
    }
    count
}
