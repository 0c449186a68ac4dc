//! Input sequence builders.
//!
//! # Example
//!
//! ```
//! use sortbench_test::sequences::{reversed, sorted, tagged};
//!
//! assert_eq!(sorted(4), vec![1, 2, 3, 4]);
//! assert_eq!(reversed(3), vec![3, 2, 1]);
//! assert_eq!(tagged(&[9, 7])[1].tag, 1);
//! ```

use crate::record::TaggedRecord;

/// Returns `1..=n` in ascending order.
pub fn sorted(n: usize) -> Vec<i32> {
    (1..=n as i32).collect()
}

/// Returns `n..=1` in descending order.
pub fn reversed(n: usize) -> Vec<i32> {
    (1..=n as i32).rev().collect()
}

/// Returns `n` keys drawn from only `distinct` values, interleaved.
pub fn duplicates(n: usize, distinct: usize) -> Vec<i32> {
    let distinct = distinct.max(1);
    (0..n).map(|i| ((i * 7) % distinct) as i32).collect()
}

/// Wraps `keys` in [`TaggedRecord`]s tagged by position.
pub fn tagged(keys: &[i32]) -> Vec<TaggedRecord> {
    keys.iter()
        .enumerate()
        .map(|(tag, &key)| TaggedRecord::new(tag, key))
        .collect()
}
