//! Keyed record fixtures.
//!
//! # Example
//!
//! ```
//! use sortbench_test::record::{is_permutation_of, TaggedRecord};
//!
//! let before = vec![TaggedRecord::new(0, 5), TaggedRecord::new(1, 3)];
//! let after = vec![TaggedRecord::new(1, 3), TaggedRecord::new(0, 5)];
//! assert!(is_permutation_of(&after, &before));
//! ```

/// A record with a sort key and a tag recording where it started.
///
/// Two records can share a key but never a tag, which lets tests tell equal
/// keys apart when checking that a sort only moved elements around.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct TaggedRecord {
    pub tag: usize,
    pub key: i32,
}

impl TaggedRecord {
    /// Creates a record with the given tag and key.
    pub fn new(tag: usize, key: i32) -> Self {
        Self { tag, key }
    }

    /// Key extractor for use with the sorting algorithms.
    pub fn key(record: &TaggedRecord) -> i32 {
        record.key
    }
}

/// Returns `true` if `sorted` holds exactly the records of `original`.
pub fn is_permutation_of(sorted: &[TaggedRecord], original: &[TaggedRecord]) -> bool {
    if sorted.len() != original.len() {
        return false;
    }
    let mut left: Vec<&TaggedRecord> = sorted.iter().collect();
    let mut right: Vec<&TaggedRecord> = original.iter().collect();
    left.sort_by_key(|r| (r.tag, r.key));
    right.sort_by_key(|r| (r.tag, r.key));
    left == right
}
