//! Key extraction.
//!
//! Sorting algorithms never look at a record directly. They ask a
//! [`KeyExtractor`] for an orderable key and compare those keys instead, so the
//! same algorithm sorts appointments by timestamp, patients by priority and
//! inventory items by stock without the records sharing any common type.

/// Maps a record to the key it is ordered by.
///
/// Any `Fn(&T) -> K` closure or function with `K: Ord` is a key extractor, so
/// call sites rarely implement this trait by hand.
///
/// The extractor must be pure: the same record always yields the same key and
/// extraction has no observable side effects. Sorting correctness and the
/// reproducibility of comparison/swap counts rely on it; it is not checked.
///
/// # Example
///
/// ```
/// use sortbench_core::KeyExtractor;
///
/// struct Item {
///     stock: i32,
/// }
///
/// let by_stock = |item: &Item| item.stock;
/// assert_eq!(by_stock.extract(&Item { stock: 7 }), 7);
/// ```
pub trait KeyExtractor<T: ?Sized> {
    /// The totally ordered key type.
    type Key: Ord;

    /// Extracts the ordering key from `record`.
    fn extract(&self, record: &T) -> Self::Key;
}

impl<T, K, F> KeyExtractor<T> for F
where
    T: ?Sized,
    K: Ord,
    F: Fn(&T) -> K,
{
    type Key = K;

    #[inline]
    fn extract(&self, record: &T) -> K {
        self(record)
    }
}

/// Returns `true` if every adjacent pair of `records` is in non-decreasing key
/// order.
///
/// Empty and single-element slices are sorted.
///
/// # Example
///
/// ```
/// use sortbench_core::is_sorted_by_key;
///
/// let identity = |x: &i32| *x;
/// assert!(is_sorted_by_key(&[1, 2, 2, 5], &identity));
/// assert!(!is_sorted_by_key(&[3, 1], &identity));
/// assert!(is_sorted_by_key::<i32, _>(&[], &identity));
/// ```
pub fn is_sorted_by_key<T, E>(records: &[T], extractor: &E) -> bool
where
    E: KeyExtractor<T>,
{
    records
        .windows(2)
        .all(|pair| extractor.extract(&pair[0]) <= extractor.extract(&pair[1]))
}
