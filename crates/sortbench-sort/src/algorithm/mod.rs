//! Sorting algorithms.

mod bubble;
mod insertion;
mod selection;

use std::fmt;
use std::str::FromStr;

use sortbench_core::{KeyExtractor, SortBenchError, SortMetrics};

pub use bubble::BubbleSort;
pub use insertion::InsertionSort;
pub use selection::SelectionSort;

/// An instrumented in-place comparison sort.
///
/// Implementations sort `records` ascending by the key `extractor` yields and
/// report exactly the comparisons and swaps they performed. Slices with fewer
/// than two elements are left untouched and report [`SortMetrics::ZERO`].
///
/// The trait is generic over the record type per call, so one algorithm value
/// sorts any record shape.
pub trait SortAlgorithm {
    /// Returns the display name of the algorithm (e.g. `"BubbleSort"`).
    fn name(&self) -> &'static str;

    /// Sorts `records` in place and returns the operation counts.
    fn sort<T, E>(&self, records: &mut [T], extractor: &E) -> SortMetrics
    where
        E: KeyExtractor<T>;
}

impl<A: SortAlgorithm + ?Sized> SortAlgorithm for &A {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn sort<T, E>(&self, records: &mut [T], extractor: &E) -> SortMetrics
    where
        E: KeyExtractor<T>,
    {
        (**self).sort(records, extractor)
    }
}

/// Runtime selection of one of the built-in algorithms.
///
/// Used where the algorithm comes from configuration rather than code.
///
/// # Example
///
/// ```
/// use sortbench_sort::{Algorithm, SortAlgorithm};
///
/// let algorithm: Algorithm = "insertion_sort".parse().unwrap();
/// assert_eq!(algorithm, Algorithm::Insertion);
/// assert_eq!(algorithm.name(), "InsertionSort");
///
/// let mut data = vec![3, 1, 2];
/// let metrics = algorithm.sort(&mut data, &|x: &i32| *x);
/// assert_eq!(data, vec![1, 2, 3]);
/// assert_eq!(metrics.swaps(), 2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Algorithm {
    /// [`BubbleSort`].
    #[cfg_attr(feature = "serde", serde(alias = "bubble_sort"))]
    Bubble,
    /// [`InsertionSort`].
    #[cfg_attr(feature = "serde", serde(alias = "insertion_sort"))]
    Insertion,
    /// [`SelectionSort`].
    #[cfg_attr(feature = "serde", serde(alias = "selection_sort"))]
    Selection,
}

impl Algorithm {
    /// All built-in algorithms, in reporting order.
    pub const ALL: [Algorithm; 3] = [Algorithm::Bubble, Algorithm::Insertion, Algorithm::Selection];
}

impl SortAlgorithm for Algorithm {
    fn name(&self) -> &'static str {
        match self {
            Algorithm::Bubble => BubbleSort.name(),
            Algorithm::Insertion => InsertionSort.name(),
            Algorithm::Selection => SelectionSort.name(),
        }
    }

    fn sort<T, E>(&self, records: &mut [T], extractor: &E) -> SortMetrics
    where
        E: KeyExtractor<T>,
    {
        match self {
            Algorithm::Bubble => BubbleSort.sort(records, extractor),
            Algorithm::Insertion => InsertionSort.sort(records, extractor),
            Algorithm::Selection => SelectionSort.sort(records, extractor),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = SortBenchError;

    /// Accepts `bubble`, `bubble_sort` and `BubbleSort` style names,
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();

        match normalized.as_str() {
            "bubble" | "bubblesort" => Ok(Algorithm::Bubble),
            "insertion" | "insertionsort" => Ok(Algorithm::Insertion),
            "selection" | "selectionsort" => Ok(Algorithm::Selection),
            _ => Err(SortBenchError::UnknownAlgorithm(s.to_string())),
        }
    }
}
