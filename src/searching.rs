//! Search drivers: binary search over a sorted copy, and search in a
//! sorted-then-rotated sequence.

use crate::primitives::{binary_probe, rotated_probe};
use crate::sorting::merge_sort;
use serde::{Deserialize, Serialize};

/// Binary search result.
///
/// `position` indexes into `sorted`, not into the caller's input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortedSearch<T> {
    pub sorted: Vec<T>,
    pub position: Option<usize>,
}

/// Sort a copy of `input` ascending, then halve the search interval
/// until `target` is hit or the interval is empty.
pub fn binary_search<T: PartialOrd + Clone>(input: &[T], target: &T) -> SortedSearch<T> {
    let sorted = merge_sort(input);
    let position = binary_probe(&sorted, target);
    SortedSearch { sorted, position }
}

/// Search a sorted-then-rotated sequence without re-sorting it.
///
/// Input that is not a rotation of a sorted sequence may produce a false
/// `None`; it never panics.
#[inline]
pub fn search_rotated<T: PartialOrd>(input: &[T], target: &T) -> Option<usize> {
    rotated_probe(input, target)
}
