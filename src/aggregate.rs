//! Aggregate and statistical drivers.
//!
//! - Majority element (divide and conquer with a final verification)
//! - Median of one or two inputs
//! - Maximum subarray (Kadane)
//! - Inversion count (augmented merge sort)

use crate::primitives::{
    is_sorted, kadane_scan, majority_merge, median_of_two_sorted, merge_and_count,
    middle_of_sorted,
};
use crate::sorting::merge_sort;
use serde::{Deserialize, Serialize};

/// Majority analysis of a sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Majority<T> {
    /// Candidate surviving the recursion
    pub candidate: T,
    /// Occurrences of the candidate in the whole sequence
    pub count: usize,
    /// Length of the sequence
    pub total: usize,
}

impl<T> Majority<T> {
    /// True when the candidate occurs more than `total / 2` times
    #[inline]
    pub fn is_majority(&self) -> bool {
        2 * self.count > self.total
    }

    /// The verified majority element, if any
    pub fn element(&self) -> Option<&T> {
        if self.is_majority() {
            Some(&self.candidate)
        } else {
            None
        }
    }
}

/// Find the majority candidate by divide and conquer, then count it over
/// the whole sequence. Returns `None` only for empty input.
pub fn majority_element<T: PartialEq + Clone>(input: &[T]) -> Option<Majority<T>> {
    if input.is_empty() {
        return None;
    }

    let candidate = find_majority(input, 0, input.len() - 1).clone();
    let count = input.iter().filter(|x| **x == candidate).count();

    Some(Majority {
        candidate,
        count,
        total: input.len(),
    })
}

fn find_majority<T: PartialEq>(arr: &[T], left: usize, right: usize) -> &T {
    if left == right {
        return &arr[left];
    }

    let mid = (left + right) / 2;
    let left_majority = find_majority(arr, left, mid);
    let right_majority = find_majority(arr, mid + 1, right);

    majority_merge(arr, left, right, left_majority, right_majority)
}

/// Median of `primary`, or of `primary` and `secondary` combined.
///
/// The result is always the full-sort median. When both inputs already
/// arrive sorted the O(log min(m, n)) partition search is used instead
/// of sorting. Returns `None` when there are no elements at all.
pub fn median(primary: &[f64], secondary: Option<&[f64]>) -> Option<f64> {
    match secondary {
        None => middle_of_sorted(&merge_sort(primary)),
        Some(other) if is_sorted(primary) && is_sorted(other) => {
            median_of_two_sorted(primary, other)
        }
        Some(other) => {
            let mut combined = Vec::with_capacity(primary.len() + other.len());
            combined.extend_from_slice(primary);
            combined.extend_from_slice(other);
            middle_of_sorted(&merge_sort(&combined))
        }
    }
}

/// Maximum-sum contiguous subarray.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaxSubarray {
    pub sum: f64,
    pub start: usize,
    /// Inclusive
    pub end: usize,
}

impl MaxSubarray {
    /// The subarray itself, as a slice of the scanned input
    pub fn slice<'a>(&self, input: &'a [f64]) -> &'a [f64] {
        &input[self.start..=self.end]
    }
}

/// Kadane scan; `None` for empty input.
pub fn max_subarray(input: &[f64]) -> Option<MaxSubarray> {
    kadane_scan(input).map(|run| MaxSubarray {
        sum: run.sum,
        start: run.start,
        end: run.end,
    })
}

/// Number of pairs `i < j` with `input[i] > input[j]`.
pub fn count_inversions<T: PartialOrd + Clone>(input: &[T]) -> u64 {
    if input.len() < 2 {
        return 0;
    }

    let mut work = input.to_vec();
    let mut temp = Vec::with_capacity(work.len());
    let right = work.len() - 1;

    sort_and_count(&mut work, &mut temp, 0, right)
}

fn sort_and_count<T: PartialOrd + Clone>(
    arr: &mut [T],
    temp: &mut Vec<T>,
    left: usize,
    right: usize,
) -> u64 {
    if left >= right {
        return 0;
    }

    let mid = (left + right) / 2;
    let mut inversions = sort_and_count(arr, temp, left, mid);
    inversions += sort_and_count(arr, temp, mid + 1, right);
    inversions += merge_and_count(arr, temp, left, mid, right);
    inversions
}
