//! Sorting drivers: merge sort, quick sort and heap sort.
//!
//! Every driver takes the caller's slice by reference, sorts a working
//! copy and hands that copy back. The caller's data is never touched.

use crate::primitives::{heapify, merge, partition};

/// Stable top-down merge sort.
///
/// O(n log n) in every case, O(n) auxiliary space for the merge buffers.
pub fn merge_sort<T: PartialOrd + Clone>(input: &[T]) -> Vec<T> {
    let mut work = input.to_vec();
    if work.len() > 1 {
        let right = work.len() - 1;
        merge_sort_range(&mut work, 0, right);
    }
    work
}

fn merge_sort_range<T: PartialOrd + Clone>(arr: &mut [T], left: usize, right: usize) {
    if left >= right {
        return;
    }
    let mid = (left + right) / 2;
    merge_sort_range(arr, left, mid);
    merge_sort_range(arr, mid + 1, right);
    merge(arr, left, mid, right);
}

/// In-place quick sort with a Lomuto partition (last element as pivot).
///
/// Not stable. Already-sorted input hits the O(n²) worst case; the
/// recursion always descends into the smaller partition and loops over
/// the larger one, so stack depth stays logarithmic even then.
pub fn quick_sort<T: PartialOrd + Clone>(input: &[T]) -> Vec<T> {
    let mut work = input.to_vec();
    if work.len() > 1 {
        let high = work.len() - 1;
        quick_sort_range(&mut work, 0, high);
    }
    work
}

fn quick_sort_range<T: PartialOrd>(arr: &mut [T], mut low: usize, mut high: usize) {
    while low < high {
        let p = partition(arr, low, high);

        if p - low < high - p {
            if p > low {
                quick_sort_range(arr, low, p - 1);
            }
            low = p + 1;
        } else {
            quick_sort_range(arr, p + 1, high);
            if p == low {
                break;
            }
            high = p - 1;
        }
    }
}

/// In-place heap sort: bottom-up max-heap build, then repeated extraction
/// of the root into the shrinking tail.
pub fn heap_sort<T: PartialOrd + Clone>(input: &[T]) -> Vec<T> {
    let mut work = input.to_vec();
    let n = work.len();

    for i in (0..n / 2).rev() {
        heapify(&mut work, n, i);
    }

    for end in (1..n).rev() {
        work.swap(0, end);
        heapify(&mut work, end, 0);
    }

    work
}
