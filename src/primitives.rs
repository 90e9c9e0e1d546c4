//! Primitive routines shared by the algorithm drivers.
//!
//! Each primitive works on an explicit range of an explicit buffer:
//! - Merge (stable, left-biased)
//! - Lomuto partition
//! - Max-heapify
//! - Binary probe (plain and rotated)
//! - Majority merge
//! - Kadane scan
//! - Inversion-counting merge
//!
//! Ranges are inclusive `[left, right]` unless stated otherwise.
//! Comparisons only use `PartialOrd`, so unordered values (NaN) never
//! panic; they just lose every comparison.

/// Merge the sorted runs `arr[left..=mid]` and `arr[mid+1..=right]`.
///
/// Ties take from the left run (`l <= r`), which keeps the merge stable.
pub fn merge<T: PartialOrd + Clone>(arr: &mut [T], left: usize, mid: usize, right: usize) {
    let left_run = arr[left..=mid].to_vec();
    let right_run = arr[mid + 1..=right].to_vec();

    let (mut i, mut j, mut k) = (0, 0, left);

    while i < left_run.len() && j < right_run.len() {
        if left_run[i] <= right_run[j] {
            arr[k] = left_run[i].clone();
            i += 1;
        } else {
            arr[k] = right_run[j].clone();
            j += 1;
        }
        k += 1;
    }

    for item in left_run[i..].iter().chain(right_run[j..].iter()) {
        arr[k] = item.clone();
        k += 1;
    }
}

/// Merge `arr[left..=mid]` and `arr[mid+1..=right]` through `temp`,
/// returning the number of inversions crossing the two runs.
///
/// Every time the right run wins, each still-unconsumed element of the
/// left run (`mid - i + 1` of them) forms an inversion with it.
pub fn merge_and_count<T: PartialOrd + Clone>(
    arr: &mut [T],
    temp: &mut Vec<T>,
    left: usize,
    mid: usize,
    right: usize,
) -> u64 {
    temp.clear();

    let (mut i, mut j) = (left, mid + 1);
    let mut inversions = 0u64;

    while i <= mid && j <= right {
        if arr[i] <= arr[j] {
            temp.push(arr[i].clone());
            i += 1;
        } else {
            temp.push(arr[j].clone());
            inversions += (mid - i + 1) as u64;
            j += 1;
        }
    }

    temp.extend_from_slice(&arr[i..=mid]);
    temp.extend_from_slice(&arr[j..=right]);

    arr[left..=right].clone_from_slice(temp);
    inversions
}

/// Lomuto partition of `arr[low..=high]` around `arr[high]`.
///
/// Elements strictly less than the pivot end up before the returned
/// index; the pivot itself lands on it.
pub fn partition<T: PartialOrd>(arr: &mut [T], low: usize, high: usize) -> usize {
    let mut boundary = low;

    for j in low..high {
        if arr[j] < arr[high] {
            arr.swap(boundary, j);
            boundary += 1;
        }
    }

    arr.swap(boundary, high);
    boundary
}

/// Restore the max-heap property for the subtree rooted at `i`,
/// considering only the first `n` elements.
pub fn heapify<T: PartialOrd>(arr: &mut [T], n: usize, i: usize) {
    let mut largest = i;
    let l = 2 * i + 1;
    let r = 2 * i + 2;

    if l < n && arr[l] > arr[largest] {
        largest = l;
    }
    if r < n && arr[r] > arr[largest] {
        largest = r;
    }
    if largest != i {
        arr.swap(i, largest);
        heapify(arr, n, largest);
    }
}

/// Classical halving search over an ascending slice.
///
/// The probe midpoint is `(left + right) / 2` over the inclusive window,
/// so with duplicates the reported index is deterministic.
pub fn binary_probe<T: PartialOrd>(sorted: &[T], target: &T) -> Option<usize> {
    // `hi` is one past the inclusive right bound
    let (mut lo, mut hi) = (0usize, sorted.len());

    while lo < hi {
        let mid = (lo + hi - 1) / 2;
        if sorted[mid] == *target {
            return Some(mid);
        } else if sorted[mid] < *target {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }

    None
}

/// Single-pass search over a sorted-then-rotated slice.
///
/// At each midpoint one of `[left, mid]` or `[mid, right]` is monotonic;
/// the target is looked for there if it fits the half's bounds, otherwise
/// in the other half.
pub fn rotated_probe<T: PartialOrd>(arr: &[T], target: &T) -> Option<usize> {
    let (mut lo, mut hi) = (0usize, arr.len());

    while lo < hi {
        let right = hi - 1;
        let mid = (lo + right) / 2;

        if arr[mid] == *target {
            return Some(mid);
        }

        if arr[lo] <= arr[mid] {
            // left half is monotonic
            if *target >= arr[lo] && *target < arr[mid] {
                hi = mid;
            } else {
                lo = mid + 1;
            }
        } else if *target > arr[mid] && *target <= arr[right] {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }

    None
}

/// Number of occurrences of `value` in `arr[left..=right]`.
#[inline]
pub fn count_in_range<T: PartialEq>(arr: &[T], left: usize, right: usize, value: &T) -> usize {
    arr[left..=right].iter().filter(|x| *x == value).count()
}

/// Combine the majority candidates of two adjacent halves of
/// `arr[left..=right]`.
///
/// Equal candidates win outright. Otherwise the left candidate is kept
/// only if it occurs strictly more often in the combined range.
pub fn majority_merge<'a, T: PartialEq>(
    arr: &[T],
    left: usize,
    right: usize,
    left_candidate: &'a T,
    right_candidate: &'a T,
) -> &'a T {
    if left_candidate == right_candidate {
        return left_candidate;
    }

    let left_count = count_in_range(arr, left, right, left_candidate);
    let right_count = count_in_range(arr, left, right, right_candidate);

    if left_count > right_count {
        left_candidate
    } else {
        right_candidate
    }
}

/// Best contiguous run found by [`kadane_scan`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct KadaneRun {
    pub sum: f64,
    pub start: usize,
    pub end: usize,
}

/// Kadane's maximum-subarray scan.
///
/// Returns `None` for an empty slice. The global best only moves on a
/// strict improvement, so the leftmost optimal run is reported.
pub fn kadane_scan(arr: &[f64]) -> Option<KadaneRun> {
    let first = *arr.first()?;

    let mut max_current = first;
    let mut best = KadaneRun {
        sum: first,
        start: 0,
        end: 0,
    };
    let mut run_start = 0;

    for (i, &x) in arr.iter().enumerate().skip(1) {
        if x > max_current + x {
            max_current = x;
            run_start = i;
        } else {
            max_current += x;
        }

        if max_current > best.sum {
            best = KadaneRun {
                sum: max_current,
                start: run_start,
                end: i,
            };
        }
    }

    Some(best)
}

/// Check that a slice is in non-decreasing order.
///
/// Any unordered pair (NaN) makes the slice count as unsorted.
#[inline]
pub fn is_sorted<T: PartialOrd>(arr: &[T]) -> bool {
    arr.windows(2).all(|w| w[0] <= w[1])
}

/// Middle element (odd length) or mean of the two middle elements
/// (even length) of an ascending slice.
#[inline]
pub fn middle_of_sorted(sorted: &[f64]) -> Option<f64> {
    let n = sorted.len();
    if n == 0 {
        return None;
    }

    if n % 2 == 0 {
        Some((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
    } else {
        Some(sorted[n / 2])
    }
}

/// Median of two ascending slices in O(log min(m, n)).
///
/// Binary-searches the cut of `a` that a stable merge of `a` then `b`
/// would produce: `a`'s left side is `<=` `b`'s right side, and `b`'s
/// left side is strictly `<` `a`'s right side. Equal elements are picked
/// in merge order, so the result is bit-for-bit [`middle_of_sorted`] over
/// the merged slices, signed zeros included.
pub fn median_of_two_sorted(a: &[f64], b: &[f64]) -> Option<f64> {
    let total = a.len() + b.len();
    if a.is_empty() {
        return middle_of_sorted(b);
    }
    if b.is_empty() {
        return middle_of_sorted(a);
    }

    let half = (total + 1) / 2;
    let (mut lo, mut hi) = (half.saturating_sub(b.len()), a.len().min(half));

    // `None` on the left stands for -inf, on the right for +inf
    let left = |s: &[f64], cut: usize| if cut == 0 { None } else { Some(s[cut - 1]) };
    let right = |s: &[f64], cut: usize| s.get(cut).copied();

    while lo <= hi {
        let cut_a = lo + (hi - lo) / 2;
        let cut_b = half - cut_a;

        let (a_left, a_right) = (left(a, cut_a), right(a, cut_a));
        let (b_left, b_right) = (left(b, cut_b), right(b, cut_b));

        match (a_left, b_right) {
            (Some(x), Some(y)) if x > y => {
                if cut_a == 0 {
                    break;
                }
                hi = cut_a - 1;
                continue;
            }
            _ => {}
        }
        match (b_left, a_right) {
            (Some(x), Some(y)) if x >= y => {
                lo = cut_a + 1;
                continue;
            }
            _ => {}
        }

        // Later of the two in merge order: `b` wins ties
        let left_max = match (a_left, b_left) {
            (Some(x), Some(y)) => {
                if y < x {
                    x
                } else {
                    y
                }
            }
            (Some(x), None) | (None, Some(x)) => x,
            (None, None) => return None,
        };
        if total % 2 == 1 {
            return Some(left_max);
        }

        // Earlier of the two in merge order: `a` wins ties
        let right_min = match (a_right, b_right) {
            (Some(x), Some(y)) => {
                if x <= y {
                    x
                } else {
                    y
                }
            }
            (Some(x), None) | (None, Some(x)) => x,
            (None, None) => return None,
        };
        return Some((left_max + right_min) / 2.0);
    }

    // Only reachable when the inputs were not actually sorted
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() < eps
    }

    #[test]
    fn test_merge_is_left_biased() {
        // (key, tag): equal keys must keep the left run's element first
        #[derive(Debug, Clone)]
        struct Tagged(i32, char);
        impl PartialEq for Tagged {
            fn eq(&self, other: &Self) -> bool {
                self.0 == other.0
            }
        }
        impl PartialOrd for Tagged {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                self.0.partial_cmp(&other.0)
            }
        }

        let mut arr = vec![Tagged(1, 'a'), Tagged(3, 'b'), Tagged(1, 'c'), Tagged(3, 'd')];
        merge(&mut arr, 0, 1, 3);

        let tags: Vec<char> = arr.iter().map(|t| t.1).collect();
        assert_eq!(tags, vec!['a', 'c', 'b', 'd']);
    }

    #[test]
    fn test_merge_and_count() {
        let mut arr = vec![2, 4, 1, 3];
        let mut temp = Vec::new();

        let inv = merge_and_count(&mut arr, &mut temp, 0, 1, 3);

        assert_eq!(arr, vec![1, 2, 3, 4]);
        // (2,1), (4,1), (4,3)
        assert_eq!(inv, 3);
    }

    #[test]
    fn test_partition_places_pivot() {
        let mut arr = vec![7, 2, 9, 1, 5];
        let p = partition(&mut arr, 0, 4);

        assert_eq!(arr[p], 5);
        assert!(arr[..p].iter().all(|&x| x < 5));
        assert!(arr[p + 1..].iter().all(|&x| x >= 5));
    }

    #[test]
    fn test_heapify_promotes_larger_child() {
        let mut arr = vec![1, 9, 4];
        heapify(&mut arr, 3, 0);
        assert_eq!(arr, vec![9, 1, 4]);
    }

    #[test]
    fn test_binary_probe() {
        let sorted = vec![1, 2, 3, 4, 5];
        assert_eq!(binary_probe(&sorted, &4), Some(3));
        assert_eq!(binary_probe(&sorted, &1), Some(0));
        assert_eq!(binary_probe(&sorted, &6), None);
        assert_eq!(binary_probe::<i32>(&[], &1), None);
    }

    #[test]
    fn test_rotated_probe() {
        let arr = vec![4, 5, 6, 7, 0, 1, 2];
        assert_eq!(rotated_probe(&arr, &0), Some(4));
        assert_eq!(rotated_probe(&arr, &7), Some(3));
        assert_eq!(rotated_probe(&arr, &3), None);
        assert_eq!(rotated_probe(&[1], &1), Some(0));
    }

    #[test]
    fn test_majority_merge_tie_goes_right() {
        let arr = vec![1, 2];
        assert_eq!(*majority_merge(&arr, 0, 1, &arr[0], &arr[1]), 2);

        let arr = vec![1, 1, 2];
        assert_eq!(*majority_merge(&arr, 0, 2, &arr[0], &arr[2]), 1);
    }

    #[test]
    fn test_kadane_scan() {
        let arr = vec![-2.0, 1.0, -3.0, 4.0, -1.0, 2.0, 1.0, -5.0, 4.0];
        let run = kadane_scan(&arr).unwrap();

        assert!(approx_eq(run.sum, 6.0, 1e-12));
        assert_eq!((run.start, run.end), (3, 6));
        assert!(kadane_scan(&[]).is_none());
    }

    #[test]
    fn test_kadane_all_negative() {
        let run = kadane_scan(&[-3.0, -1.0, -2.0]).unwrap();
        assert!(approx_eq(run.sum, -1.0, 1e-12));
        assert_eq!((run.start, run.end), (1, 1));
    }

    #[test]
    fn test_median_of_two_sorted() {
        assert!(approx_eq(median_of_two_sorted(&[2.0], &[1.0, 3.0]).unwrap(), 2.0, 1e-12));
        assert!(approx_eq(
            median_of_two_sorted(&[1.0, 2.0], &[3.0, 4.0]).unwrap(),
            2.5,
            1e-12
        ));
        assert!(approx_eq(median_of_two_sorted(&[], &[1.0, 3.0]).unwrap(), 2.0, 1e-12));
        assert!(median_of_two_sorted(&[], &[]).is_none());
    }

    #[test]
    fn test_median_of_two_sorted_keeps_merge_order_on_ties() {
        use crate::sorting::merge_sort;

        let cases: [(&[f64], &[f64]); 6] = [
            (&[0.0], &[-0.0, 5.0]),
            (&[0.0, 0.0], &[-0.0]),
            (&[-0.0], &[0.0, 0.0]),
            (&[-0.0, 0.0], &[0.0, -0.0]),
            (&[0.0, 0.0], &[-0.0, -0.0]),
            (&[-1.0, 0.0, 3.0], &[-0.0, -0.0, 0.0, 2.0]),
        ];

        for (a, b) in cases {
            let merged: Vec<f64> = a.iter().chain(b.iter()).copied().collect();
            let expected = middle_of_sorted(&merge_sort(&merged)).unwrap();
            let got = median_of_two_sorted(a, b).unwrap();
            assert_eq!(got.to_bits(), expected.to_bits(), "{:?} {:?}", a, b);
        }

        assert_eq!(
            median_of_two_sorted(&[0.0], &[-0.0, 5.0]).unwrap().to_bits(),
            (-0.0f64).to_bits()
        );
    }

    #[test]
    fn test_is_sorted() {
        assert!(is_sorted::<f64>(&[]));
        assert!(is_sorted(&[1.0, 1.0, 2.0]));
        assert!(!is_sorted(&[2.0, 1.0]));
        assert!(!is_sorted(&[1.0, f64::NAN, 2.0]));
    }
}
