//! Algorithm registry - the fixed table of descriptors.
//!
//! Each [`AlgorithmId`] maps to exactly one static [`AlgorithmDescriptor`]
//! through an exhaustive `match`; nothing can be registered at runtime.
//! A descriptor's `operation` adapts one typed driver to the uniform
//! [`Outcome`] contract and writes its explanation.

use crate::aggregate::{count_inversions, majority_element, max_subarray, median};
use crate::error::{EngineError, Result};
use crate::searching::{binary_search, search_rotated};
use crate::sequence::{render_list, ElementKind, Outcome, OutcomeValue, Render, Sequence, Value};
use crate::sorting::{heap_sort, merge_sort, quick_sort};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Identifier of one of the nine supported algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AlgorithmId {
    MergeSort,
    QuickSort,
    HeapSort,
    BinarySearch,
    SearchRotated,
    MajorityElement,
    MedianSorted,
    MaxSubarray,
    CountInversions,
}

impl AlgorithmId {
    /// All identifiers, in listing order
    pub const ALL: [AlgorithmId; 9] = [
        AlgorithmId::MergeSort,
        AlgorithmId::QuickSort,
        AlgorithmId::HeapSort,
        AlgorithmId::BinarySearch,
        AlgorithmId::SearchRotated,
        AlgorithmId::MajorityElement,
        AlgorithmId::MedianSorted,
        AlgorithmId::MaxSubarray,
        AlgorithmId::CountInversions,
    ];

    /// Stable external key (`mergeSort`, `quickSort`, ...)
    pub fn key(&self) -> &'static str {
        match self {
            AlgorithmId::MergeSort => "mergeSort",
            AlgorithmId::QuickSort => "quickSort",
            AlgorithmId::HeapSort => "heapSort",
            AlgorithmId::BinarySearch => "binarySearch",
            AlgorithmId::SearchRotated => "searchRotated",
            AlgorithmId::MajorityElement => "majorityElement",
            AlgorithmId::MedianSorted => "medianSorted",
            AlgorithmId::MaxSubarray => "maxSubarray",
            AlgorithmId::CountInversions => "countInversions",
        }
    }

    pub fn descriptor(&self) -> &'static AlgorithmDescriptor {
        match self {
            AlgorithmId::MergeSort => &MERGE_SORT,
            AlgorithmId::QuickSort => &QUICK_SORT,
            AlgorithmId::HeapSort => &HEAP_SORT,
            AlgorithmId::BinarySearch => &BINARY_SEARCH,
            AlgorithmId::SearchRotated => &SEARCH_ROTATED,
            AlgorithmId::MajorityElement => &MAJORITY_ELEMENT,
            AlgorithmId::MedianSorted => &MEDIAN_SORTED,
            AlgorithmId::MaxSubarray => &MAX_SUBARRAY,
            AlgorithmId::CountInversions => &COUNT_INVERSIONS,
        }
    }

    /// Search algorithms need a scalar target
    #[inline]
    pub fn requires_target(&self) -> bool {
        matches!(self, AlgorithmId::BinarySearch | AlgorithmId::SearchRotated)
    }

    /// Algorithms with no meaningful answer for empty input
    #[inline]
    pub fn requires_non_empty(&self) -> bool {
        matches!(
            self,
            AlgorithmId::MajorityElement | AlgorithmId::MedianSorted | AlgorithmId::MaxSubarray
        )
    }

    /// Algorithms doing arithmetic on elements
    #[inline]
    pub fn numeric_only(&self) -> bool {
        matches!(self, AlgorithmId::MedianSorted | AlgorithmId::MaxSubarray)
    }

    /// Only the median accepts a second sequence
    #[inline]
    pub fn accepts_secondary(&self) -> bool {
        matches!(self, AlgorithmId::MedianSorted)
    }
}

impl FromStr for AlgorithmId {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        AlgorithmId::ALL
            .iter()
            .copied()
            .find(|id| id.key() == s)
            .ok_or_else(|| EngineError::UnknownAlgorithm(s.to_string()))
    }
}

impl std::fmt::Display for AlgorithmId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.key())
    }
}

/// Static asymptotic profile of an algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComplexityProfile {
    pub best: &'static str,
    pub average: &'static str,
    pub worst: &'static str,
    pub space: &'static str,
}

/// Borrowed inputs of a single invocation, already validated for
/// presence and length by the engine.
#[derive(Debug, Clone, Copy)]
pub struct Request<'a> {
    pub primary: &'a Sequence,
    pub secondary: Option<&'a Sequence>,
    pub target: Option<&'a Value>,
    /// Decimals for numbers in the explanation
    pub precision: Option<usize>,
}

/// Adapter from a [`Request`] to an [`Outcome`]
pub type Operation = fn(&Request<'_>) -> Result<Outcome>;

/// Everything the engine knows about one algorithm.
pub struct AlgorithmDescriptor {
    pub id: AlgorithmId,
    pub name: &'static str,
    /// One-line summary
    pub description: &'static str,
    /// Longer informational paragraph
    pub info: &'static str,
    pub complexity: ComplexityProfile,
    pub operation: Operation,
}

impl std::fmt::Debug for AlgorithmDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlgorithmDescriptor")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("complexity", &self.complexity)
            .finish_non_exhaustive()
    }
}

const N_LOG_N: ComplexityProfile = ComplexityProfile {
    best: "O(n log n)",
    average: "O(n log n)",
    worst: "O(n log n)",
    space: "O(n)",
};

const LOG_N_SEARCH: ComplexityProfile = ComplexityProfile {
    best: "O(1)",
    average: "O(log n)",
    worst: "O(log n)",
    space: "O(1)",
};

static MERGE_SORT: AlgorithmDescriptor = AlgorithmDescriptor {
    id: AlgorithmId::MergeSort,
    name: "Merge Sort",
    description: "Divides array into halves, recursively sorts them, and merges back together.",
    info: "Merge Sort recursively divides the array into two halves, sorts them independently, \
           and then merges them. This ensures O(n log n) complexity in all cases.",
    complexity: N_LOG_N,
    operation: run_merge_sort,
};

static QUICK_SORT: AlgorithmDescriptor = AlgorithmDescriptor {
    id: AlgorithmId::QuickSort,
    name: "Quick Sort",
    description: "Divides array using a pivot element, recursively sorts partitions.",
    info: "Quick Sort selects a pivot and partitions the array. It's efficient with average \
           O(n log n) but can degrade to O(n²) with poor pivot selection.",
    complexity: ComplexityProfile {
        best: "O(n log n)",
        average: "O(n log n)",
        worst: "O(n²)",
        space: "O(log n)",
    },
    operation: run_quick_sort,
};

static HEAP_SORT: AlgorithmDescriptor = AlgorithmDescriptor {
    id: AlgorithmId::HeapSort,
    name: "Heap Sort",
    description: "Divides array into heap structure, extracts elements from heap to sort \
                  using divide and conquer heap operations.",
    info: "Heap Sort builds a max heap from the array and repeatedly extracts the maximum \
           element. It ensures O(n log n) in all cases with O(1) space complexity.",
    complexity: ComplexityProfile {
        space: "O(1)",
        ..N_LOG_N
    },
    operation: run_heap_sort,
};

static BINARY_SEARCH: AlgorithmDescriptor = AlgorithmDescriptor {
    id: AlgorithmId::BinarySearch,
    name: "Binary Search",
    description: "Searches in a sorted array by dividing the search interval in half.",
    info: "Binary Search works on sorted arrays by repeatedly dividing the search space in \
           half. Search value input is required.",
    complexity: LOG_N_SEARCH,
    operation: run_binary_search,
};

static SEARCH_ROTATED: AlgorithmDescriptor = AlgorithmDescriptor {
    id: AlgorithmId::SearchRotated,
    name: "Search in Rotated Array",
    description: "Searches in a rotated sorted array by identifying which half is sorted.",
    info: "This algorithm searches in a rotated sorted array. It determines which half is \
           properly sorted and eliminates half the search space. Search value input is required.",
    complexity: LOG_N_SEARCH,
    operation: run_search_rotated,
};

static MAJORITY_ELEMENT: AlgorithmDescriptor = AlgorithmDescriptor {
    id: AlgorithmId::MajorityElement,
    name: "Majority Element",
    description: "Finds element appearing more than n/2 times using divide and conquer.",
    info: "Finds an element that appears more than n/2 times in the array using a divide and \
           conquer approach.",
    complexity: ComplexityProfile {
        space: "O(log n)",
        ..N_LOG_N
    },
    operation: run_majority_element,
};

// The advertised profile is the two-sorted-inputs partition search; unsorted
// inputs are sorted first and cost O((m + n) log(m + n)).
static MEDIAN_SORTED: AlgorithmDescriptor = AlgorithmDescriptor {
    id: AlgorithmId::MedianSorted,
    name: "Median of Two Sorted Arrays",
    description: "Finds median of two sorted arrays using binary search and divide & conquer.",
    info: "Uses divide and conquer to find the median value of an array. For even-length \
           arrays, returns the average of two middle elements.",
    complexity: ComplexityProfile {
        best: "O(log(min(m, n)))",
        average: "O(log(min(m, n)))",
        worst: "O(log(min(m, n)))",
        space: "O(1)",
    },
    operation: run_median,
};

static MAX_SUBARRAY: AlgorithmDescriptor = AlgorithmDescriptor {
    id: AlgorithmId::MaxSubarray,
    name: "Maximum Subarray (Kadane's Algorithm)",
    description: "Finds contiguous subarray with largest sum using divide and conquer approach.",
    info: "Also known as Kadane's Algorithm, it finds the contiguous subarray with the maximum \
           sum using dynamic programming approach.",
    complexity: ComplexityProfile {
        best: "O(n)",
        average: "O(n)",
        worst: "O(n)",
        space: "O(1)",
    },
    operation: run_max_subarray,
};

static COUNT_INVERSIONS: AlgorithmDescriptor = AlgorithmDescriptor {
    id: AlgorithmId::CountInversions,
    name: "Count Inversions",
    description: "Counts pairs (i,j) where i<j but arr[i]>arr[j] using merge sort approach.",
    info: "Counts pairs where an earlier element is greater than a later element. Uses merge \
           sort approach to achieve O(n log n).",
    complexity: N_LOG_N,
    operation: run_count_inversions,
};

fn sorted_outcome(
    req: &Request<'_>,
    numeric: fn(&[f64]) -> Vec<f64>,
    text: fn(&[String]) -> Vec<String>,
    explanation: &str,
) -> Result<Outcome> {
    let sorted = match req.primary {
        Sequence::Numeric(v) => Sequence::Numeric(numeric(v)),
        Sequence::Text(v) => Sequence::Text(text(v)),
    };

    Ok(Outcome {
        result: OutcomeValue::Sorted(sorted),
        original_input: req.primary.clone(),
        explanation: explanation.to_string(),
    })
}

fn run_merge_sort(req: &Request<'_>) -> Result<Outcome> {
    sorted_outcome(
        req,
        merge_sort::<f64>,
        merge_sort::<String>,
        "Sorted array using divide and conquer merge sort approach",
    )
}

fn run_quick_sort(req: &Request<'_>) -> Result<Outcome> {
    sorted_outcome(
        req,
        quick_sort::<f64>,
        quick_sort::<String>,
        "Sorted array using divide and conquer quick sort approach with pivot",
    )
}

fn run_heap_sort(req: &Request<'_>) -> Result<Outcome> {
    sorted_outcome(
        req,
        heap_sort::<f64>,
        heap_sort::<String>,
        "Sorted array using heap sort approach with divide and conquer heapify operations",
    )
}

fn required_target<'a>(req: &Request<'a>, algorithm: &'static str) -> Result<&'a Value> {
    req.target
        .ok_or(EngineError::MissingTarget { algorithm })
}

fn target_mismatch(algorithm: &'static str, seq: ElementKind, target: ElementKind) -> EngineError {
    EngineError::TypeMismatch {
        algorithm,
        reason: format!("cannot search a {} sequence for a {} target", seq, target),
    }
}

fn run_binary_search(req: &Request<'_>) -> Result<Outcome> {
    let name = BINARY_SEARCH.name;
    let target = required_target(req, name)?;

    // An empty sequence carries no element type to mismatch against
    let (position, sorted_text) = match (req.primary, target) {
        (seq, _) if seq.is_empty() => (None, "[]".to_string()),
        (Sequence::Numeric(v), Value::Number(t)) => {
            let search = binary_search(v, t);
            (search.position, render_list(&search.sorted, req.precision))
        }
        (Sequence::Text(v), Value::Text(t)) => {
            let search = binary_search(v, t);
            (search.position, render_list(&search.sorted, req.precision))
        }
        (seq, t) => return Err(target_mismatch(name, seq.kind(), t.kind())),
    };

    let shown = target.render(req.precision);
    let explanation = match position {
        Some(p) => format!(
            "Target {} found at index {} in sorted array: {}",
            shown, p, sorted_text
        ),
        None => format!("Target {} not found in array: {}", shown, sorted_text),
    };

    Ok(Outcome {
        result: OutcomeValue::Position(position),
        original_input: req.primary.clone(),
        explanation,
    })
}

fn run_search_rotated(req: &Request<'_>) -> Result<Outcome> {
    let name = SEARCH_ROTATED.name;
    let target = required_target(req, name)?;

    let position = match (req.primary, target) {
        (seq, _) if seq.is_empty() => None,
        (Sequence::Numeric(v), Value::Number(t)) => search_rotated(v, t),
        (Sequence::Text(v), Value::Text(t)) => search_rotated(v, t),
        (seq, t) => return Err(target_mismatch(name, seq.kind(), t.kind())),
    };

    let shown = target.render(req.precision);
    let explanation = match position {
        Some(p) => format!("Target {} found at index {}", shown, p),
        None => format!("Target {} not found in rotated array", shown),
    };

    Ok(Outcome {
        result: OutcomeValue::Position(position),
        original_input: req.primary.clone(),
        explanation,
    })
}

fn run_majority_element(req: &Request<'_>) -> Result<Outcome> {
    let empty = EngineError::EmptyInput {
        algorithm: MAJORITY_ELEMENT.name,
    };

    let majority = match req.primary {
        Sequence::Numeric(v) => majority_element(v)
            .map(|m| (m.element().copied().map(Value::Number), m.count, m.total)),
        Sequence::Text(v) => majority_element(v)
            .map(|m| (m.element().cloned().map(Value::Text), m.count, m.total)),
    };
    let (element, count, total) = majority.ok_or(empty)?;

    let explanation = match &element {
        Some(value) => format!(
            "Majority element is {} (appears {} times out of {})",
            value.render(req.precision),
            count,
            total
        ),
        None => format!("No element appears more than {} times", total / 2),
    };

    Ok(Outcome {
        result: OutcomeValue::Element(element),
        original_input: req.primary.clone(),
        explanation,
    })
}

fn numeric<'a>(seq: &'a Sequence, algorithm: &'static str) -> Result<&'a [f64]> {
    seq.as_numeric().ok_or_else(|| EngineError::TypeMismatch {
        algorithm,
        reason: format!("requires numeric input, got {} elements", seq.kind()),
    })
}

fn run_median(req: &Request<'_>) -> Result<Outcome> {
    let name = MEDIAN_SORTED.name;
    let primary = numeric(req.primary, name)?;
    let secondary = req.secondary.map(|s| numeric(s, name)).transpose()?;

    let value =
        median(primary, secondary).ok_or(EngineError::EmptyInput { algorithm: name })?;

    let shown = value.render(req.precision);
    let explanation = match secondary {
        Some(other) => format!(
            "Median of {} and {} is {}",
            render_list(primary, req.precision),
            render_list(other, req.precision),
            shown
        ),
        None => format!("Median of {} is {}", render_list(primary, req.precision), shown),
    };

    Ok(Outcome {
        result: OutcomeValue::Number(value),
        original_input: req.primary.clone(),
        explanation,
    })
}

fn run_max_subarray(req: &Request<'_>) -> Result<Outcome> {
    let name = MAX_SUBARRAY.name;
    let input = numeric(req.primary, name)?;
    let best = max_subarray(input).ok_or(EngineError::EmptyInput { algorithm: name })?;

    let explanation = format!(
        "Maximum subarray: {} with sum = {}",
        render_list(best.slice(input), req.precision),
        best.sum.render(req.precision)
    );

    Ok(Outcome {
        result: OutcomeValue::Number(best.sum),
        original_input: req.primary.clone(),
        explanation,
    })
}

fn run_count_inversions(req: &Request<'_>) -> Result<Outcome> {
    let count = match req.primary {
        Sequence::Numeric(v) => count_inversions(v),
        Sequence::Text(v) => count_inversions(v),
    };

    Ok(Outcome {
        result: OutcomeValue::Count(count),
        original_input: req.primary.clone(),
        explanation: format!("Total inversions in array: {}", count),
    })
}
