//! End-to-end checks of the invocation contract.

use dnc_engine::{AlgorithmId, Engine, EngineError, OutcomeValue, Sequence, Value};

fn lcg_values(n: usize, seed: u64, modulus: u64) -> Vec<f64> {
    let mut x = seed;
    (0..n)
        .map(|_| {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            ((x >> 33) % modulus) as f64 - (modulus / 2) as f64
        })
        .collect()
}

fn sorted_values(outcome: &OutcomeValue) -> &[f64] {
    match outcome {
        OutcomeValue::Sorted(Sequence::Numeric(v)) => v,
        other => panic!("expected numeric sorted output, got {:?}", other),
    }
}

fn number(outcome: &OutcomeValue) -> f64 {
    match outcome {
        OutcomeValue::Number(x) => *x,
        other => panic!("expected number, got {:?}", other),
    }
}

const SORTS: [AlgorithmId; 3] = [
    AlgorithmId::MergeSort,
    AlgorithmId::QuickSort,
    AlgorithmId::HeapSort,
];

#[test]
fn sorting_yields_ordered_permutation() {
    let engine = Engine::new();

    for (len, seed) in [(0, 1), (1, 2), (2, 3), (17, 4), (128, 5), (513, 6)] {
        let values = lcg_values(len, seed, 50);
        let input = Sequence::from(values.clone());

        let mut expected = values.clone();
        expected.sort_by(|a, b| a.total_cmp(b));

        for id in SORTS {
            let outcome = engine.execute(id, &input, None, None).unwrap();
            assert_eq!(sorted_values(&outcome.result), &expected[..], "{} len={}", id, len);
            assert_eq!(outcome.original_input, input);
        }
    }
}

#[test]
fn sorting_is_idempotent() {
    let engine = Engine::new();
    let input = Sequence::from(lcg_values(64, 11, 8));

    for id in SORTS {
        let once = engine.execute(id, &input, None, None).unwrap();
        let OutcomeValue::Sorted(sorted) = once.result else {
            panic!("{} did not sort", id);
        };
        let twice = engine.execute(id, &sorted, None, None).unwrap();
        assert_eq!(twice.result, OutcomeValue::Sorted(sorted.clone()));
    }
}

#[test]
fn sorting_text() {
    let engine = Engine::new();
    let input = Sequence::from(vec!["delta", "alpha", "charlie", "bravo", "alpha"]);

    for id in SORTS {
        let outcome = engine.execute(id, &input, None, None).unwrap();
        assert_eq!(
            outcome.result,
            OutcomeValue::Sorted(Sequence::from(vec![
                "alpha", "alpha", "bravo", "charlie", "delta"
            ]))
        );
    }
}

#[test]
fn binary_search_sorts_a_copy() {
    let engine = Engine::new();
    let input = Sequence::from(vec![5.0, 3.0, 1.0, 4.0, 2.0]);

    let outcome = engine
        .execute(AlgorithmId::BinarySearch, &input, None, Some(&Value::Number(4.0)))
        .unwrap();

    assert_eq!(outcome.result, OutcomeValue::Position(Some(3)));
    assert_eq!(outcome.original_input, input);
    assert_eq!(
        outcome.explanation,
        "Target 4 found at index 3 in sorted array: [1, 2, 3, 4, 5]"
    );

    let outcome = engine
        .execute(AlgorithmId::BinarySearch, &input, None, Some(&Value::Number(9.0)))
        .unwrap();
    assert_eq!(outcome.result, OutcomeValue::Position(None));
    assert_eq!(
        outcome.explanation,
        "Target 9 not found in array: [1, 2, 3, 4, 5]"
    );
}

#[test]
fn rotated_search_does_not_resort() {
    let engine = Engine::new();
    let input = Sequence::from(vec![4.0, 5.0, 6.0, 7.0, 0.0, 1.0, 2.0]);

    let outcome = engine
        .execute(AlgorithmId::SearchRotated, &input, None, Some(&Value::Number(0.0)))
        .unwrap();
    assert_eq!(outcome.result, OutcomeValue::Position(Some(4)));
    assert_eq!(outcome.explanation, "Target 0 found at index 4");

    let outcome = engine
        .execute(AlgorithmId::SearchRotated, &input, None, Some(&Value::Number(3.0)))
        .unwrap();
    assert_eq!(outcome.result, OutcomeValue::Position(None));
    assert_eq!(outcome.explanation, "Target 3 not found in rotated array");
}

#[test]
fn search_edge_cases() {
    let engine = Engine::new();
    let target = Value::Number(1.0);

    for id in [AlgorithmId::BinarySearch, AlgorithmId::SearchRotated] {
        let empty = Sequence::Numeric(vec![]);
        let outcome = engine.execute(id, &empty, None, Some(&target)).unwrap();
        assert_eq!(outcome.result, OutcomeValue::Position(None));

        let single = Sequence::from(vec![1.0]);
        let outcome = engine.execute(id, &single, None, Some(&target)).unwrap();
        assert_eq!(outcome.result, OutcomeValue::Position(Some(0)));

        let err = engine.execute(id, &single, None, None).unwrap_err();
        assert!(matches!(err, EngineError::MissingTarget { .. }));
    }
}

#[test]
fn majority_element_reports_count() {
    let engine = Engine::new();
    let input = Sequence::from(vec![2.0, 2.0, 1.0, 1.0, 1.0, 2.0, 2.0]);

    let outcome = engine
        .execute(AlgorithmId::MajorityElement, &input, None, None)
        .unwrap();

    assert_eq!(outcome.result, OutcomeValue::Element(Some(Value::Number(2.0))));
    assert_eq!(
        outcome.explanation,
        "Majority element is 2 (appears 5 times out of 7)"
    );
}

#[test]
fn majority_element_absent() {
    let engine = Engine::new();
    let input = Sequence::from(vec!["a", "b", "c", "a", "b"]);

    let outcome = engine
        .execute(AlgorithmId::MajorityElement, &input, None, None)
        .unwrap();

    assert_eq!(outcome.result, OutcomeValue::Element(None));
    assert_eq!(outcome.explanation, "No element appears more than 2 times");
}

#[test]
fn median_one_and_two_inputs() {
    let engine = Engine::new();
    let one_three = Sequence::from(vec![1.0, 3.0]);
    let two = Sequence::from(vec![2.0]);
    let four = Sequence::from(vec![1.0, 2.0, 3.0, 4.0]);

    let m = engine
        .execute(AlgorithmId::MedianSorted, &one_three, None, None)
        .unwrap();
    assert_eq!(number(&m.result), 2.0);

    let m = engine
        .execute(AlgorithmId::MedianSorted, &two, Some(&one_three), None)
        .unwrap();
    assert_eq!(number(&m.result), 2.0);
    assert_eq!(m.explanation, "Median of [2] and [1, 3] is 2");
    assert_eq!(m.original_input, two);

    let m = engine
        .execute(AlgorithmId::MedianSorted, &four, None, None)
        .unwrap();
    assert_eq!(number(&m.result), 2.5);
}

#[test]
fn median_matches_full_sort() {
    let engine = Engine::new();

    for seed in 0..20u64 {
        let mut a = lcg_values(1 + (seed as usize % 7), seed, 30);
        let mut b = lcg_values(seed as usize % 5, seed + 100, 30);
        if seed % 2 == 0 {
            a.sort_by(|x, y| x.total_cmp(y));
            b.sort_by(|x, y| x.total_cmp(y));
        }

        let mut all: Vec<f64> = a.iter().chain(b.iter()).copied().collect();
        all.sort_by(|x, y| x.total_cmp(y));
        let n = all.len();
        let expected = if n % 2 == 0 {
            (all[n / 2 - 1] + all[n / 2]) / 2.0
        } else {
            all[n / 2]
        };

        let outcome = engine
            .execute(
                AlgorithmId::MedianSorted,
                &Sequence::from(a),
                Some(&Sequence::from(b)),
                None,
            )
            .unwrap();
        assert_eq!(number(&outcome.result), expected, "seed {}", seed);
    }
}

#[test]
fn max_subarray_classic() {
    let engine = Engine::new();
    let input = Sequence::from(vec![-2.0, 1.0, -3.0, 4.0, -1.0, 2.0, 1.0, -5.0, 4.0]);

    let outcome = engine
        .execute(AlgorithmId::MaxSubarray, &input, None, None)
        .unwrap();

    assert_eq!(number(&outcome.result), 6.0);
    assert_eq!(
        outcome.explanation,
        "Maximum subarray: [4, -1, 2, 1] with sum = 6"
    );
}

#[test]
fn max_subarray_matches_brute_force() {
    for seed in 0..30u64 {
        let values = lcg_values(1 + seed as usize, seed, 21);

        let mut best = f64::NEG_INFINITY;
        for i in 0..values.len() {
            let mut sum = 0.0;
            for v in &values[i..] {
                sum += v;
                best = best.max(sum);
            }
        }

        let outcome = Engine::new()
            .execute(AlgorithmId::MaxSubarray, &Sequence::from(values), None, None)
            .unwrap();
        assert_eq!(number(&outcome.result), best, "seed {}", seed);
    }
}

#[test]
fn count_inversions_matches_brute_force() {
    let engine = Engine::new();

    for seed in 0..25u64 {
        let values = lcg_values(seed as usize * 3, seed, 12);

        let mut expected = 0u64;
        for i in 0..values.len() {
            for j in (i + 1)..values.len() {
                if values[i] > values[j] {
                    expected += 1;
                }
            }
        }

        let outcome = engine
            .execute(
                AlgorithmId::CountInversions,
                &Sequence::from(values),
                None,
                None,
            )
            .unwrap();
        assert_eq!(outcome.result, OutcomeValue::Count(expected));
        assert_eq!(
            outcome.explanation,
            format!("Total inversions in array: {}", expected)
        );
    }
}

#[test]
fn numeric_only_algorithms_reject_text() {
    let engine = Engine::new();
    let input = Sequence::from(vec!["1", "2"]);

    for id in [AlgorithmId::MedianSorted, AlgorithmId::MaxSubarray] {
        let err = engine.execute(id, &input, None, None).unwrap_err();
        assert!(matches!(err, EngineError::TypeMismatch { .. }), "{}", id);
        assert!(err.is_invalid_argument());
    }
}

#[test]
fn every_listed_algorithm_is_executable_by_key() {
    let engine = Engine::new();
    let input = Sequence::from(vec![3.0, 1.0, 2.0]);
    let target = Value::Number(2.0);

    for summary in engine.list_algorithms() {
        let outcome = engine
            .execute_key(summary.id.key(), &input, None, Some(&target))
            .unwrap();
        assert!(!outcome.explanation.is_empty());
        assert_eq!(outcome.original_input, input);
    }
}
