//! End-to-end checks: generation -> sorting -> searching -> suite -> export.

use algolab::bench::{SuiteConfig, run_suite};
use algolab::csv_io::{RESULTS_HEADER, write_results};
use algolab::generator::{ArrayGenerator, GenerationPolicy, SizeMode};
use algolab::sort::bubble_sort;
use algolab::{Value, binary_search, linear_search, merge_sort};

/// Reverse-sorted 100 distinct integers: bubble does exactly 100*99/2
/// comparisons (full passes, no early exit) and the same number of swaps
/// (every pair is an inversion), and the result is the ascending sort.
#[test]
fn bubble_on_reverse_sorted_hundred() {
    let input: Vec<Value> = (1..=100).rev().collect();
    let mut seq = input.clone();
    let counters = bubble_sort(&mut seq, false);

    assert_eq!(counters.comparisons, 4_950);
    assert_eq!(counters.swaps, 4_950);
    let expected: Vec<Value> = (1..=100).collect();
    assert_eq!(seq, expected);
}

#[test]
fn generate_sort_search_pipeline() {
    let mut generator = ArrayGenerator::from_seed(31);
    let policy = GenerationPolicy {
        size_mode: SizeMode::Linear(1_000),
        min_value: -500,
        max_value: 10_000,
        allow_duplicates: false,
    };
    let unsorted = generator.generate(&policy);

    // Linear search needs no ordering.
    let probe = unsorted[unsorted.len() / 2];
    let hit = linear_search(&unsorted, probe, false).unwrap();
    assert_eq!(unsorted[hit], probe);

    // Binary search needs the sorted copy.
    let mut sorted = unsorted.clone();
    merge_sort(&mut sorted, false);
    for &v in sorted.iter().step_by(97) {
        let idx = binary_search(&sorted, v, false).unwrap();
        assert_eq!(sorted[idx], v);
    }
    // Distinct values, so anything outside the generated set misses.
    assert_eq!(binary_search(&sorted, sorted[0] - 1, false), None);
    assert_eq!(binary_search(&sorted, sorted[sorted.len() - 1] + 1, false), None);
}

#[test]
fn suite_runs_and_exports_csv() {
    let config = SuiteConfig {
        sizes: vec![100],
        repetitions: 3,
        warmup: 1,
        seed: Some(42),
        ..Default::default()
    };
    let rows = run_suite(&config);

    // 5 sorts + 2 searches per size, declared order.
    assert_eq!(rows.len(), 7);
    assert_eq!(rows[0].algorithm, "bubble");
    assert_eq!(rows[6].algorithm, "binary_search");
    for row in &rows {
        assert_eq!(row.n, 100);
        assert!(row.stats.min_ms <= row.stats.mean_ms);
        assert!(row.stats.mean_ms <= row.stats.max_ms);
        assert!(row.stats.stddev_ms >= 0.0);
    }

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("results.csv");
    write_results(&rows, &path).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines[0], RESULTS_HEADER);
    assert_eq!(lines.len(), 8);
    for line in &lines[1..] {
        let fields: Vec<&str> = line.split(',').collect();
        assert_eq!(fields.len(), 6);
        assert_eq!(fields[1], "100");
        // Fixed 6-decimal formatting on every numeric column.
        for field in &fields[2..] {
            let (_, frac) = field.split_once('.').expect("decimal point");
            assert_eq!(frac.len(), 6);
        }
    }
}

#[test]
fn suite_with_fixed_seed_generates_identical_inputs() {
    // Same seed, same sizes: generated base arrays are identical, so row
    // counts and algorithm order match exactly.
    let config = SuiteConfig {
        sizes: vec![64, 128],
        repetitions: 2,
        warmup: 0,
        seed: Some(7),
        ..Default::default()
    };
    let a = run_suite(&config);
    let b = run_suite(&config);
    assert_eq!(a.len(), b.len());
    for (x, y) in a.iter().zip(&b) {
        assert_eq!(x.algorithm, y.algorithm);
        assert_eq!(x.n, y.n);
    }
}
