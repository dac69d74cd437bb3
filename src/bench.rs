//! BenchmarkHarness - repeated timed execution with summary statistics
//!
//! Wraps any zero-argument operation with a monotonic high-resolution clock
//! ([`std::time::Instant`]), runs it warmup + repetitions times, and reduces
//! the timed batch to mean / population stddev / min / max in milliseconds.
//! `run_suite` drives the full fixed-order algorithm sweep over a list of
//! input sizes and accumulates one [`BenchmarkRow`] per (algorithm, size).

use crate::core_types::Value;
use crate::generator::{ArrayGenerator, GenerationPolicy, SizeMode};
use crate::search::{binary_search, linear_search};
use crate::sort::SORT_ALGORITHMS;
use std::time::Instant;
use tracing::info;

/// Summary statistics over one batch of timed runs, in milliseconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunStats {
    pub mean_ms: f64,
    pub stddev_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
}

impl RunStats {
    /// Reduce a batch of timings to summary statistics.
    ///
    /// Standard deviation is the population form (divide by the sample
    /// count, not count - 1). `samples` must be non-empty; an empty batch is
    /// a caller error.
    pub fn from_samples(samples: &[f64]) -> Self {
        let count = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / count;
        let variance = samples.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / count;
        let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
        let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        RunStats {
            mean_ms: mean,
            stddev_ms: variance.sqrt(),
            min_ms: min,
            max_ms: max,
        }
    }
}

/// One row of the exported results table.
#[derive(Debug, Clone)]
pub struct BenchmarkRow {
    pub algorithm: &'static str,
    pub n: usize,
    pub stats: RunStats,
}

/// Suite parameters. Defaults mirror the reference setup: sizes
/// {1000, 5000, 10000}, 10 repetitions, 1 warm-up, values in [1, 100000].
#[derive(Debug, Clone)]
pub struct SuiteConfig {
    pub sizes: Vec<usize>,
    pub repetitions: usize,
    pub warmup: usize,
    pub min_value: Value,
    pub max_value: Value,
    /// Fixed seed for reproducible inputs; `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for SuiteConfig {
    fn default() -> Self {
        Self {
            sizes: vec![1_000, 5_000, 10_000],
            repetitions: 10,
            warmup: 1,
            min_value: 1,
            max_value: 100_000,
            seed: None,
        }
    }
}

/// Time a single invocation; returns elapsed milliseconds.
pub fn run_once(op: impl FnOnce()) -> f64 {
    let start = Instant::now();
    op();
    start.elapsed().as_secs_f64() * 1_000.0
}

/// Run `warmup` untimed invocations (discarded), then `repetitions` timed
/// ones, and reduce the timed batch to [`RunStats`].
///
/// `repetitions >= 1` is a caller contract; zero repetitions is an invalid
/// configuration and is not defended here.
pub fn run_batch(mut op: impl FnMut(), repetitions: usize, warmup: usize) -> RunStats {
    for _ in 0..warmup {
        op();
    }
    let mut timings = Vec::with_capacity(repetitions);
    for _ in 0..repetitions {
        timings.push(run_once(&mut op));
    }
    RunStats::from_samples(&timings)
}

/// Run the full benchmark sweep.
///
/// Outer loop over sizes, inner loop in fixed order: bubble, selection,
/// insertion, quicksort, mergesort, linear_search, binary_search. One base
/// array is generated per size; every sort run gets a fresh copy of it so
/// in-place sorting never contaminates later algorithms' inputs. Searches
/// target the middle element (deterministically present): linear over the
/// unsorted base, binary over a sorted copy.
pub fn run_suite(config: &SuiteConfig) -> Vec<BenchmarkRow> {
    let mut generator = match config.seed {
        Some(seed) => ArrayGenerator::from_seed(seed),
        None => ArrayGenerator::new(),
    };
    let mut rows = Vec::new();

    for &n in &config.sizes {
        info!("benchmark sweep: n = {}", n);
        let policy = GenerationPolicy {
            size_mode: SizeMode::Linear(n as i64),
            min_value: config.min_value,
            max_value: config.max_value,
            allow_duplicates: true,
        };
        let base = generator.generate(&policy);

        for (name, sort_fn) in SORT_ALGORITHMS {
            let stats = run_batch(
                || {
                    let mut copy = base.clone();
                    sort_fn(&mut copy, false);
                },
                config.repetitions,
                config.warmup,
            );
            info!(
                "{} n={} -> {:.6} +/- {:.6} ms",
                name, n, stats.mean_ms, stats.stddev_ms
            );
            rows.push(BenchmarkRow {
                algorithm: name,
                n,
                stats,
            });
        }

        let target = base[base.len() / 2];
        let stats = run_batch(
            || {
                linear_search(&base, target, false);
            },
            config.repetitions,
            config.warmup,
        );
        info!(
            "linear_search n={} -> {:.6} +/- {:.6} ms",
            n, stats.mean_ms, stats.stddev_ms
        );
        rows.push(BenchmarkRow {
            algorithm: "linear_search",
            n,
            stats,
        });

        let mut sorted = base.clone();
        sorted.sort_unstable();
        let target = sorted[sorted.len() / 2];
        let stats = run_batch(
            || {
                binary_search(&sorted, target, false);
            },
            config.repetitions,
            config.warmup,
        );
        info!(
            "binary_search n={} -> {:.6} +/- {:.6} ms",
            n, stats.mean_ms, stats.stddev_ms
        );
        rows.push(BenchmarkRow {
            algorithm: "binary_search",
            n,
            stats,
        });
    }

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_stats_reduction() {
        let stats = RunStats::from_samples(&[1.0, 2.0, 3.0, 4.0, 5.0]);
        assert!((stats.mean_ms - 3.0).abs() < 1e-12);
        // Population stddev of 1..5 is sqrt(2), not the sample form sqrt(2.5).
        assert!((stats.stddev_ms - 2.0_f64.sqrt()).abs() < 1e-12);
        assert_eq!(stats.min_ms, 1.0);
        assert_eq!(stats.max_ms, 5.0);
    }

    #[test]
    fn test_constant_samples_have_zero_stddev() {
        let stats = RunStats::from_samples(&[0.5, 0.5, 0.5]);
        assert_eq!(stats.stddev_ms, 0.0);
        assert_eq!(stats.mean_ms, 0.5);
    }

    #[test]
    fn test_run_batch_executes_warmup_plus_repetitions() {
        let calls = Cell::new(0u32);
        let stats = run_batch(|| calls.set(calls.get() + 1), 5, 2);
        assert_eq!(calls.get(), 7);
        assert!(stats.min_ms <= stats.mean_ms);
        assert!(stats.mean_ms <= stats.max_ms);
        assert!(stats.stddev_ms >= 0.0 && stats.stddev_ms.is_finite());
    }

    #[test]
    fn test_run_once_measures_nonnegative_time() {
        let elapsed = run_once(|| {
            let mut acc = 0u64;
            for i in 0..10_000u64 {
                acc = acc.wrapping_add(i);
            }
            std::hint::black_box(acc);
        });
        assert!(elapsed >= 0.0);
    }

    #[test]
    fn test_suite_row_order_and_count() {
        let config = SuiteConfig {
            sizes: vec![100, 200],
            repetitions: 2,
            warmup: 1,
            seed: Some(1),
            ..Default::default()
        };
        let rows = run_suite(&config);
        let expected = [
            "bubble",
            "selection",
            "insertion",
            "quicksort",
            "mergesort",
            "linear_search",
            "binary_search",
        ];
        assert_eq!(rows.len(), expected.len() * 2);
        for (size_idx, &n) in [100usize, 200].iter().enumerate() {
            for (algo_idx, &name) in expected.iter().enumerate() {
                let row = &rows[size_idx * expected.len() + algo_idx];
                assert_eq!(row.algorithm, name);
                assert_eq!(row.n, n);
                assert!(row.stats.min_ms <= row.stats.max_ms);
            }
        }
    }
}
