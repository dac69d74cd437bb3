//! SortEngine - five classical sorting algorithms over integer slices
//!
//! Every algorithm sorts ascending, in place, and returns the operation
//! counters for the run. The optional step trace is an observational side
//! channel (tracing events); it never changes the outcome or the counters.
//!
//! # Complexity:
//! | Algorithm | Best | Avg | Worst | Extra space | Stable |
//! |-----------|------|-----|-------|-------------|--------|
//! | bubble | n² | n² | n² | O(1) | yes |
//! | selection | n² | n² | n² | O(1) | no |
//! | insertion | n | n² | n² | O(1) | yes |
//! | quicksort | n log n | n log n | n² | O(log n) stack | no |
//! | mergesort | n log n | n log n | n log n | O(n) per merge | yes |
//!
//! Bubble deliberately has no early-exit pass optimization, so its best case
//! stays quadratic and its comparison count is exactly n(n-1)/2 for every
//! input. Quicksort uses a Hoare partition with the midpoint element as pivot
//! (no randomization, no median-of-three, no small-range cutoff).

use crate::core_types::Value;
use tracing::trace;

/// Operation counters for one sort run.
///
/// `swaps` doubles as the element-shift count for insertion sort.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SortCounters {
    pub comparisons: u64,
    pub swaps: u64,
}

/// Bubble sort: repeated adjacent-swap passes.
///
/// Always runs the full n-1 passes; comparisons = n(n-1)/2 exactly.
pub fn bubble_sort(seq: &mut [Value], with_trace: bool) -> SortCounters {
    let mut counters = SortCounters::default();
    let n = seq.len();
    for i in 0..n.saturating_sub(1) {
        for j in 0..n - 1 - i {
            counters.comparisons += 1;
            if with_trace {
                trace!(
                    "[bubble] compare a[{}]={} with a[{}]={}",
                    j,
                    seq[j],
                    j + 1,
                    seq[j + 1]
                );
            }
            if seq[j] > seq[j + 1] {
                if with_trace {
                    trace!(
                        "[bubble] swap a[{}]={} <-> a[{}]={}",
                        j,
                        seq[j],
                        j + 1,
                        seq[j + 1]
                    );
                }
                seq.swap(j, j + 1);
                counters.swaps += 1;
            }
        }
    }
    counters
}

/// Selection sort: repeated min-of-remainder extraction.
///
/// The swap is skipped when the minimum is already in place, so the swap
/// count is at most n-1 and exactly 0 on sorted input.
pub fn selection_sort(seq: &mut [Value], with_trace: bool) -> SortCounters {
    let mut counters = SortCounters::default();
    let n = seq.len();
    for i in 0..n.saturating_sub(1) {
        let mut min_idx = i;
        for j in i + 1..n {
            counters.comparisons += 1;
            if with_trace {
                trace!(
                    "[selection] compare a[{}]={} with a[{}]={}",
                    j,
                    seq[j],
                    min_idx,
                    seq[min_idx]
                );
            }
            if seq[j] < seq[min_idx] {
                min_idx = j;
            }
        }
        if min_idx != i {
            seq.swap(i, min_idx);
            counters.swaps += 1;
            if with_trace {
                trace!("[selection] swap i={} with min_idx={}", i, min_idx);
            }
        }
    }
    counters
}

/// Insertion sort: shift-and-insert into the sorted prefix.
///
/// Adaptive: near-sorted input approaches O(n). Counters report executed
/// guard comparisons and element shifts.
pub fn insertion_sort(seq: &mut [Value], with_trace: bool) -> SortCounters {
    let mut counters = SortCounters::default();
    for i in 1..seq.len() {
        let key = seq[i];
        if with_trace {
            trace!("[insertion] key={}", key);
        }
        let mut j = i;
        while j > 0 {
            counters.comparisons += 1;
            if seq[j - 1] > key {
                if with_trace {
                    trace!("[insertion] move a[{}]={} to {}", j - 1, seq[j - 1], j);
                }
                seq[j] = seq[j - 1];
                counters.swaps += 1;
                j -= 1;
            } else {
                break;
            }
        }
        seq[j] = key;
        if with_trace {
            trace!("[insertion] key {} inserted at {}", key, j);
        }
    }
    counters
}

/// Quicksort: Hoare partition, pivot = element at the midpoint of the range.
///
/// Comparisons are counted on each pointer advance in the partition scans,
/// swaps on each exchange. Recursion depth is O(log n) on average but O(n)
/// in the worst case.
pub fn quick_sort(seq: &mut [Value], with_trace: bool) -> SortCounters {
    let mut counters = SortCounters::default();
    if seq.len() > 1 {
        let right = seq.len() as isize - 1;
        quick_recurse(seq, 0, right, &mut counters, with_trace);
    }
    counters
}

fn quick_recurse(
    seq: &mut [Value],
    left: isize,
    right: isize,
    counters: &mut SortCounters,
    with_trace: bool,
) {
    let mut i = left;
    let mut j = right;
    let pivot = seq[((left + right) / 2) as usize];
    if with_trace {
        trace!("[quick] range [{}, {}] pivot {}", left, right, pivot);
    }
    while i <= j {
        while seq[i as usize] < pivot {
            i += 1;
            counters.comparisons += 1;
        }
        while seq[j as usize] > pivot {
            j -= 1;
            counters.comparisons += 1;
        }
        if i <= j {
            seq.swap(i as usize, j as usize);
            counters.swaps += 1;
            if with_trace {
                trace!("[quick] swap i={} j={}", i, j);
            }
            i += 1;
            j -= 1;
        }
    }
    if left < j {
        quick_recurse(seq, left, j, counters, with_trace);
    }
    if i < right {
        quick_recurse(seq, i, right, counters, with_trace);
    }
}

/// Mergesort: recursive halve-and-merge with a fresh temp buffer per merge.
///
/// Stable (`<=` keeps the left run first on ties); comparisons never exceed
/// n * ceil(log2 n) regardless of input order.
pub fn merge_sort(seq: &mut [Value], with_trace: bool) -> SortCounters {
    let mut counters = SortCounters::default();
    if seq.len() > 1 {
        merge_recurse(seq, 0, seq.len() - 1, &mut counters, with_trace);
    }
    counters
}

fn merge_recurse(
    seq: &mut [Value],
    left: usize,
    right: usize,
    counters: &mut SortCounters,
    with_trace: bool,
) {
    if left >= right {
        return;
    }
    let mid = left + (right - left) / 2;
    merge_recurse(seq, left, mid, counters, with_trace);
    merge_recurse(seq, mid + 1, right, counters, with_trace);

    // Fresh buffer per merge call; no scratch buffer is shared across the
    // recursion.
    let mut temp: Vec<Value> = Vec::with_capacity(right - left + 1);
    let mut i = left;
    let mut j = mid + 1;
    while i <= mid && j <= right {
        counters.comparisons += 1;
        if seq[i] <= seq[j] {
            if with_trace {
                trace!("[merge] take left seq[{}]={}", i, seq[i]);
            }
            temp.push(seq[i]);
            i += 1;
        } else {
            if with_trace {
                trace!("[merge] take right seq[{}]={}", j, seq[j]);
            }
            temp.push(seq[j]);
            j += 1;
        }
    }
    while i <= mid {
        temp.push(seq[i]);
        i += 1;
    }
    while j <= right {
        temp.push(seq[j]);
        j += 1;
    }
    seq[left..=right].copy_from_slice(&temp);
}

/// The five sorts in their fixed benchmark order.
pub const SORT_ALGORITHMS: [(&str, fn(&mut [Value], bool) -> SortCounters); 5] = [
    ("bubble", bubble_sort),
    ("selection", selection_sort),
    ("insertion", insertion_sort),
    ("quicksort", quick_sort),
    ("mergesort", merge_sort),
];
