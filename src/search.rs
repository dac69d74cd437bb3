//! SearchEngine - linear and binary search over integer slices
//!
//! Binary search requires ascending input. The precondition is a caller
//! contract, not a runtime check: an unsorted slice yields a logically wrong
//! answer, never a fault.

use crate::core_types::Value;
use tracing::trace;

/// Linear scan from index 0; returns the first matching index.
///
/// No ordering precondition. O(n) worst/average, O(1) best.
pub fn linear_search(seq: &[Value], target: Value, with_trace: bool) -> Option<usize> {
    for (i, &v) in seq.iter().enumerate() {
        if with_trace {
            trace!("[linear] i={} compare {} with {}", i, v, target);
        }
        if v == target {
            return Some(i);
        }
    }
    None
}

/// Classic three-way binary search over an ascending slice.
///
/// `mid = low + (high - low) / 2` keeps the midpoint computation
/// overflow-free. At most floor(log2 n) + 1 iterations.
///
/// Precondition (unchecked): `seq` sorted ascending. Violating it returns
/// an arbitrary wrong answer rather than an error.
pub fn binary_search(seq: &[Value], target: Value, with_trace: bool) -> Option<usize> {
    let mut low = 0isize;
    let mut high = seq.len() as isize - 1;
    while low <= high {
        let mid = low + (high - low) / 2;
        let v = seq[mid as usize];
        if with_trace {
            trace!("[binary] mid={} val={}", mid, v);
        }
        if v == target {
            return Some(mid as usize);
        }
        if v < target {
            low = mid + 1;
        } else {
            high = mid - 1;
        }
    }
    None
}
