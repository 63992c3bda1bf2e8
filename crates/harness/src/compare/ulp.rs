//! Unit-in-last-place distance between two values of one tier.
//!
//! The distance is the number of representable-value steps separating two
//! values, measured by repeatedly advancing the numerically smaller value
//! toward the larger one. Measurement is bounded: once the step count would
//! exceed the bound, the distance is reported as unbounded rather than
//! walked to completion.

use crate::value::DecimalValue;
use std::cmp::Ordering;

/// Measures the representable-step distance between `a` and `b`.
///
/// Returns `Some(steps)` when the values meet within `bound` steps and
/// `None` when the bound is exceeded or the values are unordered (NaN).
/// Stepping always runs from the smaller value toward the larger, so the
/// result is symmetric in the argument order.
#[must_use]
pub fn ulp_distance<D: DecimalValue>(a: D, b: D, bound: u32) -> Option<u32> {
    let (mut low, high) = match a.partial_cmp(&b) {
        Some(Ordering::Equal) => return Some(0),
        Some(Ordering::Less) => (a, b),
        Some(Ordering::Greater) => (b, a),
        None => return None,
    };

    for steps in 1..=bound {
        low = low.next_toward(high);
        if low == high {
            return Some(steps);
        }
    }
    None
}
