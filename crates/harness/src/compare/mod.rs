//! Comparison strategies for judging computed against expected values.
//!
//! Three strategies, chosen per test and never mixed:
//! 1. **NaN-bit equality** when NaN is involved (see [`judge_unary`] and
//!    [`judge_binary`] for the per-arity trigger): raw bit patterns of
//!    matching width are compared, because ordinary decimal equality cannot
//!    distinguish NaN payloads or signs while the conformance suite does.
//! 2. **ULP tolerance** when the scan carries a non-zero tolerance: the
//!    values pass when they are at most that many representable steps apart.
//! 3. **Exact equality** otherwise.
//!
//! Non-decimal results (see [`judge_scalar`]) bypass the selection and are
//! always judged exactly.

pub mod ulp;

pub use ulp::ulp_distance;

use crate::value::DecimalValue;
use std::fmt;

/// Outcome of judging one test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Judgment {
    /// Computed and expected matched under the selected strategy.
    Pass,
    /// Mismatch, with a human-readable description.
    Fail(String),
}

/// Judges a one-argument test.
///
/// NaN-bit comparison is selected when the operand, the computed value, or
/// the expected value is NaN; otherwise ULP tolerance applies when
/// `tolerance` is non-zero, and exact equality applies when it is zero.
pub fn judge_unary<D: DecimalValue>(operand: D, computed: D, expected: D, tolerance: u32) -> Judgment {
    if operand.is_nan() || computed.is_nan() || expected.is_nan() {
        judge_nan_bits(computed, expected)
    } else {
        judge_value(computed, expected, tolerance)
    }
}

/// Judges a two-argument test.
///
/// NaN-bit comparison is selected when both operands are NaN, or when either
/// the computed or the expected value is NaN. A single NaN operand with a
/// non-NaN result (e.g. `max(NaN, 5) -> 5`) is judged by value as usual.
pub fn judge_binary<D: DecimalValue>(
    lhs: D,
    rhs: D,
    computed: D,
    expected: D,
    tolerance: u32,
) -> Judgment {
    if (lhs.is_nan() && rhs.is_nan()) || computed.is_nan() || expected.is_nan() {
        judge_nan_bits(computed, expected)
    } else {
        judge_value(computed, expected, tolerance)
    }
}

/// Judges a test whose result is not a decimal (integral rounding,
/// comparison orderings).
///
/// Scalar results are always judged by exact equality; NaN bit patterns and
/// ULP tolerance have no meaning for them.
pub fn judge_scalar<R: PartialEq + fmt::Display>(computed: R, expected: R) -> Judgment {
    if computed == expected {
        Judgment::Pass
    } else {
        Judgment::Fail(format!("expected {expected}, computed {computed}"))
    }
}

/// Exact or ULP-tolerant value comparison for the non-NaN case.
fn judge_value<D: DecimalValue>(computed: D, expected: D, tolerance: u32) -> Judgment {
    if tolerance == 0 {
        if computed == expected {
            Judgment::Pass
        } else {
            Judgment::Fail(format!("expected {expected}, computed {computed}"))
        }
    } else {
        match ulp_distance(computed, expected, tolerance) {
            Some(_) => Judgment::Pass,
            None => Judgment::Fail(format!(
                "expected {expected} within {tolerance} ULP, computed {computed}"
            )),
        }
    }
}

/// Raw bit-pattern comparison for the NaN-involved case.
fn judge_nan_bits<D: DecimalValue>(computed: D, expected: D) -> Judgment {
    let computed_bits = computed.to_bits();
    let expected_bits = expected.to_bits();
    if computed_bits == expected_bits {
        Judgment::Pass
    } else {
        Judgment::Fail(format!(
            "NaN bit patterns differ: expected {expected_bits:?}, computed {computed_bits:?}"
        ))
    }
}
