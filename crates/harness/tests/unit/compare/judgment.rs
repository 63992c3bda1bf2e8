//! # Judgment Tests
//!
//! Strategy selection (exact, ULP, NaN bits) and the pass/fail outcomes it
//! produces for unary and binary tests.

use dectest_core::compare::{Judgment, judge_binary, judge_scalar, judge_unary};
use dectest_core::DecimalValue;

use crate::common::mocks::MockMedium;

fn fail_detail(judgment: Judgment) -> String {
    match judgment {
        Judgment::Fail(detail) => detail,
        Judgment::Pass => panic!("expected a failing judgment"),
    }
}

#[test]
fn test_exact_equality_passes() {
    let judgment = judge_unary(MockMedium(2.0), MockMedium(4.0), MockMedium(4.0), 0);
    assert_eq!(judgment, Judgment::Pass);
}

#[test]
fn test_exact_mismatch_fails_with_both_values() {
    let judgment = judge_unary(MockMedium(2.0), MockMedium(4.0), MockMedium(5.0), 0);
    let detail = fail_detail(judgment);
    assert!(detail.contains('5'), "detail should name the expected value: {detail}");
    assert!(detail.contains('4'), "detail should name the computed value: {detail}");
}

#[test]
fn test_ulp_tolerance_accepts_nearby_value() {
    let expected = MockMedium(1.0);
    let computed = expected.next_toward(MockMedium(2.0));
    assert_eq!(judge_unary(MockMedium(1.0), computed, expected, 3), Judgment::Pass);
}

#[test]
fn test_ulp_tolerance_rejects_distant_value() {
    let judgment = judge_unary(MockMedium(1.0), MockMedium(1.0), MockMedium(2.0), 3);
    assert!(matches!(judgment, Judgment::Fail(_)));
}

#[test]
fn test_exact_comparison_rejects_one_step_error() {
    // Zero tolerance means even the adjacent value fails.
    let expected = MockMedium(1.0);
    let computed = expected.next_toward(MockMedium(2.0));
    assert!(matches!(
        judge_unary(MockMedium(1.0), computed, expected, 0),
        Judgment::Fail(_)
    ));
}

#[test]
fn test_unary_nan_operand_selects_bit_comparison() {
    // NaN in, NaN out with the same payload: ordinary equality would call
    // this a mismatch, bit comparison passes it.
    let nan = MockMedium(f64::NAN);
    assert_eq!(judge_unary(nan, nan, nan, 0), Judgment::Pass);
}

#[test]
fn test_unary_nan_expected_selects_bit_comparison() {
    let judgment = judge_unary(
        MockMedium(-1.0),
        MockMedium(f64::NAN),
        MockMedium(f64::NAN),
        0,
    );
    assert_eq!(judgment, Judgment::Pass);
}

#[test]
fn test_nan_sign_bit_mismatch_fails() {
    let quiet = MockMedium(f64::NAN);
    let negated = MockMedium(-f64::NAN);
    assert_ne!(quiet.to_bits(), negated.to_bits());
    let judgment = judge_unary(quiet, quiet, negated, 0);
    assert!(matches!(judgment, Judgment::Fail(_)));
}

#[test]
fn test_binary_single_nan_operand_judged_by_value() {
    // max(NaN, 5) -> 5 style: one NaN operand with non-NaN results stays on
    // the value path.
    let judgment = judge_binary(
        MockMedium(f64::NAN),
        MockMedium(5.0),
        MockMedium(5.0),
        MockMedium(5.0),
        0,
    );
    assert_eq!(judgment, Judgment::Pass);
}

#[test]
fn test_binary_both_nan_operands_select_bit_comparison() {
    let nan = MockMedium(f64::NAN);
    assert_eq!(judge_binary(nan, nan, nan, nan, 0), Judgment::Pass);
    assert!(matches!(
        judge_binary(nan, nan, nan, MockMedium(-f64::NAN), 0),
        Judgment::Fail(_)
    ));
}

#[test]
fn test_scalar_results_judged_exactly() {
    assert_eq!(judge_scalar(2_i64, 2_i64), Judgment::Pass);
    let detail = fail_detail(judge_scalar(3_i64, 2_i64));
    assert!(detail.contains('2'), "detail should name the expected value: {detail}");
    assert!(detail.contains('3'), "detail should name the computed value: {detail}");
}

#[test]
fn test_binary_nan_result_selects_bit_comparison() {
    let judgment = judge_binary(
        MockMedium(0.0),
        MockMedium(0.0),
        MockMedium(f64::NAN),
        MockMedium(f64::NAN),
        0,
    );
    assert_eq!(judgment, Judgment::Pass);
}
