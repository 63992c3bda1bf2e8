//! # Line Classification Tests
//!
//! Precedence and matching rules for comments, directives, and the
//! operator-token filter.

use dectest_core::scan::{LineKind, classify};
use rstest::rstest;

#[test]
fn test_blank_and_whitespace_lines_ignored() {
    assert_eq!(classify("", "add"), LineKind::Ignored);
    assert_eq!(classify("   \t  ", "add"), LineKind::Ignored);
}

#[test]
fn test_comment_line_ignored() {
    assert_eq!(classify("-- general remarks about the file", "add"), LineKind::Ignored);
}

#[test]
fn test_comment_marker_drops_whole_line() {
    // Comment precedence beats both directives and test vectors.
    assert_eq!(classify("precision: 20 -- not today", "add"), LineKind::Ignored);
    assert_eq!(classify("addx001 add 1 2 -> 3 -- trailing note", "add"), LineKind::Ignored);
}

#[test]
fn test_precision_directive_parsed() {
    assert_eq!(classify("precision: 9", "add"), LineKind::Precision(9));
    assert_eq!(classify("precision:34", "add"), LineKind::Precision(34));
    assert_eq!(classify("  precision:   16  ", "add"), LineKind::Precision(16));
}

#[test]
fn test_precision_without_digits_ignored() {
    assert_eq!(classify("precision: lots", "add"), LineKind::Ignored);
    assert_eq!(classify("precision:", "add"), LineKind::Ignored);
}

#[test]
fn test_rounding_directive_token_extracted() {
    assert_eq!(classify("rounding: half_even", "add"), LineKind::Rounding("half_even"));
    assert_eq!(classify("rounding:floor extra", "add"), LineKind::Rounding("floor"));
}

#[test]
fn test_rounding_without_token_ignored() {
    assert_eq!(classify("rounding:   ", "add"), LineKind::Ignored);
}

#[test]
fn test_operator_match_yields_name_and_rest() {
    let kind = classify("addx001 add 1 2 -> 3", "add");
    assert_eq!(
        kind,
        LineKind::Test {
            name: "addx001",
            rest: "1 2 -> 3",
        }
    );
}

#[rstest]
#[case("addx001 addition 1 2 -> 3")]
#[case("subx001 subtract 1 2 -> -1")]
#[case("addx001addends 1 2 -> 3")]
fn test_operator_matches_whole_token_only(#[case] line: &str) {
    assert_eq!(classify(line, "add"), LineKind::Ignored);
}

#[test]
fn test_operator_inside_name_does_not_confuse_match() {
    // The name contains the operator text; the match must land on the token
    // followed by a space, not on the prefix of the name.
    let kind = classify("addx001 add 7 -> 7", "add");
    assert_eq!(
        kind,
        LineKind::Test {
            name: "addx001",
            rest: "7 -> 7",
        }
    );
}

#[test]
fn test_other_operators_fall_through() {
    assert_eq!(classify("mulx001 multiply 2 3 -> 6", "add"), LineKind::Ignored);
}
