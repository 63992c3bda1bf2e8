//! Operand and expected-result extraction.
//!
//! A test-vector line has the shape
//! `<name> <operator> <operand>[ <operand>] -> <expected>`. The region
//! between the operator token and `->` yields the operands; the region after
//! `->` yields the expected result. Tokens are either bare (run to the next
//! whitespace) or single-quoted (run to the closing quote, quotes stripped,
//! embedded whitespace preserved). Only the first token after `->` is taken,
//! which makes trailing decTest condition flags (`Inexact Rounded` ...)
//! inert.

/// Separator between the operand region and the expected result.
pub const RESULT_SEPARATOR: &str = "->";

/// Number of operands the operation under test consumes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    /// One-argument operation (`abs`, `squareroot`, ...).
    Unary,
    /// Two-argument operation (`add`, `multiply`, `power`, ...).
    Binary,
}

impl Arity {
    /// Number of operand tokens to extract.
    #[must_use]
    pub const fn operand_count(self) -> usize {
        match self {
            Self::Unary => 1,
            Self::Binary => 2,
        }
    }
}

/// One parsed test vector; produced transiently per line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestVector {
    /// Test identifier (first token on the line).
    pub name: String,
    /// Operator under test.
    pub operator: String,
    /// Raw operand literals, in source order.
    pub operands: Vec<String>,
    /// Raw expected-result literal.
    pub expected: String,
}

/// Splits the post-operator region of a test line into a [`TestVector`].
///
/// Returns `None` when the `->` separator is missing; the driver counts such
/// lines as found and invalid. An exhausted operand region yields empty
/// literals, which the decimal constructor will reject downstream.
#[must_use]
pub fn parse_vector(name: &str, operator: &str, rest: &str, arity: Arity) -> Option<TestVector> {
    let (operand_region, result_region) = rest.split_once(RESULT_SEPARATOR)?;

    let mut operands = Vec::with_capacity(arity.operand_count());
    let mut cursor = operand_region;
    for _ in 0..arity.operand_count() {
        let (token, remainder) = next_token(cursor);
        operands.push(token.to_string());
        cursor = remainder;
    }

    let (expected, _) = next_token(result_region);

    Some(TestVector {
        name: name.to_string(),
        operator: operator.to_string(),
        operands,
        expected: expected.to_string(),
    })
}

/// Extracts the next token from a region.
///
/// A leading `'` starts a quoted token running to the next `'`; an
/// unterminated quote consumes the rest of the region (the resulting text
/// then fails value construction, which is the counted-invalid path).
fn next_token(region: &str) -> (&str, &str) {
    let region = region.trim_start();
    if let Some(body) = region.strip_prefix('\'') {
        match body.find('\'') {
            Some(end) => (&body[..end], &body[end + 1..]),
            None => (body.trim_end(), ""),
        }
    } else {
        match region.find(char::is_whitespace) {
            Some(end) => (&region[..end], &region[end..]),
            None => (region, ""),
        }
    }
}
