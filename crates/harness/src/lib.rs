//! Conformance harness for arbitrary-precision decimal arithmetic.
//!
//! This crate scans decTest-format test-vector files and judges a decimal
//! implementation against them:
//! 1. **Scanning:** Line classification (comments, directives, tests) and the
//!    operand/expected grammar with single-quoted tokens.
//! 2. **Tiers:** Precision directives select one of three representation
//!    widths (narrow, medium, wide) supplied by the implementation under test.
//! 3. **Comparison:** Exact equality, bounded ULP tolerance, or NaN bit-level
//!    equality, chosen per test.
//! 4. **Rounding:** `rounding:` directives drive a skip gate so tests under
//!    unsupported modes are counted but never judged.
//! 5. **Reporting:** Found/invalid/skipped tallies and per-test failures,
//!    with an overall verdict.
//!
//! The harness contains no decimal arithmetic of its own; implementations
//! plug in through the [`value::DecimalFamily`] trait and per-tier function
//! tables.

/// Comparison strategies (exact, ULP distance, NaN bit patterns).
pub mod compare;
/// Scan configuration (operator, tolerance, directives, starting precision).
pub mod config;
/// Harness error taxonomy (fatal file I/O only).
pub mod error;
/// Scan driver, per-tier operation tables, and reporting.
pub mod harness;
/// Rounding-mode directives and the skip-state gate.
pub mod rounding;
/// Line classification and test-vector extraction.
pub mod scan;
/// Decimal value traits and the precision-tier mapping.
pub mod value;

/// Configuration for one scan; construct with `ScanConfig::new` or deserialize.
pub use crate::config::ScanConfig;
/// Fatal scan error; everything recoverable lands in the report instead.
pub use crate::error::HarnessError;
/// Entry points and their per-tier function tables.
pub use crate::harness::{
    BinaryOps, BinaryScalarOps, Failure, ScanReport, Tally, UnaryOps, UnaryScalarOps, run_binary,
    run_binary_scalar, run_unary, run_unary_scalar,
};
/// Rounding mode selected by a recognized directive.
pub use crate::rounding::RoundingMode;
/// Implementation-side traits and the tier selector.
pub use crate::value::{DecimalFamily, DecimalParseError, DecimalValue, ScalarResult, Tier};
