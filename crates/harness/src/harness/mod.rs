//! Scan driver: the line loop tying every other module together.
//!
//! One call to [`run_unary`] or [`run_binary`] (or their scalar-result
//! counterparts [`run_unary_scalar`] and [`run_binary_scalar`]) performs one
//! pass over one decTest file for one operator:
//! 1. **Classify** each line (comment, directive, test, or noise).
//! 2. **Track state:** `precision:` moves the active tier cursor and
//!    `rounding:` drives the skip gate (when the scan opts in).
//! 3. **Evaluate** each matched test at the tier selected by the active
//!    precision, through the caller-supplied per-tier function table.
//! 4. **Judge** computed against expected and accumulate tallies and
//!    failures into a [`ScanReport`].
//!
//! Per-line problems never abort the scan; only an unreadable file does.

pub mod report;

pub use report::{Failure, ScanReport, Tally};

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, error, info, warn};

use crate::compare::{Judgment, judge_binary, judge_scalar, judge_unary};
use crate::config::ScanConfig;
use crate::error::HarnessError;
use crate::rounding::{RoundingGate, RoundingMode};
use crate::scan::{Arity, LineKind, TestVector, classify, parse_vector};
use crate::value::{DecimalFamily, DecimalParseError, DecimalValue, ScalarResult, Tier};

/// Per-tier implementations of a one-argument operation.
///
/// The driver picks exactly one of the three functions per test line, based
/// on the precision in force when the line is reached.
pub struct UnaryOps<F: DecimalFamily> {
    /// Implementation invoked for precisions of at most 9 digits.
    pub narrow: fn(F::Narrow) -> F::Narrow,
    /// Implementation invoked for precisions of 10 to 16 digits.
    pub medium: fn(F::Medium) -> F::Medium,
    /// Implementation invoked for precisions above 16 digits.
    pub wide: fn(F::Wide) -> F::Wide,
}

/// Per-tier implementations of a two-argument operation.
pub struct BinaryOps<F: DecimalFamily> {
    /// Implementation invoked for precisions of at most 9 digits.
    pub narrow: fn(F::Narrow, F::Narrow) -> F::Narrow,
    /// Implementation invoked for precisions of 10 to 16 digits.
    pub medium: fn(F::Medium, F::Medium) -> F::Medium,
    /// Implementation invoked for precisions above 16 digits.
    pub wide: fn(F::Wide, F::Wide) -> F::Wide,
}

/// Per-tier implementations of a one-argument operation whose result is a
/// [`ScalarResult`] rather than a decimal (e.g. rounding to an integer).
pub struct UnaryScalarOps<F: DecimalFamily, R> {
    /// Implementation invoked for precisions of at most 9 digits.
    pub narrow: fn(F::Narrow) -> R,
    /// Implementation invoked for precisions of 10 to 16 digits.
    pub medium: fn(F::Medium) -> R,
    /// Implementation invoked for precisions above 16 digits.
    pub wide: fn(F::Wide) -> R,
}

/// Per-tier implementations of a two-argument operation whose result is a
/// [`ScalarResult`] rather than a decimal (e.g. a comparison ordering).
pub struct BinaryScalarOps<F: DecimalFamily, R> {
    /// Implementation invoked for precisions of at most 9 digits.
    pub narrow: fn(F::Narrow, F::Narrow) -> R,
    /// Implementation invoked for precisions of 10 to 16 digits.
    pub medium: fn(F::Medium, F::Medium) -> R,
    /// Implementation invoked for precisions above 16 digits.
    pub wide: fn(F::Wide, F::Wide) -> R,
}

// Derives would demand `F: Clone` etc.; the fields are plain fn pointers.
impl<F: DecimalFamily> Clone for UnaryOps<F> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<F: DecimalFamily> Copy for UnaryOps<F> {}
impl<F: DecimalFamily> fmt::Debug for UnaryOps<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnaryOps").finish_non_exhaustive()
    }
}

impl<F: DecimalFamily> Clone for BinaryOps<F> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<F: DecimalFamily> Copy for BinaryOps<F> {}
impl<F: DecimalFamily> fmt::Debug for BinaryOps<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryOps").finish_non_exhaustive()
    }
}

impl<F: DecimalFamily, R> Clone for UnaryScalarOps<F, R> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<F: DecimalFamily, R> Copy for UnaryScalarOps<F, R> {}
impl<F: DecimalFamily, R> fmt::Debug for UnaryScalarOps<F, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnaryScalarOps").finish_non_exhaustive()
    }
}

impl<F: DecimalFamily, R> Clone for BinaryScalarOps<F, R> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<F: DecimalFamily, R> Copy for BinaryScalarOps<F, R> {}
impl<F: DecimalFamily, R> fmt::Debug for BinaryScalarOps<F, R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BinaryScalarOps").finish_non_exhaustive()
    }
}

/// Scans `path` for `config.operator` test vectors of a unary operation.
///
/// # Errors
///
/// Returns [`HarnessError`] when the file cannot be opened or a read fails
/// mid-scan. Per-line problems are absorbed into the report instead.
pub fn run_unary<F, P>(
    path: P,
    config: &ScanConfig,
    ops: UnaryOps<F>,
) -> Result<ScanReport, HarnessError>
where
    F: DecimalFamily,
    P: AsRef<Path>,
{
    scan_file(path.as_ref(), config, ops)
}

/// Scans `path` for `config.operator` test vectors of a binary operation.
///
/// # Errors
///
/// Returns [`HarnessError`] when the file cannot be opened or a read fails
/// mid-scan. Per-line problems are absorbed into the report instead.
pub fn run_binary<F, P>(
    path: P,
    config: &ScanConfig,
    ops: BinaryOps<F>,
) -> Result<ScanReport, HarnessError>
where
    F: DecimalFamily,
    P: AsRef<Path>,
{
    scan_file(path.as_ref(), config, ops)
}

/// Scans `path` for vectors of a unary operation with a scalar result.
///
/// The expected literal is parsed as `R` instead of a decimal, and judging is
/// always exact; the configured ULP tolerance is ignored.
///
/// # Errors
///
/// Returns [`HarnessError`] when the file cannot be opened or a read fails
/// mid-scan. Per-line problems are absorbed into the report instead.
pub fn run_unary_scalar<F, R, P>(
    path: P,
    config: &ScanConfig,
    ops: UnaryScalarOps<F, R>,
) -> Result<ScanReport, HarnessError>
where
    F: DecimalFamily,
    R: ScalarResult,
    P: AsRef<Path>,
{
    scan_file(path.as_ref(), config, ops)
}

/// Scans `path` for vectors of a binary operation with a scalar result.
///
/// # Errors
///
/// Returns [`HarnessError`] when the file cannot be opened or a read fails
/// mid-scan. Per-line problems are absorbed into the report instead.
pub fn run_binary_scalar<F, R, P>(
    path: P,
    config: &ScanConfig,
    ops: BinaryScalarOps<F, R>,
) -> Result<ScanReport, HarnessError>
where
    F: DecimalFamily,
    R: ScalarResult,
    P: AsRef<Path>,
{
    scan_file(path.as_ref(), config, ops)
}

/// Outcome of evaluating one vector at one tier.
enum Outcome {
    /// Both literals constructed; the operation ran and was judged.
    Judged(Judgment),
    /// A literal was rejected; the vector counts as invalid.
    Invalid(DecimalParseError),
}

/// Tier dispatch for one arity's function table.
trait Evaluate<F: DecimalFamily>: Copy {
    /// Operand count this table serves; fixes the vector grammar.
    const ARITY: Arity;

    /// Runs the tier-appropriate function over one vector and judges it.
    fn evaluate(self, tier: Tier, vector: &TestVector, tolerance: u32) -> Outcome;
}

impl<F: DecimalFamily> Evaluate<F> for UnaryOps<F> {
    const ARITY: Arity = Arity::Unary;

    fn evaluate(self, tier: Tier, vector: &TestVector, tolerance: u32) -> Outcome {
        match tier {
            Tier::Narrow => judge_one(self.narrow, vector, tolerance),
            Tier::Medium => judge_one(self.medium, vector, tolerance),
            Tier::Wide => judge_one(self.wide, vector, tolerance),
        }
    }
}

impl<F: DecimalFamily> Evaluate<F> for BinaryOps<F> {
    const ARITY: Arity = Arity::Binary;

    fn evaluate(self, tier: Tier, vector: &TestVector, tolerance: u32) -> Outcome {
        match tier {
            Tier::Narrow => judge_two(self.narrow, vector, tolerance),
            Tier::Medium => judge_two(self.medium, vector, tolerance),
            Tier::Wide => judge_two(self.wide, vector, tolerance),
        }
    }
}

impl<F: DecimalFamily, R: ScalarResult> Evaluate<F> for UnaryScalarOps<F, R> {
    const ARITY: Arity = Arity::Unary;

    fn evaluate(self, tier: Tier, vector: &TestVector, _tolerance: u32) -> Outcome {
        match tier {
            Tier::Narrow => judge_one_scalar(self.narrow, vector),
            Tier::Medium => judge_one_scalar(self.medium, vector),
            Tier::Wide => judge_one_scalar(self.wide, vector),
        }
    }
}

impl<F: DecimalFamily, R: ScalarResult> Evaluate<F> for BinaryScalarOps<F, R> {
    const ARITY: Arity = Arity::Binary;

    fn evaluate(self, tier: Tier, vector: &TestVector, _tolerance: u32) -> Outcome {
        match tier {
            Tier::Narrow => judge_two_scalar(self.narrow, vector),
            Tier::Medium => judge_two_scalar(self.medium, vector),
            Tier::Wide => judge_two_scalar(self.wide, vector),
        }
    }
}

/// Constructs, runs, and judges a unary vector at one concrete tier type.
fn judge_one<D: DecimalValue>(op: fn(D) -> D, vector: &TestVector, tolerance: u32) -> Outcome {
    let operand = match D::from_literal(&vector.operands[0]) {
        Ok(value) => value,
        Err(err) => return Outcome::Invalid(err),
    };
    let expected = match D::from_literal(&vector.expected) {
        Ok(value) => value,
        Err(err) => return Outcome::Invalid(err),
    };
    let computed = op(operand);
    Outcome::Judged(judge_unary(operand, computed, expected, tolerance))
}

/// Constructs, runs, and judges a binary vector at one concrete tier type.
fn judge_two<D: DecimalValue>(op: fn(D, D) -> D, vector: &TestVector, tolerance: u32) -> Outcome {
    let lhs = match D::from_literal(&vector.operands[0]) {
        Ok(value) => value,
        Err(err) => return Outcome::Invalid(err),
    };
    let rhs = match D::from_literal(&vector.operands[1]) {
        Ok(value) => value,
        Err(err) => return Outcome::Invalid(err),
    };
    let expected = match D::from_literal(&vector.expected) {
        Ok(value) => value,
        Err(err) => return Outcome::Invalid(err),
    };
    let computed = op(lhs, rhs);
    Outcome::Judged(judge_binary(lhs, rhs, computed, expected, tolerance))
}

/// Constructs, runs, and judges a unary scalar-result vector at one tier.
fn judge_one_scalar<D: DecimalValue, R: ScalarResult>(
    op: fn(D) -> R,
    vector: &TestVector,
) -> Outcome {
    let operand = match D::from_literal(&vector.operands[0]) {
        Ok(value) => value,
        Err(err) => return Outcome::Invalid(err),
    };
    let expected = match R::from_expected(&vector.expected) {
        Ok(value) => value,
        Err(err) => return Outcome::Invalid(err),
    };
    Outcome::Judged(judge_scalar(op(operand), expected))
}

/// Constructs, runs, and judges a binary scalar-result vector at one tier.
fn judge_two_scalar<D: DecimalValue, R: ScalarResult>(
    op: fn(D, D) -> R,
    vector: &TestVector,
) -> Outcome {
    let lhs = match D::from_literal(&vector.operands[0]) {
        Ok(value) => value,
        Err(err) => return Outcome::Invalid(err),
    };
    let rhs = match D::from_literal(&vector.operands[1]) {
        Ok(value) => value,
        Err(err) => return Outcome::Invalid(err),
    };
    let expected = match R::from_expected(&vector.expected) {
        Ok(value) => value,
        Err(err) => return Outcome::Invalid(err),
    };
    Outcome::Judged(judge_scalar(op(lhs, rhs), expected))
}

/// Mutable scan state threaded through the line loop.
struct Scan<'c> {
    config: &'c ScanConfig,
    precision: u32,
    gate: RoundingGate,
    tally: Tally,
    failures: Vec<Failure>,
}

impl<'c> Scan<'c> {
    fn new(config: &'c ScanConfig) -> Self {
        Self {
            config,
            precision: config.precision,
            gate: RoundingGate::new(),
            tally: Tally::default(),
            failures: Vec::new(),
        }
    }

    /// Routes a `rounding:` token through the gate and onto the family.
    ///
    /// Inert unless the scan opted into rounding directives; a scan for a
    /// rounding-insensitive operation must not flip process-wide state.
    fn rounding_directive<F: DecimalFamily>(&mut self, token: &str) {
        if !self.config.rounding_directives {
            return;
        }
        if let Some((mode, deferred)) = self.gate.directive(token) {
            F::set_rounding(mode);
            self.absorb_skips(deferred);
            debug!(?mode, "rounding mode applied");
        }
    }

    /// Handles one matched test line: defer, reject, or evaluate and judge.
    fn test_line<F: DecimalFamily, E: Evaluate<F>>(&mut self, name: &str, rest: &str, ops: E) {
        if self.gate.skipping() {
            self.gate.defer();
            return;
        }

        self.tally.found += 1;
        let Some(vector) = parse_vector(name, &self.config.operator, rest, E::ARITY) else {
            self.tally.invalid += 1;
            warn!(name, "test line has no `->` separator");
            return;
        };

        match ops.evaluate(Tier::for_precision(self.precision), &vector, self.config.ulp_tolerance)
        {
            Outcome::Judged(Judgment::Pass) => {}
            Outcome::Judged(Judgment::Fail(detail)) => {
                error!(
                    name = %vector.name,
                    precision = self.precision,
                    %detail,
                    "conformance mismatch"
                );
                self.failures.push(Failure {
                    name: vector.name,
                    precision: self.precision,
                    detail,
                });
            }
            Outcome::Invalid(err) => {
                self.tally.invalid += 1;
                debug!(name = %vector.name, %err, "literal rejected; counted invalid");
            }
        }
    }

    /// Folds tests deferred under an unsupported rounding mode into the
    /// tallies. They count as found and skipped, never as judged.
    fn absorb_skips(&mut self, deferred: u64) {
        if deferred == 0 {
            return;
        }
        self.tally.found += deferred;
        self.tally.skipped += deferred;
        info!(deferred, "tests deferred under unsupported rounding mode");
    }

    fn into_report(self) -> ScanReport {
        ScanReport {
            operator: self.config.operator.clone(),
            tally: self.tally,
            failures: self.failures,
        }
    }
}

/// Shared line loop behind both entry points.
fn scan_file<F, E>(path: &Path, config: &ScanConfig, ops: E) -> Result<ScanReport, HarnessError>
where
    F: DecimalFamily,
    E: Evaluate<F>,
{
    let file = File::open(path).map_err(|source| HarnessError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let mut scan = Scan::new(config);
    if config.rounding_directives {
        // Rounding state is process-wide; a previous scan's mode must not
        // leak into the lines before this file's first directive.
        F::set_rounding(RoundingMode::default());
    }
    for line in reader.lines() {
        let line = line.map_err(|source| HarnessError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        match classify(&line, &config.operator) {
            LineKind::Ignored => {}
            LineKind::Precision(digits) => scan.precision = digits,
            LineKind::Rounding(token) => scan.rounding_directive::<F>(token),
            LineKind::Test { name, rest } => scan.test_line(name, rest, ops),
        }
    }

    // Tests still deferred when the file ends are accounted the same way as
    // tests flushed by a mid-file directive.
    let deferred = scan.gate.flush();
    scan.absorb_skips(deferred);

    let report = scan.into_report();
    info!(
        operator = %report.operator,
        found = report.tally.found,
        passed = report.passed(),
        failed = report.failures.len(),
        invalid = report.tally.invalid,
        skipped = report.tally.skipped,
        "scan complete"
    );
    Ok(report)
}
