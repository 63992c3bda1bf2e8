//! Scan tallies and the aggregate report.
//!
//! Counters are monotone over one scan and discarded with it:
//! 1. **found:** Test lines matched for the scanned operator, including the
//!    invalid and the skipped ones once flushed.
//! 2. **invalid:** Matched lines rejected before comparison (missing `->`,
//!    or a literal the decimal constructor refused).
//! 3. **skipped:** Matched lines discarded while an unsupported rounding
//!    mode was in force.
//!
//! Final success requires every judgment to pass plus two end-of-scan
//! invariants: `found > 0` (a zero-match scan means the wrong operator or
//! file) and `invalid < found` (a scan where every test is rejected means a
//! broken fixture or harness).

use std::fmt;

/// Monotone counters for one scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    /// Test lines matched for the scanned operator.
    pub found: u64,
    /// Matched lines rejected before comparison.
    pub invalid: u64,
    /// Matched lines discarded under an unsupported rounding mode.
    pub skipped: u64,
}

/// A single comparison mismatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Failure {
    /// Test identifier from the vector line.
    pub name: String,
    /// Active precision when the test was judged.
    pub precision: u32,
    /// Human-readable mismatch description.
    pub detail: String,
}

impl fmt::Display for Failure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (precision {}): {}",
            self.name, self.precision, self.detail
        )
    }
}

/// Aggregate outcome of one file scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanReport {
    /// Operator the scan filtered for.
    pub operator: String,
    /// Final counter values.
    pub tally: Tally,
    /// Comparison mismatches, one per failing test.
    pub failures: Vec<Failure>,
}

impl ScanReport {
    /// Number of tests that were judged and passed.
    #[must_use]
    pub fn passed(&self) -> u64 {
        self.tally.found
            - self.tally.invalid
            - self.tally.skipped
            - self.failures.len() as u64
    }

    /// Final success: every judgment passed and the end-of-scan invariants
    /// (`found > 0`, `invalid < found`) hold.
    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.failures.is_empty() && self.tally.found > 0 && self.tally.invalid < self.tally.found
    }
}

impl fmt::Display for ScanReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{}: {} found, {} passed, {} failed, {} invalid, {} skipped",
            self.operator,
            self.tally.found,
            self.passed(),
            self.failures.len(),
            self.tally.invalid,
            self.tally.skipped
        )?;
        for failure in &self.failures {
            writeln!(f, "  FAIL {failure}")?;
        }
        Ok(())
    }
}
