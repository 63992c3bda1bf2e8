//! Harness error taxonomy.
//!
//! Only one class of problem is fatal to a scan: the test-vector file cannot
//! be opened or read. Every per-line problem (malformed vectors, rejected
//! literals, comparison mismatches, unsupported rounding directives) is
//! absorbed into the scan's counters and diagnostics so that one bad line
//! never masks the rest of the file.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Fatal scan errors.
///
/// Returned by the driver entry points when the input file is unusable.
/// All recoverable per-line outcomes are reported through
/// [`ScanReport`](crate::harness::report::ScanReport) instead.
#[derive(Debug, Error)]
pub enum HarnessError {
    /// The test-vector file could not be opened.
    #[error("cannot open test-vector file {path}: {source}")]
    Open {
        /// Path of the file that failed to open.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A read from an already-open test-vector file failed mid-scan.
    #[error("read failure in test-vector file {path}: {source}")]
    Read {
        /// Path of the file being scanned.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },
}
