//! Scan configuration.
//!
//! One [`ScanConfig`] describes one pass over one decTest file: which
//! operator token to filter for, whether comparison tolerates a ULP
//! distance, whether `rounding:` directives are honored, and the precision
//! in force before the first `precision:` directive. Configurations are
//! constructed in code or deserialized from JSON.

use serde::Deserialize;

/// Default configuration constants for a scan.
mod defaults {
    /// Active precision before any `precision:` directive (medium-tier digits).
    pub const PRECISION: u32 = 16;
}

/// Configuration for one decTest scan.
///
/// # Example
///
/// ```
/// use dectest_core::ScanConfig;
///
/// let json = r#"{
///     "operator": "power",
///     "ulp_tolerance": 10,
///     "rounding_directives": true
/// }"#;
///
/// let config: ScanConfig = serde_json::from_str(json)?;
/// assert_eq!(config.operator, "power");
/// assert_eq!(config.precision, 16);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScanConfig {
    /// Operator token the scan filters test lines by (e.g. `add`).
    pub operator: String,

    /// Non-zero to judge with ULP tolerance instead of exact equality.
    #[serde(default)]
    pub ulp_tolerance: u32,

    /// Honor `rounding:` directives. Leave false for operations that are not
    /// rounding-sensitive; they then treat such lines as inert.
    #[serde(default)]
    pub rounding_directives: bool,

    /// Active precision before the first `precision:` directive.
    #[serde(default = "ScanConfig::default_precision")]
    pub precision: u32,
}

impl ScanConfig {
    /// Creates a configuration for `operator` with default settings:
    /// exact comparison, rounding directives ignored, precision 16.
    pub fn new(operator: impl Into<String>) -> Self {
        Self {
            operator: operator.into(),
            ulp_tolerance: 0,
            rounding_directives: false,
            precision: defaults::PRECISION,
        }
    }

    /// Sets the ULP tolerance used instead of exact comparison.
    #[must_use]
    pub fn with_ulp_tolerance(mut self, tolerance: u32) -> Self {
        self.ulp_tolerance = tolerance;
        self
    }

    /// Marks the scanned operation as rounding-sensitive.
    #[must_use]
    pub fn with_rounding_directives(mut self, enabled: bool) -> Self {
        self.rounding_directives = enabled;
        self
    }

    /// Sets the precision in force before the first directive.
    #[must_use]
    pub fn with_precision(mut self, precision: u32) -> Self {
        self.precision = precision;
        self
    }

    /// Returns the default starting precision.
    fn default_precision() -> u32 {
        defaults::PRECISION
    }
}
