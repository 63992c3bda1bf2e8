//! Rounding-mode directives and the skip-state gate.
//!
//! decTest files switch rounding behavior with `rounding:` directives. The
//! harness recognizes four behaviors under five directive tokens:
//!
//! | Token(s)          | Mode            | Description                        |
//! |-------------------|-----------------|------------------------------------|
//! | `floor`, `down`   | Downward        | Round toward negative infinity     |
//! | `ceiling`, `up`   | Upward          | Round toward positive infinity     |
//! | `half_up`         | NearestFromZero | Round to nearest, ties away from 0 |
//! | `half_even`       | NearestEven     | Round to nearest, ties to even     |
//!
//! Any other token puts the gate into a skip state: subsequent test lines for
//! the scanned operator are deferred (parsed but never judged) until the next
//! recognized directive arrives, at which point the deferred count is flushed
//! into the scan's tallies.

use tracing::warn;

/// Rounding behavior a `rounding:` directive can select.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RoundingMode {
    /// Round toward negative infinity (`floor`, `down`).
    Downward,
    /// Round toward positive infinity (`ceiling`, `up`).
    Upward,
    /// Round to nearest, ties away from zero (`half_up`).
    NearestFromZero,
    /// Round to nearest, ties to even (`half_even`); the IEEE default.
    #[default]
    NearestEven,
}

impl RoundingMode {
    /// Parses a directive token.
    ///
    /// Returns `None` for unsupported mode names (e.g. `05up`), which send
    /// the gate into its skip state.
    #[must_use]
    pub fn from_directive(token: &str) -> Option<Self> {
        match token {
            "floor" | "down" => Some(Self::Downward),
            "ceiling" | "up" => Some(Self::Upward),
            "half_up" => Some(Self::NearestFromZero),
            "half_even" => Some(Self::NearestEven),
            _ => None,
        }
    }
}

/// Gate state: either tests run under a mode, or they are being deferred.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum GateState {
    /// Tests run; `mode` is in force process-wide.
    Active(RoundingMode),
    /// Tests are deferred until a recognized directive arrives.
    Skipping {
        /// Test lines deferred since the unsupported directive.
        pending: u64,
    },
}

/// Skip-state machine driven by `rounding:` directives.
///
/// Starts active under the default mode. An unrecognized directive enters
/// the skip state; a recognized one leaves it and reports how many test
/// lines were deferred in between so the driver can account for them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundingGate {
    state: GateState,
}

impl RoundingGate {
    /// Creates a gate in the active state under the default rounding mode.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: GateState::Active(RoundingMode::NearestEven),
        }
    }

    /// Returns true while test lines must be deferred.
    #[must_use]
    pub const fn skipping(&self) -> bool {
        matches!(self.state, GateState::Skipping { .. })
    }

    /// Records one deferred test line. No effect while active.
    pub fn defer(&mut self) {
        if let GateState::Skipping { pending } = &mut self.state {
            *pending += 1;
        }
    }

    /// Handles a `rounding:` directive token.
    ///
    /// A recognized token returns the newly active mode together with the
    /// number of test lines deferred since the skip state began (zero when
    /// the gate was already active). An unrecognized token returns `None`
    /// and enters (or remains in) the skip state; consecutive unrecognized
    /// directives keep accumulating into the same pending count.
    pub fn directive(&mut self, token: &str) -> Option<(RoundingMode, u64)> {
        match RoundingMode::from_directive(token) {
            Some(mode) => {
                let deferred = self.flush();
                self.state = GateState::Active(mode);
                Some((mode, deferred))
            }
            None => {
                warn!(token, "unsupported rounding mode; deferring tests");
                if !self.skipping() {
                    self.state = GateState::Skipping { pending: 0 };
                }
                None
            }
        }
    }

    /// Drains the pending-skip counter, returning how many lines were
    /// deferred. Called on recognized directives and at end of scan.
    pub fn flush(&mut self) -> u64 {
        match self.state {
            GateState::Skipping { pending } => {
                self.state = GateState::Skipping { pending: 0 };
                pending
            }
            GateState::Active(_) => 0,
        }
    }
}

impl Default for RoundingGate {
    fn default() -> Self {
        Self::new()
    }
}
