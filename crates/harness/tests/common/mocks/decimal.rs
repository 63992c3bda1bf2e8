//! A binary-float decimal family for exercising the harness.
//!
//! The harness only needs construction, NaN classification, raw bits, and
//! representable-value stepping, so `f32`/`f64` newtypes are a faithful
//! stand-in for a real decimal library: they have fixed-width layouts, NaN
//! payloads, and well-defined neighbor values. The wide tier widens its bit
//! pattern to `u128` to prove the harness never assumes one bit width.

use std::cell::RefCell;
use std::fmt;

use dectest_core::{DecimalFamily, DecimalParseError, DecimalValue, RoundingMode};

thread_local! {
    static ROUNDING_LOG: RefCell<Vec<RoundingMode>> = const { RefCell::new(Vec::new()) };
}

/// Drains and returns the rounding modes applied on this thread.
pub fn take_rounding_log() -> Vec<RoundingMode> {
    ROUNDING_LOG.with(|log| log.borrow_mut().drain(..).collect())
}

fn parse_f32(literal: &str) -> Result<f32, DecimalParseError> {
    literal.trim().parse().map_err(|err: std::num::ParseFloatError| DecimalParseError {
        literal: literal.to_string(),
        reason: err.to_string(),
    })
}

fn parse_f64(literal: &str) -> Result<f64, DecimalParseError> {
    literal.trim().parse().map_err(|err: std::num::ParseFloatError| DecimalParseError {
        literal: literal.to_string(),
        reason: err.to_string(),
    })
}

/// Narrow-tier mock value (`f32` layout).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct MockNarrow(pub f32);

impl fmt::Display for MockNarrow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl DecimalValue for MockNarrow {
    type Bits = u32;

    fn from_literal(literal: &str) -> Result<Self, DecimalParseError> {
        parse_f32(literal).map(Self)
    }

    fn is_nan(self) -> bool {
        self.0.is_nan()
    }

    fn to_bits(self) -> u32 {
        self.0.to_bits()
    }

    fn next_toward(self, toward: Self) -> Self {
        if self.0.is_nan() || toward.0.is_nan() || self == toward {
            return self;
        }
        if self.0 < toward.0 {
            Self(self.0.next_up())
        } else {
            Self(self.0.next_down())
        }
    }
}

/// Medium-tier mock value (`f64` layout).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct MockMedium(pub f64);

impl fmt::Display for MockMedium {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl DecimalValue for MockMedium {
    type Bits = u64;

    fn from_literal(literal: &str) -> Result<Self, DecimalParseError> {
        parse_f64(literal).map(Self)
    }

    fn is_nan(self) -> bool {
        self.0.is_nan()
    }

    fn to_bits(self) -> u64 {
        self.0.to_bits()
    }

    fn next_toward(self, toward: Self) -> Self {
        if self.0.is_nan() || toward.0.is_nan() || self == toward {
            return self;
        }
        if self.0 < toward.0 {
            Self(self.0.next_up())
        } else {
            Self(self.0.next_down())
        }
    }
}

/// Wide-tier mock value (`f64` storage, `u128` bit pattern).
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct MockWide(pub f64);

impl fmt::Display for MockWide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl DecimalValue for MockWide {
    type Bits = u128;

    fn from_literal(literal: &str) -> Result<Self, DecimalParseError> {
        parse_f64(literal).map(Self)
    }

    fn is_nan(self) -> bool {
        self.0.is_nan()
    }

    fn to_bits(self) -> u128 {
        u128::from(self.0.to_bits())
    }

    fn next_toward(self, toward: Self) -> Self {
        if self.0.is_nan() || toward.0.is_nan() || self == toward {
            return self;
        }
        if self.0 < toward.0 {
            Self(self.0.next_up())
        } else {
            Self(self.0.next_down())
        }
    }
}

/// Three-tier mock family; records every applied rounding mode.
pub struct MockFamily;

impl DecimalFamily for MockFamily {
    type Narrow = MockNarrow;
    type Medium = MockMedium;
    type Wide = MockWide;

    fn set_rounding(mode: RoundingMode) {
        ROUNDING_LOG.with(|log| log.borrow_mut().push(mode));
    }
}
