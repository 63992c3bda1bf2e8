//! Decimal value interfaces.
//!
//! The harness never implements decimal arithmetic itself. It consumes a
//! caller-supplied value type family through two narrow traits:
//! 1. **[`DecimalValue`]:** One representation width — fallible construction
//!    from a literal, NaN classification, raw bit access, and stepping to the
//!    next representable value.
//! 2. **[`DecimalFamily`]:** Ties the three tier types together and carries
//!    the process-wide rounding hook.
//!
//! Operations that fold a decimal into an integer (integral rounding,
//! comparison orderings) declare their result type through [`ScalarResult`].

pub mod tier;

pub use tier::Tier;

use crate::rounding::RoundingMode;
use std::fmt;
use thiserror::Error;

/// Error returned when a decimal implementation rejects a literal.
///
/// Rejection is an expected, counted outcome: conformance suites contain
/// vectors whose whole point is that the literal must not construct.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid decimal literal `{literal}`: {reason}")]
pub struct DecimalParseError {
    /// The literal that was rejected, exactly as extracted from the line.
    pub literal: String,
    /// Implementation-supplied description of the rejection.
    pub reason: String,
}

/// One decimal representation width, as the harness sees it.
///
/// Implementations must use a fixed-width in-memory layout: [`Self::Bits`]
/// is the raw storage of that layout and is the only channel through which
/// NaN payload and sign bits are compared, since ordinary decimal equality
/// treats all NaNs as unordered.
pub trait DecimalValue: Copy + PartialEq + PartialOrd + fmt::Debug + fmt::Display {
    /// Raw fixed-width storage for this tier (`u32`, `u64`, or `u128`).
    type Bits: Copy + Eq + fmt::Debug;

    /// Constructs a value from a decimal literal.
    ///
    /// Returns an error when the implementation rejects the literal. The
    /// harness counts such rejections as invalid tests and moves on; it never
    /// treats them as harness failures.
    fn from_literal(literal: &str) -> Result<Self, DecimalParseError>;

    /// Returns true for any NaN, quiet or signaling, regardless of payload.
    fn is_nan(self) -> bool;

    /// Returns the raw bit pattern of the value.
    fn to_bits(self) -> Self::Bits;

    /// Returns the next representable value in the direction of `toward`.
    ///
    /// Must return `self` unchanged when the two values are equal or either
    /// is NaN; the harness only steps between ordered, distinct values.
    fn next_toward(self, toward: Self) -> Self;
}

/// A non-decimal operation result (integral rounding, comparison orderings).
///
/// Some conformance suites exercise operations that fold a decimal into an
/// integer rather than producing another decimal. Such results are judged by
/// exact equality only; NaN bit patterns and ULP tolerance do not apply.
pub trait ScalarResult: Copy + PartialEq + fmt::Debug + fmt::Display {
    /// Constructs the expected value from the literal after `->`.
    ///
    /// Rejection is counted the same way as a rejected decimal literal: the
    /// vector becomes invalid and the scan continues.
    fn from_expected(literal: &str) -> Result<Self, DecimalParseError>;
}

macro_rules! scalar_result_for_int {
    ($($ty:ty),* $(,)?) => {$(
        impl ScalarResult for $ty {
            fn from_expected(literal: &str) -> Result<Self, DecimalParseError> {
                literal.trim().parse().map_err(|err: std::num::ParseIntError| {
                    DecimalParseError {
                        literal: literal.to_string(),
                        reason: err.to_string(),
                    }
                })
            }
        }
    )*};
}

scalar_result_for_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);

/// The three-tier decimal type family under test.
///
/// Implemented once per decimal library; the driver picks the member type
/// matching the active [`Tier`] for every test line.
pub trait DecimalFamily {
    /// Value type selected for precisions of at most 9 digits.
    type Narrow: DecimalValue;
    /// Value type selected for precisions of 10 to 16 digits.
    type Medium: DecimalValue;
    /// Value type selected for precisions above 16 digits.
    type Wide: DecimalValue;

    /// Applies a rounding mode to all subsequent operation invocations.
    ///
    /// This is the `fesetround` analog of the implementation under test;
    /// the rounding gate calls it for every recognized `rounding:` directive.
    fn set_rounding(mode: RoundingMode);
}
