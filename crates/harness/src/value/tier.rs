//! Precision-driven representation tier selection.
//!
//! decTest files declare the working precision with `precision:` directives.
//! The harness maps the active precision onto one of three decimal
//! representation widths:
//!
//! | Precision (digits) | Tier   | Typical representation |
//! |--------------------|--------|------------------------|
//! | 1..=9              | Narrow | 32-bit decimal         |
//! | 10..=16            | Medium | 64-bit decimal         |
//! | 17..              | Wide   | 128-bit decimal        |
//!
//! Operand and result literals are reified into the selected tier's value
//! type only at judgment time, never earlier.

/// Decimal representation width selected by the active precision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tier {
    /// 32-bit tier: up to 9 coefficient digits.
    Narrow,
    /// 64-bit tier: up to 16 coefficient digits.
    Medium,
    /// 128-bit tier: more than 16 coefficient digits.
    Wide,
}

impl Tier {
    /// Largest coefficient digit count the narrow tier can represent.
    pub const NARROW_DIGITS: u32 = 9;

    /// Largest coefficient digit count the medium tier can represent.
    pub const MEDIUM_DIGITS: u32 = 16;

    /// Selects the tier for an active precision.
    ///
    /// The thresholds are inclusive: a `precision: 9` directive stays in the
    /// narrow tier, `precision: 16` in the medium tier.
    #[must_use]
    pub const fn for_precision(precision: u32) -> Self {
        if precision <= Self::NARROW_DIGITS {
            Self::Narrow
        } else if precision <= Self::MEDIUM_DIGITS {
            Self::Medium
        } else {
            Self::Wide
        }
    }
}
