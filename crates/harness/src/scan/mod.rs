//! decTest line scanning.
//!
//! Two stages, both pure:
//! 1. **[`classify`]:** Decides what a raw line is (comment, directive,
//!    test-vector candidate) before any other processing.
//! 2. **[`parse_vector`]:** Extracts operands and the expected result from a
//!    candidate test line, honoring single-quoted tokens.

pub mod classify;
pub mod vector;

pub use classify::{LineKind, classify};
pub use vector::{Arity, TestVector, parse_vector};
