//! Tests for the scanning layer.

/// Line classification: comments, directives, operator filtering.
pub mod classify;
