//! Line classification for decTest input.
//!
//! Classification happens before any other processing and follows a strict
//! precedence: comment marker first (the whole line is dropped, even if a
//! directive or test precedes the marker), then directives, then the
//! operator-token filter for test-vector candidates. Lines carrying other
//! operators fall through to [`LineKind::Ignored`] and are never counted.

/// Marker that begins a comment; a line containing it is dropped entirely.
pub const COMMENT_MARKER: &str = "--";

/// Directive token that updates the active precision.
pub const PRECISION_TOKEN: &str = "precision:";

/// Directive token routed to the rounding gate.
pub const ROUNDING_TOKEN: &str = "rounding:";

/// Category of one raw input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind<'a> {
    /// Comment, blank, unparseable directive, or another operator's test.
    Ignored,
    /// `precision:` directive with the parsed digit count.
    Precision(u32),
    /// `rounding:` directive with the raw mode token.
    Rounding(&'a str),
    /// Candidate test line for the requested operator.
    Test {
        /// Test identifier: the trimmed text before the operator token.
        name: &'a str,
        /// Unparsed region after the operator token (operands and result).
        rest: &'a str,
    },
}

/// Classifies `line` for a scan interested in `operator`.
///
/// The operator matches only as a whole token, i.e. the operator name
/// followed by a space; `add` does not match inside `addx001`.
#[must_use]
pub fn classify<'a>(line: &'a str, operator: &str) -> LineKind<'a> {
    if line.trim().is_empty() || line.contains(COMMENT_MARKER) {
        return LineKind::Ignored;
    }

    if let Some(at) = line.find(PRECISION_TOKEN) {
        return match parse_precision(&line[at + PRECISION_TOKEN.len()..]) {
            Some(digits) => LineKind::Precision(digits),
            None => LineKind::Ignored,
        };
    }

    if let Some(at) = line.find(ROUNDING_TOKEN) {
        return match line[at + ROUNDING_TOKEN.len()..].split_whitespace().next() {
            Some(token) => LineKind::Rounding(token),
            None => LineKind::Ignored,
        };
    }

    if let Some(at) = operator_token_at(line, operator) {
        let name = line[..at].trim();
        let rest = &line[at + operator.len() + 1..];
        return LineKind::Test { name, rest };
    }

    LineKind::Ignored
}

/// Parses the digits immediately following `precision:`, skipping whitespace.
fn parse_precision(after_token: &str) -> Option<u32> {
    let digits = after_token.trim_start();
    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    digits[..end].parse().ok()
}

/// Finds the first occurrence of `operator` followed by a space.
fn operator_token_at(line: &str, operator: &str) -> Option<usize> {
    if operator.is_empty() {
        return None;
    }
    let mut from = 0;
    while let Some(rel) = line[from..].find(operator) {
        let at = from + rel;
        let end = at + operator.len();
        if line.as_bytes().get(end) == Some(&b' ') {
            return Some(at);
        }
        from = at + 1;
    }
    None
}
