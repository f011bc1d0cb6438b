//! Raw-line cleanup and filtering ahead of classification.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref WHITESPACE_RUN: Regex = Regex::new(r"\s+").unwrap();
    /// Document headers that carry metadata, not observations.
    static ref HEADER_LINE: Regex =
        Regex::new(r"^(?:inspection date|thermal scan date|property)\b").unwrap();
}

/// Strips leading/trailing bullet characters and collapses internal
/// whitespace runs to single spaces.
pub fn normalize_line(raw: &str) -> String {
    let trimmed = raw.trim_matches(|c: char| matches!(c, ' ' | '-' | '•' | '\t'));
    WHITESPACE_RUN.replace_all(trimmed, " ").trim().to_string()
}

/// Splits raw document text into candidate statements, in original order.
/// Lines shorter than `min_len` characters and document-header lines are
/// discarded.
pub fn candidate_statements(text: &str, min_len: usize) -> Vec<String> {
    text.lines()
        .map(normalize_line)
        .filter(|line| line.chars().count() >= min_len)
        .filter(|line| !HEADER_LINE.is_match(&line.to_lowercase()))
        .collect()
}
