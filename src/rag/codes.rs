//! Error-code extraction and normalization
//!
//! Alarm codes look like `S-304`, `E101` or `HW-1002`: one or more ASCII
//! letters, an optional hyphen, one or more digits, bounded by word edges.
//! Two spellings of a code are equivalent when they agree after hyphens are
//! removed and letters upper-cased (`s304` == `S-304`).

use std::collections::BTreeSet;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

static ERROR_CODE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Za-z]+-?\d+\b").expect("error-code pattern is a valid regex")
});

/// Every non-overlapping code-like token in `text`, in order, case preserved
pub fn extract_error_codes(text: &str) -> Vec<&str> {
    ERROR_CODE_PATTERN
        .find_iter(text)
        .map(|m| m.as_str())
        .collect()
}

/// Remove hyphens and upper-case
pub fn normalize_code(raw: &str) -> String {
    raw.replace('-', "").to_uppercase()
}

/// A code in normalized form
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ErrorCode(String);

impl ErrorCode {
    pub fn new(raw: &str) -> Self {
        Self(normalize_code(raw))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Substring containment against an already-normalized haystack
    pub fn found_in(&self, normalized_haystack: &str) -> bool {
        normalized_haystack.contains(&self.0)
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Distinct normalized codes mentioned in `text`
pub fn query_codes(text: &str) -> BTreeSet<ErrorCode> {
    extract_error_codes(text)
        .into_iter()
        .map(ErrorCode::new)
        .collect()
}
