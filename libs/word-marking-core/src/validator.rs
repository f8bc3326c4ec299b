//! Checks raw text for marker problems before it is accepted.

use crate::marker::MarkerSyntax;
use crate::scanner;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A problem found in raw text.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationIssue {
    #[error("unsupported marker: {id}")]
    UnsupportedMarker { id: String },

    #[error("no marked words found for this marker")]
    NoMarkedWords,

    #[error("unbalanced delimiters: {starts} starts, {ends} ends")]
    UnbalancedDelimiters { starts: usize, ends: usize },

    #[error("empty marked span found")]
    EmptySpan,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub valid: bool,
    pub marked_span_count: usize,
    pub errors: Vec<ValidationIssue>,
}

impl ValidationResult {
    fn from_issues(marked_span_count: usize, errors: Vec<ValidationIssue>) -> Self {
        Self {
            valid: errors.is_empty(),
            marked_span_count,
            errors,
        }
    }

    /// Error descriptions, in the order found.
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// Literal delimiter counts as `(starts, ends)`.
///
/// When both delimiters are the same string each occurrence alternates
/// between opening and closing, so the counts differ only for an odd total.
fn delimiter_counts(raw: &str, syntax: MarkerSyntax) -> (usize, usize) {
    if syntax.is_symmetric() {
        let total = raw.matches(syntax.start()).count();
        (total - total / 2, total / 2)
    } else {
        (
            raw.matches(syntax.start()).count(),
            raw.matches(syntax.end()).count(),
        )
    }
}

/// Check `raw` against `syntax`, collecting every problem found.
pub fn validate(raw: &str, syntax: MarkerSyntax) -> ValidationResult {
    let (spans, empty_pairs) = scanner::scan_with_empty_pairs(raw, syntax);
    let mut errors = Vec::new();

    if spans.is_empty() {
        errors.push(ValidationIssue::NoMarkedWords);
    }

    let (starts, ends) = delimiter_counts(raw, syntax);
    if starts != ends {
        errors.push(ValidationIssue::UnbalancedDelimiters { starts, ends });
    }

    let has_blank_span = spans.iter().any(|span| span.captured.trim().is_empty());
    if has_blank_span || !empty_pairs.is_empty() {
        errors.push(ValidationIssue::EmptySpan);
    }

    ValidationResult::from_issues(spans.len(), errors)
}

/// [`validate`] for a marker given by id; an unknown id is reported as an
/// issue rather than an error.
pub fn validate_id(raw: &str, marker_id: &str) -> ValidationResult {
    match MarkerSyntax::from_id(marker_id) {
        Ok(syntax) => validate(raw, syntax),
        Err(_) => ValidationResult::from_issues(
            0,
            vec![ValidationIssue::UnsupportedMarker {
                id: marker_id.to_string(),
            }],
        ),
    }
}
