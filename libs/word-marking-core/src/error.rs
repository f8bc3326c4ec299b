//! Error types for word-marking-core.

use crate::marker::MarkerSyntax;
use thiserror::Error;

/// Result type alias using MarkingError.
pub type Result<T> = std::result::Result<T, MarkingError>;

/// Errors that stop a parse before it starts.
///
/// Problems found *inside* the text (unbalanced delimiters, empty spans) are
/// reported by the validator, and serializer mismatches are reported per word.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MarkingError {
    #[error("text is required and must not be empty")]
    EmptyText,

    #[error("unsupported marker: {id} (use one of: {supported})")]
    UnknownMarker { id: String, supported: String },

    #[error("marker {marker} configured more than once")]
    DuplicateMarker { marker: MarkerSyntax },

    #[error("at least one marker configuration is required")]
    NoMarkers,
}
