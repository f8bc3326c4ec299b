//! Character offsets into raw and clean text.
//!
//! Raw text still carries marker delimiters; clean text has them stripped.
//! The two coordinate spaces differ by the delimiters removed so far, so each
//! gets its own type. Both count chars (Unicode scalar values), not bytes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Range;

/// Char offset into raw (annotated) text.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct RawOffset(usize);

/// Char offset into clean text.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct CleanOffset(usize);

impl RawOffset {
    pub const fn new(chars: usize) -> Self {
        Self(chars)
    }

    pub const fn get(self) -> usize {
        self.0
    }

    pub fn advance(self, chars: usize) -> Self {
        Self(self.0 + chars)
    }

    /// Position in clean text once `stripped` delimiter chars before this
    /// point have been removed.
    pub(crate) fn to_clean(self, stripped: usize) -> CleanOffset {
        CleanOffset(self.0.saturating_sub(stripped))
    }
}

impl CleanOffset {
    pub const fn new(chars: usize) -> Self {
        Self(chars)
    }

    pub const fn get(self) -> usize {
        self.0
    }

    pub fn advance(self, chars: usize) -> Self {
        Self(self.0 + chars)
    }
}

impl fmt::Display for RawOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl fmt::Display for CleanOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Byte index of the `chars`-th char of `text`; the char count itself maps to
/// `text.len()`.
fn byte_index(text: &str, chars: usize) -> Option<usize> {
    text.char_indices()
        .map(|(idx, _)| idx)
        .chain(std::iter::once(text.len()))
        .nth(chars)
}

/// Byte range covering clean chars `[start, end)`, or `None` if the span is
/// inverted or runs past the end of `text`.
pub fn byte_range(text: &str, start: CleanOffset, end: CleanOffset) -> Option<Range<usize>> {
    if start > end {
        return None;
    }
    let from = byte_index(text, start.0)?;
    let to = from + byte_index(&text[from..], end.0 - start.0)?;
    Some(from..to)
}

/// Slice of clean text covering chars `[start, end)`.
pub fn slice(text: &str, start: CleanOffset, end: CleanOffset) -> Option<&str> {
    byte_range(text, start, end).map(|range| &text[range])
}
