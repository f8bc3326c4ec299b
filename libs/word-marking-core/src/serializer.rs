//! Writes marked words back into clean text as delimited spans.

use crate::marker::MarkerSyntax;
use crate::offset::{self, CleanOffset};
use crate::types::Word;
use serde::{Deserialize, Serialize};

/// Why a word was left unmarked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "reason", rename_all = "snake_case")]
pub enum SkipReason {
    /// The text at the word's offsets is something else.
    Mismatch { found: String },
    /// The offsets run past the end of the text or are inverted.
    OutOfRange,
    /// The word has no text to wrap.
    Empty,
}

/// A word the serializer could not place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedWord {
    pub text: String,
    pub start: CleanOffset,
    pub end: CleanOffset,
    #[serde(flatten)]
    pub reason: SkipReason,
}

/// Best-effort serialization: the annotated text plus every word left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializeOutcome {
    pub text: String,
    /// In clean-text order.
    pub skipped: Vec<SkippedWord>,
}

impl SerializeOutcome {
    /// True when every marked word made it into the output.
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }
}

/// Wrap each marked word of `words` in `syntax` delimiters.
///
/// Unmarked entries are ignored, so either `marked_words` or `all_words` of a
/// parse result can be passed. Words whose recorded text no longer matches
/// `clean_text` at their offsets are skipped and reported.
pub fn serialize<M>(clean_text: &str, words: &[Word<M>], syntax: MarkerSyntax) -> SerializeOutcome {
    let mut to_mark: Vec<&Word<M>> = words.iter().filter(|w| w.marked).collect();
    // Rightmost first: splicing never shifts a span still to be processed.
    to_mark.sort_by(|a, b| b.start.cmp(&a.start));

    let mut text = clean_text.to_string();
    let mut skipped = Vec::new();

    for word in to_mark {
        let skip = |reason| SkippedWord {
            text: word.text.clone(),
            start: word.start,
            end: word.end,
            reason,
        };

        if word.text.is_empty() {
            skipped.push(skip(SkipReason::Empty));
            continue;
        }
        let Some(range) = offset::byte_range(&text, word.start, word.end) else {
            tracing::warn!(
                start = %word.start,
                end = %word.end,
                expected = %word.text,
                "marked word out of range"
            );
            skipped.push(skip(SkipReason::OutOfRange));
            continue;
        };
        let found = &text[range.clone()];
        if found != word.text {
            tracing::warn!(
                start = %word.start,
                expected = %word.text,
                found = %found,
                "marked word mismatch"
            );
            let found = found.to_string();
            skipped.push(skip(SkipReason::Mismatch { found }));
            continue;
        }

        let replacement = format!("{}{}{}", syntax.start(), word.text, syntax.end());
        text.replace_range(range, &replacement);
    }

    skipped.reverse();
    SerializeOutcome { text, skipped }
}
