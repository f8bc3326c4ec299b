//! Parser for marked text.
//!
//! # Format
//! ```text
//! María *estudia* español. Juan *trabaja* mucho.
//! ```
//!
//! Parsing strips the delimiters, records where each marked word sits in the
//! clean text, then tokenizes the clean text into the full word list.

use crate::error::{MarkingError, Result};
use crate::marker::MarkerSyntax;
use crate::offset::{CleanOffset, RawOffset};
use crate::scanner::{self, RawSpan};
use crate::tokenizer;
use crate::types::{MarkerConfig, MultiParseResult, ParseOptions, ParseResult, Word};

/// A marked span moved into clean-text coordinates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CleanSpan {
    pub text: String,
    pub start: CleanOffset,
    pub end: CleanOffset,
    pub syntax: MarkerSyntax,
}

/// Map raw spans to clean offsets.
///
/// Spans are taken in raw order whatever order they arrive in: each span's
/// start is shifted left by the delimiter chars stripped before it. A span
/// overlapping an earlier one is skipped.
pub fn translate(spans: &[RawSpan]) -> Vec<CleanSpan> {
    let mut ordered: Vec<&RawSpan> = spans.iter().collect();
    ordered.sort_by_key(|span| span.raw_start);

    let mut stripped = 0;
    let mut taken_end = RawOffset::new(0);
    let mut clean = Vec::with_capacity(ordered.len());
    for span in ordered {
        if span.raw_start < taken_end {
            tracing::warn!(
                marker = %span.syntax,
                at = %span.raw_start,
                "skipping overlapping span"
            );
            continue;
        }
        let start = span.raw_start.to_clean(stripped);
        let end = start.advance(span.captured_len());
        stripped += span.syntax.delimiter_chars();
        taken_end = span.raw_end();
        clean.push(CleanSpan {
            text: span.captured.clone(),
            start,
            end,
            syntax: span.syntax,
        });
    }
    clean
}

/// Parse marked text into clean text plus word lists.
pub fn parse<M: Clone + Default>(raw: &str, options: &ParseOptions<M>) -> Result<ParseResult<M>> {
    if raw.is_empty() {
        return Err(MarkingError::EmptyText);
    }

    let spans = scanner::scan(raw, options.marker);
    let clean_text = scanner::strip(raw, &spans);
    let marked_words: Vec<Word<M>> = translate(&spans)
        .into_iter()
        .map(|span| {
            Word::marked(
                span.text,
                span.start,
                span.end,
                options.word_type.clone(),
                options.metadata.clone(),
            )
        })
        .collect();
    let all_words = tokenizer::tokenize(&clean_text, &marked_words);

    tracing::debug!(
        total_words = all_words.len(),
        marked_words = marked_words.len(),
        marker = %options.marker,
        word_type = %options.word_type,
        "parsed marked text"
    );

    Ok(ParseResult {
        clean_text,
        all_words,
        marked_words,
        marker: options.marker,
        word_type: options.word_type.clone(),
        instruction: options.effective_instruction(),
    })
}

/// Parse text that uses several marker syntaxes at once, one word type each.
///
/// Spans of all syntaxes are merged in raw order. A span that overlaps one
/// already taken is dropped and counted in `dropped_spans`.
pub fn parse_multiple<M: Clone + Default>(
    raw: &str,
    configs: &[MarkerConfig<M>],
) -> Result<MultiParseResult<M>> {
    if raw.is_empty() {
        return Err(MarkingError::EmptyText);
    }
    if configs.is_empty() {
        return Err(MarkingError::NoMarkers);
    }
    for (idx, config) in configs.iter().enumerate() {
        if configs[..idx].iter().any(|c| c.marker == config.marker) {
            return Err(MarkingError::DuplicateMarker {
                marker: config.marker,
            });
        }
    }

    let mut candidates: Vec<(usize, RawSpan)> = configs
        .iter()
        .enumerate()
        .flat_map(|(idx, config)| {
            scanner::scan(raw, config.marker)
                .into_iter()
                .map(move |span| (idx, span))
        })
        .collect();
    // Stable: ties keep config order.
    candidates.sort_by_key(|(_, span)| span.raw_start);

    let mut owners = Vec::new();
    let mut spans: Vec<RawSpan> = Vec::new();
    let mut dropped_spans = 0;
    for (idx, span) in candidates {
        let overlaps = spans
            .last()
            .is_some_and(|taken| span.raw_start < taken.raw_end());
        if overlaps {
            tracing::warn!(
                marker = %span.syntax,
                at = %span.raw_start,
                text = %span.full_match,
                "dropping overlapping marked span"
            );
            dropped_spans += 1;
            continue;
        }
        owners.push(idx);
        spans.push(span);
    }

    let clean_text = scanner::strip(raw, &spans);
    let marked_words: Vec<Word<M>> = translate(&spans)
        .into_iter()
        .zip(owners)
        .map(|(span, idx)| {
            let config = &configs[idx];
            Word::marked(
                span.text,
                span.start,
                span.end,
                config.word_type.clone(),
                config.metadata.clone(),
            )
        })
        .collect();
    let all_words = tokenizer::tokenize(&clean_text, &marked_words);

    tracing::debug!(
        total_words = all_words.len(),
        marked_words = marked_words.len(),
        markers = configs.len(),
        dropped_spans,
        "parsed multi-marker text"
    );

    Ok(MultiParseResult {
        clean_text,
        all_words,
        marked_words,
        markers: configs.iter().map(|c| c.marker).collect(),
        dropped_spans,
    })
}
