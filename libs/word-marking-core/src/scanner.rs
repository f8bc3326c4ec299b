//! Span scanning and clean-text production.
//!
//! A marked span is a start delimiter, one or more chars that are not the
//! syntax's excluded char, then the end delimiter. Scanning runs left to
//! right; after a match it resumes right after the end delimiter, otherwise
//! one char later. Spans never nest or overlap.
//!
//! Delimiter chars used as ordinary prose (a literal `*`) will be picked up
//! as markers. That is a property of the syntax, not something the scanner
//! tries to guess around.

use crate::marker::MarkerSyntax;
use crate::offset::RawOffset;
use std::ops::Range;

/// A marked span located in raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawSpan {
    /// Delimiters plus captured text, as written.
    pub full_match: String,
    /// Text between the delimiters, verbatim.
    pub captured: String,
    pub raw_start: RawOffset,
    /// Length of `full_match` in chars.
    pub full_len: usize,
    pub syntax: MarkerSyntax,
    pub(crate) bytes: Range<usize>,
}

impl RawSpan {
    /// Raw offset just past the end delimiter.
    pub fn raw_end(&self) -> RawOffset {
        self.raw_start.advance(self.full_len)
    }

    pub fn captured_len(&self) -> usize {
        self.captured.chars().count()
    }
}

enum Attempt<'a> {
    Span { captured: &'a str, full: &'a str },
    /// Start and end delimiters with nothing between them.
    EmptyPair,
    NoMatch,
}

fn attempt(rest: &str, syntax: MarkerSyntax) -> Attempt<'_> {
    let Some(body) = rest.strip_prefix(syntax.start()) else {
        return Attempt::NoMatch;
    };
    let Some(stop) = body.find(syntax.excluded()) else {
        return Attempt::NoMatch;
    };
    if !body[stop..].starts_with(syntax.end()) {
        return Attempt::NoMatch;
    }
    if stop == 0 {
        return Attempt::EmptyPair;
    }
    let full_len = syntax.start().len() + stop + syntax.end().len();
    Attempt::Span {
        captured: &body[..stop],
        full: &rest[..full_len],
    }
}

/// Walk `raw` once, collecting spans and reporting every empty delimiter pair
/// the walk stops at.
fn walk(raw: &str, syntax: MarkerSyntax, mut on_empty: impl FnMut(RawOffset)) -> Vec<RawSpan> {
    let mut spans = Vec::new();
    let mut byte = 0;
    let mut chars = 0;

    while byte < raw.len() {
        let rest = &raw[byte..];
        match attempt(rest, syntax) {
            Attempt::Span { captured, full } => {
                let full_len = full.chars().count();
                spans.push(RawSpan {
                    full_match: full.to_string(),
                    captured: captured.to_string(),
                    raw_start: RawOffset::new(chars),
                    full_len,
                    syntax,
                    bytes: byte..byte + full.len(),
                });
                byte += full.len();
                chars += full_len;
                continue;
            }
            Attempt::EmptyPair => on_empty(RawOffset::new(chars)),
            Attempt::NoMatch => {}
        }
        let step = rest.chars().next().map_or(1, char::len_utf8);
        byte += step;
        chars += 1;
    }

    spans
}

/// Find every marked span of `syntax` in `raw`, in order.
pub fn scan(raw: &str, syntax: MarkerSyntax) -> Vec<RawSpan> {
    walk(raw, syntax, |_| {})
}

/// Like [`scan`], also returning the raw offsets of empty delimiter pairs
/// (`**`, `[]`) the scan stepped over.
pub(crate) fn scan_with_empty_pairs(
    raw: &str,
    syntax: MarkerSyntax,
) -> (Vec<RawSpan>, Vec<RawOffset>) {
    let mut empty = Vec::new();
    let spans = walk(raw, syntax, |at| empty.push(at));
    (spans, empty)
}

/// Replace each span in `raw` with its captured text. Spans must be in raw
/// order and must not overlap.
pub(crate) fn strip(raw: &str, spans: &[RawSpan]) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut last = 0;
    for span in spans {
        out.push_str(&raw[last..span.bytes.start]);
        out.push_str(&span.captured);
        last = span.bytes.end;
    }
    out.push_str(&raw[last..]);
    out
}

/// Strip the delimiters of every `syntax` span from `raw`, keeping the
/// captured text and everything else untouched.
pub fn clean_text(raw: &str, syntax: MarkerSyntax) -> String {
    strip(raw, &scan(raw, syntax))
}
