//! Splits clean text into the full word list.
//!
//! A word is a maximal run of alphabetic chars, accented letters included.
//! Digits, apostrophes, hyphens and underscores end a word. Tokens pick up
//! their marking from a marked word only on an exact `(start, end, text)`
//! match, so a marked phrase spanning several tokens stays unmarked here.

use crate::offset::CleanOffset;
use crate::types::Word;

fn is_word_char(c: char) -> bool {
    c.is_alphabetic()
}

/// Tokenize `clean` and flag the tokens that line up with `marked` words.
pub fn tokenize<M: Clone + Default>(clean: &str, marked: &[Word<M>]) -> Vec<Word<M>> {
    let mut words = Vec::new();
    // (char offset, byte offset) of the token being read
    let mut current: Option<(usize, usize)> = None;

    let mut emit = |start: (usize, usize), end: (usize, usize)| {
        let text = &clean[start.1..end.1];
        let start = CleanOffset::new(start.0);
        let end = CleanOffset::new(end.0);
        let word = match marked
            .iter()
            .find(|w| w.start == start && w.end == end && w.text == text)
        {
            Some(hit) => Word {
                text: text.to_string(),
                start,
                end,
                marked: true,
                word_type: hit.word_type.clone(),
                metadata: hit.metadata.clone(),
            },
            None => Word::plain(text, start, end),
        };
        words.push(word);
    };

    let mut chars = 0;
    for (byte, c) in clean.char_indices() {
        match (is_word_char(c), current) {
            (true, None) => current = Some((chars, byte)),
            (false, Some(start)) => {
                emit(start, (chars, byte));
                current = None;
            }
            _ => {}
        }
        chars += 1;
    }
    if let Some(start) = current {
        emit(start, (chars, clean.len()));
    }

    words
}
