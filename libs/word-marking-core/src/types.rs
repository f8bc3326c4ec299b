//! Core types for word-marking exercises.

use crate::marker::MarkerSyntax;
use crate::offset::CleanOffset;
use serde::{Deserialize, Serialize};

/// Caller-supplied data attached to marked words. Forwarded, never read.
pub type Metadata = serde_json::Map<String, serde_json::Value>;

/// A word located in clean text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Word<M = Metadata> {
    pub text: String,
    pub start: CleanOffset,
    /// Exclusive.
    pub end: CleanOffset,
    pub marked: bool,
    pub word_type: Option<String>,
    pub metadata: M,
}

impl<M> Word<M> {
    /// A word the author wrapped in delimiters.
    pub fn marked(
        text: impl Into<String>,
        start: CleanOffset,
        end: CleanOffset,
        word_type: impl Into<String>,
        metadata: M,
    ) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            marked: true,
            word_type: Some(word_type.into()),
            metadata,
        }
    }

    /// Whether both words cover the same text at the same clean offsets.
    pub fn same_position<N>(&self, other: &Word<N>) -> bool {
        self.start == other.start && self.end == other.end && self.text == other.text
    }

    /// Length in chars. Inverted offsets count as empty.
    pub fn len(&self) -> usize {
        self.end.get().saturating_sub(self.start.get())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<M: Default> Word<M> {
    /// An unmarked word.
    pub fn plain(text: impl Into<String>, start: CleanOffset, end: CleanOffset) -> Self {
        Self {
            text: text.into(),
            start,
            end,
            marked: false,
            word_type: None,
            metadata: M::default(),
        }
    }
}

/// Output of a single-marker parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResult<M = Metadata> {
    pub clean_text: String,
    /// Every word of the clean text, marked or not.
    pub all_words: Vec<Word<M>>,
    /// Only the author-marked spans, in text order.
    pub marked_words: Vec<Word<M>>,
    pub marker: MarkerSyntax,
    pub word_type: String,
    pub instruction: String,
}

impl<M> ParseResult<M> {
    /// Marked spans that no token of `all_words` matches exactly, such as a
    /// marked multi-word phrase. These render as plain text.
    pub fn unaligned_marks(&self) -> Vec<&Word<M>> {
        self.marked_words
            .iter()
            .filter(|marked| !self.all_words.iter().any(|word| word.same_position(*marked)))
            .collect()
    }
}

/// Options for [`crate::parse`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParseOptions<M = Metadata> {
    pub marker: MarkerSyntax,
    /// Label copied onto every marked word.
    pub word_type: String,
    /// Shown to the student. Empty means derive one from `word_type`.
    pub instruction: String,
    /// Copied onto every marked word.
    pub metadata: M,
}

impl<M: Default> Default for ParseOptions<M> {
    fn default() -> Self {
        Self {
            marker: MarkerSyntax::default(),
            word_type: WordType::Generic.as_str().to_string(),
            instruction: String::new(),
            metadata: M::default(),
        }
    }
}

impl<M: Default> ParseOptions<M> {
    /// Options for `marker` with every other field defaulted.
    pub fn new(marker: MarkerSyntax) -> Self {
        Self {
            marker,
            ..Self::default()
        }
    }

    pub fn word_type(mut self, word_type: impl Into<String>) -> Self {
        self.word_type = word_type.into();
        self
    }

    pub fn instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = instruction.into();
        self
    }

    pub fn metadata(mut self, metadata: M) -> Self {
        self.metadata = metadata;
        self
    }

    /// The caller's instruction, or one derived from the word type.
    pub fn effective_instruction(&self) -> String {
        if self.instruction.is_empty() {
            default_instruction(&self.word_type)
        } else {
            self.instruction.clone()
        }
    }
}

/// One syntax in a multi-marker parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerConfig<M = Metadata> {
    pub marker: MarkerSyntax,
    pub word_type: String,
    #[serde(default)]
    pub metadata: M,
}

impl<M: Default> MarkerConfig<M> {
    pub fn new(marker: MarkerSyntax, word_type: impl Into<String>) -> Self {
        Self {
            marker,
            word_type: word_type.into(),
            metadata: M::default(),
        }
    }
}

/// Output of [`crate::parse_multiple`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MultiParseResult<M = Metadata> {
    pub clean_text: String,
    pub all_words: Vec<Word<M>>,
    pub marked_words: Vec<Word<M>>,
    pub markers: Vec<MarkerSyntax>,
    /// Spans dropped because they overlapped an earlier span of another syntax.
    pub dropped_spans: usize,
}

/// Grammatical categories offered to exercise authors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WordType {
    Verb,
    Noun,
    Adjective,
    Adverb,
    Pronoun,
    Article,
    Preposition,
    Conjunction,
    Generic,
}

impl WordType {
    pub const ALL: [WordType; 9] = [
        Self::Verb,
        Self::Noun,
        Self::Adjective,
        Self::Adverb,
        Self::Pronoun,
        Self::Article,
        Self::Preposition,
        Self::Conjunction,
        Self::Generic,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Verb => "verb",
            Self::Noun => "noun",
            Self::Adjective => "adjective",
            Self::Adverb => "adverb",
            Self::Pronoun => "pronoun",
            Self::Article => "article",
            Self::Preposition => "preposition",
            Self::Conjunction => "conjunction",
            Self::Generic => "generic",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|word_type| word_type.as_str() == s)
    }

    /// Plural label used in instructions.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Verb => "verbs",
            Self::Noun => "nouns",
            Self::Adjective => "adjectives",
            Self::Adverb => "adverbs",
            Self::Pronoun => "pronouns",
            Self::Article => "articles",
            Self::Preposition => "prepositions",
            Self::Conjunction => "conjunctions",
            Self::Generic => "marked words",
        }
    }
}

/// Plural label for a word-type string. Unknown types are used verbatim.
pub fn word_type_label(word_type: &str) -> &str {
    WordType::from_str(word_type).map_or(word_type, |known| known.label())
}

/// Instruction shown when the author gives none.
pub fn default_instruction(word_type: &str) -> String {
    format!("Select all the {}", word_type_label(word_type))
}
