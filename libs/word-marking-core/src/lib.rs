//! Word-marking engine for language exercises.
//!
//! Provides:
//! - Parser for text with inline markers (`El *perro* corre`)
//! - Serializer that writes marked words back as delimited text
//! - Validator for unbalanced and empty markers
//! - Shared types (Word, ParseResult, MarkerSyntax, etc.)
//!
//! Offsets on [`Word`] always point into the clean text, never the raw text.

pub mod error;
pub mod marker;
pub mod offset;
pub mod parser;
pub mod scanner;
pub mod serializer;
pub mod tokenizer;
pub mod types;
pub mod validator;

pub use error::{MarkingError, Result};
pub use marker::MarkerSyntax;
pub use offset::{CleanOffset, RawOffset};
pub use parser::{parse, parse_multiple, translate, CleanSpan};
pub use scanner::{clean_text, scan, RawSpan};
pub use serializer::{serialize, SerializeOutcome, SkipReason, SkippedWord};
pub use tokenizer::tokenize;
pub use types::{
    default_instruction, word_type_label, MarkerConfig, Metadata, MultiParseResult, ParseOptions,
    ParseResult, Word, WordType,
};
pub use validator::{validate, validate_id, ValidationIssue, ValidationResult};
