//! Catalog of supported marker syntaxes.

use crate::error::{MarkingError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A delimiter pair used to mark words in raw text.
///
/// Serialized as its id (`"*"`, `"[]"`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MarkerSyntax {
    #[serde(rename = "*")]
    Asterisk,
    #[serde(rename = "[]")]
    Bracket,
    #[serde(rename = "{}")]
    Brace,
    #[serde(rename = "<>")]
    Angle,
    #[serde(rename = "**")]
    DoubleAsterisk,
    #[serde(rename = "__")]
    DoubleUnderscore,
}

impl Default for MarkerSyntax {
    fn default() -> Self {
        Self::Asterisk
    }
}

impl MarkerSyntax {
    /// Every supported syntax, in catalog order.
    pub const ALL: [MarkerSyntax; 6] = [
        Self::Asterisk,
        Self::Bracket,
        Self::Brace,
        Self::Angle,
        Self::DoubleAsterisk,
        Self::DoubleUnderscore,
    ];

    /// Catalog id, as supplied by callers.
    pub fn id(self) -> &'static str {
        match self {
            Self::Asterisk => "*",
            Self::Bracket => "[]",
            Self::Brace => "{}",
            Self::Angle => "<>",
            Self::DoubleAsterisk => "**",
            Self::DoubleUnderscore => "__",
        }
    }

    pub fn start(self) -> &'static str {
        match self {
            Self::Asterisk => "*",
            Self::Bracket => "[",
            Self::Brace => "{",
            Self::Angle => "<",
            Self::DoubleAsterisk => "**",
            Self::DoubleUnderscore => "__",
        }
    }

    pub fn end(self) -> &'static str {
        match self {
            Self::Asterisk => "*",
            Self::Bracket => "]",
            Self::Brace => "}",
            Self::Angle => ">",
            Self::DoubleAsterisk => "**",
            Self::DoubleUnderscore => "__",
        }
    }

    /// Character a captured word may not contain. A marked span ends at the
    /// first occurrence of it.
    pub fn excluded(self) -> char {
        match self {
            Self::Asterisk | Self::DoubleAsterisk => '*',
            Self::Bracket => ']',
            Self::Brace => '}',
            Self::Angle => '>',
            Self::DoubleUnderscore => '_',
        }
    }

    /// Human-readable name for pickers.
    pub fn label(self) -> &'static str {
        match self {
            Self::Asterisk => "Asterisks (*word*)",
            Self::Bracket => "Brackets [word]",
            Self::Brace => "Braces {word}",
            Self::Angle => "Angle brackets <word>",
            Self::DoubleAsterisk => "Double asterisks **word**",
            Self::DoubleUnderscore => "Double underscores __word__",
        }
    }

    /// Whether the start and end delimiters are the same string.
    pub fn is_symmetric(self) -> bool {
        self.start() == self.end()
    }

    /// Characters removed from the text when one marked span is stripped.
    pub fn delimiter_chars(self) -> usize {
        self.start().chars().count() + self.end().chars().count()
    }

    /// Look up a syntax by its catalog id.
    pub fn from_id(id: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|syntax| syntax.id() == id)
            .ok_or_else(|| MarkingError::UnknownMarker {
                id: id.to_string(),
                supported: Self::ALL.map(Self::id).join(", "),
            })
    }
}

impl FromStr for MarkerSyntax {
    type Err = MarkingError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_id(s)
    }
}

impl fmt::Display for MarkerSyntax {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_by_id() {
        assert_eq!(MarkerSyntax::from_id("*").unwrap(), MarkerSyntax::Asterisk);
        assert_eq!(MarkerSyntax::from_id("[]").unwrap(), MarkerSyntax::Bracket);
        assert_eq!("__".parse::<MarkerSyntax>().unwrap(), MarkerSyntax::DoubleUnderscore);
    }

    #[test]
    fn every_id_round_trips() {
        for syntax in MarkerSyntax::ALL {
            assert_eq!(MarkerSyntax::from_id(syntax.id()).unwrap(), syntax);
        }
    }

    #[test]
    fn reject_unknown_id() {
        let err = MarkerSyntax::from_id("##").unwrap_err();
        match err {
            MarkingError::UnknownMarker { id, supported } => {
                assert_eq!(id, "##");
                assert_eq!(supported, "*, [], {}, <>, **, __");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn excluded_char_starts_the_end_delimiter() {
        for syntax in MarkerSyntax::ALL {
            assert!(syntax.end().starts_with(syntax.excluded()), "{syntax}");
        }
    }

    #[test]
    fn symmetric_syntaxes() {
        assert!(MarkerSyntax::Asterisk.is_symmetric());
        assert!(MarkerSyntax::DoubleAsterisk.is_symmetric());
        assert!(!MarkerSyntax::Bracket.is_symmetric());
        assert_eq!(MarkerSyntax::DoubleUnderscore.delimiter_chars(), 4);
    }

    #[test]
    fn serializes_as_id() {
        let json = serde_json::to_string(&MarkerSyntax::Brace).unwrap();
        assert_eq!(json, "\"{}\"");
        let back: MarkerSyntax = serde_json::from_str("\"<>\"").unwrap();
        assert_eq!(back, MarkerSyntax::Angle);
    }
}
