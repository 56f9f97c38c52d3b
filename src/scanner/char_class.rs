//! Character classification

use serde::Serialize;
use std::fmt;

/// Semantic class of a single character
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CharClass {
    /// Alphabetic character in any script
    Word,
    /// Space, tab or newline
    Whitespace,
    /// One of `, ; : . ! ?`
    Punctuation,
    /// Digits, symbols, quotes and everything else
    Other,
    /// End of input; never carried by a token
    End,
}

impl fmt::Display for CharClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharClass::Word => write!(f, "word"),
            CharClass::Whitespace => write!(f, "whitespace"),
            CharClass::Punctuation => write!(f, "punctuation"),
            CharClass::Other => write!(f, "other"),
            CharClass::End => write!(f, "end"),
        }
    }
}

/// Classification rules
///
/// The default treats `\r` as [`CharClass::Other`], so text with CRLF line
/// endings never contains a paragraph break. Setting
/// `carriage_return_is_whitespace` folds `\r` into whitespace runs instead.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Classifier {
    pub carriage_return_is_whitespace: bool,
}

impl Classifier {
    /// Rules that accept `\r\n` line endings
    pub const fn crlf() -> Self {
        Self {
            carriage_return_is_whitespace: true,
        }
    }

    /// Classify one character; `None` is end of input
    pub fn classify(&self, c: Option<char>) -> CharClass {
        match c {
            None => CharClass::End,
            Some(c) if c.is_alphabetic() => CharClass::Word,
            Some(' ' | '\t' | '\n') => CharClass::Whitespace,
            Some('\r') if self.carriage_return_is_whitespace => CharClass::Whitespace,
            Some(',' | ';' | ':' | '.' | '!' | '?') => CharClass::Punctuation,
            Some(_) => CharClass::Other,
        }
    }
}

/// Classify with the default rules
pub fn classify(c: Option<char>) -> CharClass {
    Classifier::default().classify(c)
}

/// Whether `c` can end a sentence
pub fn is_sentence_terminator(c: char) -> bool {
    matches!(c, '.' | '!' | '?')
}

#[cfg(test)]
#[path = "char_class_tests.rs"]
mod char_class_tests;
