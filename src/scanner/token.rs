use crate::scanner::char_class::{CharClass, is_sentence_terminator};
use serde::Serialize;

/// A maximal run of characters sharing one class
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Token {
    pub class: CharClass,
    pub text: String,
    /// Number of characters in `text`
    pub length: u64,
}

impl Token {
    /// Build a token from a complete run
    pub fn new(class: CharClass, text: impl Into<String>) -> Self {
        let text = text.into();
        let length = text.chars().count() as u64;
        Self {
            class,
            text,
            length,
        }
    }

    pub(crate) fn empty(class: CharClass) -> Self {
        Self {
            class,
            text: String::new(),
            length: 0,
        }
    }

    /// Start a new run, keeping the text allocation
    pub(crate) fn reset(&mut self, class: CharClass) {
        self.class = class;
        self.text.clear();
        self.length = 0;
    }

    pub(crate) fn push(&mut self, c: char) {
        self.text.push(c);
        self.length += 1;
    }

    /// Punctuation run containing at least one of `. ! ?`
    pub fn ends_sentence(&self) -> bool {
        self.class == CharClass::Punctuation && self.text.chars().any(is_sentence_terminator)
    }

    pub fn newline_count(&self) -> usize {
        memchr::memchr_iter(b'\n', self.text.as_bytes()).count()
    }

    /// Whitespace run holding two or more newlines
    pub fn is_paragraph_break(&self) -> bool {
        self.class == CharClass::Whitespace && self.newline_count() >= 2
    }
}

#[cfg(test)]
#[path = "token_tests.rs"]
mod token_tests;
