//! Scanner turning a character stream into runs of same-class characters
//!
//! The scanner keeps a single character of lookahead. Each token is the
//! maximal run of characters sharing one [`CharClass`]; the end-of-input
//! sentinel closes the stream without producing a token of its own.

mod char_class;
mod token;

pub use char_class::{CharClass, Classifier, classify, is_sentence_terminator};
pub use token::Token;

use crate::error::Result;
use crate::source::CharSource;

/// Lazy token producer over a [`CharSource`]
///
/// [`Scanner::next_token`] lends out a token buffer that is reused between
/// calls. The [`Iterator`] implementation yields owned copies instead.
/// Once the source reports an error the scanner is exhausted.
pub struct Scanner<S> {
    source: S,
    classifier: Classifier,
    lookahead: Option<char>,
    lookahead_class: CharClass,
    primed: bool,
    failed: bool,
    token: Token,
}

/// Scan `source` with the default classification rules
pub fn scan<S: CharSource>(source: S) -> Scanner<S> {
    Scanner::new(source)
}

impl<S: CharSource> Scanner<S> {
    pub fn new(source: S) -> Self {
        Self::with_classifier(source, Classifier::default())
    }

    pub fn with_classifier(source: S, classifier: Classifier) -> Self {
        Self {
            source,
            classifier,
            lookahead: None,
            lookahead_class: CharClass::End,
            primed: false,
            failed: false,
            token: Token::empty(CharClass::Other),
        }
    }

    /// Give back the character source
    pub fn into_source(self) -> S {
        self.source
    }

    /// Scan the next run, borrowing the scanner's token buffer
    ///
    /// Returns `Ok(None)` at end of input and after a previous error.
    pub fn next_token(&mut self) -> Result<Option<&Token>> {
        if self.failed {
            return Ok(None);
        }
        match self.scan_run() {
            Ok(true) => Ok(Some(&self.token)),
            Ok(false) => Ok(None),
            Err(e) => {
                self.failed = true;
                Err(e)
            }
        }
    }

    fn scan_run(&mut self) -> Result<bool> {
        if !self.primed {
            self.advance()?;
            self.primed = true;
        }

        let class = self.lookahead_class;
        if class == CharClass::End {
            return Ok(false);
        }

        self.token.reset(class);
        while self.lookahead_class == class {
            if let Some(c) = self.lookahead {
                self.token.push(c);
            }
            self.advance()?;
        }

        log::trace!("token {} x{}", self.token.class, self.token.length);
        Ok(true)
    }

    fn advance(&mut self) -> Result<()> {
        self.lookahead = self.source.read_char()?;
        self.lookahead_class = self.classifier.classify(self.lookahead);
        Ok(())
    }
}

impl<S: CharSource> Iterator for Scanner<S> {
    type Item = Result<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token().transpose().map(|r| r.cloned())
    }
}

impl<S: CharSource> std::iter::FusedIterator for Scanner<S> {}

#[cfg(test)]
#[path = "scanner_tests.rs"]
mod scanner_tests;
