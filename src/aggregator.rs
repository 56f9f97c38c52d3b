//! Aggregation of scanner tokens into text statistics
//!
//! A small state machine tracks whether a sentence is open, has just ended,
//! or neither. Sentence terminators close the open sentence; a blank line
//! after a closed sentence closes the paragraph, while a blank line after
//! unterminated words marks those words as a heading.

mod sentence_state;
mod statistics;

pub use sentence_state::{Effect, SentenceState, TokenEvent};
pub use statistics::Statistics;

use crate::error::Result;
use crate::scanner::{Classifier, Scanner, Token};
use crate::source::CharSource;

/// Running totals plus the sentence state for one input
#[derive(Debug, Clone, Default)]
pub struct Aggregator {
    state: SentenceState,
    current_sentence_words: u64,
    stats: Statistics,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> SentenceState {
        self.state
    }

    /// Words seen since the last sentence terminator
    pub fn current_sentence_words(&self) -> u64 {
        self.current_sentence_words
    }

    /// Totals so far, before end-of-input adjustment
    pub fn stats(&self) -> &Statistics {
        &self.stats
    }

    pub fn observe(&mut self, token: &Token) {
        self.stats.characters += token.length;

        let (next, effect) = self.state.transition(TokenEvent::of(token));
        match effect {
            Effect::Unchanged => {}
            Effect::CountWord => {
                self.stats.words += 1;
                self.current_sentence_words += 1;
            }
            Effect::EndSentence => {
                self.stats.sentences += 1;
                self.stats.sentence_words += self.current_sentence_words;
                self.current_sentence_words = 0;
            }
            Effect::EndParagraph => {
                self.stats.paragraphs += 1;
                log::debug!("paragraph {} closed", self.stats.paragraphs);
            }
            Effect::DiscardSentenceWords => {
                if self.current_sentence_words > 0 {
                    log::debug!(
                        "dropping {} unterminated words before blank line",
                        self.current_sentence_words
                    );
                }
                self.current_sentence_words = 0;
            }
        }
        self.state = next;
    }

    /// Apply the end-of-input rule and return the totals
    ///
    /// A sentence that ended right before end of input also ends a
    /// paragraph. Trailing unterminated words stay in `words` only.
    pub fn finish(mut self) -> Statistics {
        if self.state == SentenceState::JustEnded {
            self.stats.paragraphs += 1;
        }
        self.stats
    }
}

/// Aggregate an already-scanned token stream
///
/// The first error in the stream is returned and no partial totals are
/// produced.
pub fn aggregate<I, E>(tokens: I) -> std::result::Result<Statistics, E>
where
    I: IntoIterator<Item = std::result::Result<Token, E>>,
{
    let mut aggregator = Aggregator::new();
    for token in tokens {
        aggregator.observe(&token?);
    }
    Ok(aggregator.finish())
}

/// Scan and aggregate `source` with the default classification rules
pub fn text_statistics<S: CharSource>(source: S) -> Result<Statistics> {
    text_statistics_with(source, Classifier::default())
}

/// Scan and aggregate `source`, reusing a single token buffer
pub fn text_statistics_with<S: CharSource>(
    source: S,
    classifier: Classifier,
) -> Result<Statistics> {
    let mut scanner = Scanner::with_classifier(source, classifier);
    let mut aggregator = Aggregator::new();
    while let Some(token) = scanner.next_token()? {
        aggregator.observe(token);
    }
    Ok(aggregator.finish())
}

#[cfg(test)]
#[path = "aggregator_tests.rs"]
mod aggregator_tests;
