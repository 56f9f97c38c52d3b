use crate::scanner::{CharClass, Token};

/// Where the aggregator stands relative to the current sentence
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SentenceState {
    /// No open sentence and no sentence just closed
    #[default]
    Idle,
    /// At least one word since the last terminator
    InSentence,
    /// A terminator was the last non-whitespace token
    JustEnded,
}

/// What a token means to the sentence state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenEvent {
    Word,
    /// Punctuation containing `.`, `!` or `?`
    Terminator,
    /// Whitespace with two or more newlines
    ParagraphBreak,
    Whitespace,
    /// Anything else, including `, ; :` runs
    Other,
}

/// Side effect of a transition on the running counts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Unchanged,
    CountWord,
    EndSentence,
    EndParagraph,
    DiscardSentenceWords,
}

impl TokenEvent {
    pub fn of(token: &Token) -> Self {
        match token.class {
            CharClass::Word => TokenEvent::Word,
            CharClass::Punctuation if token.ends_sentence() => TokenEvent::Terminator,
            CharClass::Whitespace if token.is_paragraph_break() => TokenEvent::ParagraphBreak,
            CharClass::Whitespace => TokenEvent::Whitespace,
            CharClass::Punctuation | CharClass::Other | CharClass::End => TokenEvent::Other,
        }
    }
}

impl SentenceState {
    pub fn transition(self, event: TokenEvent) -> (SentenceState, Effect) {
        use SentenceState::*;

        match (self, event) {
            (_, TokenEvent::Word) => (InSentence, Effect::CountWord),

            (InSentence, TokenEvent::Terminator) => (JustEnded, Effect::EndSentence),
            // A terminator with no words before it is ordinary punctuation
            (Idle | JustEnded, TokenEvent::Terminator) => (Idle, Effect::Unchanged),

            (JustEnded, TokenEvent::ParagraphBreak) => (Idle, Effect::EndParagraph),
            (state, TokenEvent::ParagraphBreak) => (state, Effect::DiscardSentenceWords),

            (state, TokenEvent::Whitespace) => (state, Effect::Unchanged),

            (JustEnded, TokenEvent::Other) => (Idle, Effect::Unchanged),
            (state, TokenEvent::Other) => (state, Effect::Unchanged),
        }
    }
}

#[cfg(test)]
#[path = "sentence_state_tests.rs"]
mod sentence_state_tests;
