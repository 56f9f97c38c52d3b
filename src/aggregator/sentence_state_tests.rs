//! Tests for the sentence state machine

use super::*;
use SentenceState::*;

const ALL_STATES: [SentenceState; 3] = [Idle, InSentence, JustEnded];

#[test]
fn test_word_always_opens_sentence() {
    for state in ALL_STATES {
        assert_eq!(
            state.transition(TokenEvent::Word),
            (InSentence, Effect::CountWord)
        );
    }
}

#[test]
fn test_terminator_closes_open_sentence() {
    assert_eq!(
        InSentence.transition(TokenEvent::Terminator),
        (JustEnded, Effect::EndSentence)
    );
}

#[test]
fn test_terminator_without_open_sentence_is_plain_punctuation() {
    assert_eq!(Idle.transition(TokenEvent::Terminator), (Idle, Effect::Unchanged));
    assert_eq!(
        JustEnded.transition(TokenEvent::Terminator),
        (Idle, Effect::Unchanged)
    );
}

#[test]
fn test_paragraph_break_after_sentence_ends_paragraph() {
    assert_eq!(
        JustEnded.transition(TokenEvent::ParagraphBreak),
        (Idle, Effect::EndParagraph)
    );
}

#[test]
fn test_paragraph_break_elsewhere_discards_words() {
    assert_eq!(
        InSentence.transition(TokenEvent::ParagraphBreak),
        (InSentence, Effect::DiscardSentenceWords)
    );
    assert_eq!(
        Idle.transition(TokenEvent::ParagraphBreak),
        (Idle, Effect::DiscardSentenceWords)
    );
}

#[test]
fn test_plain_whitespace_changes_nothing() {
    for state in ALL_STATES {
        assert_eq!(
            state.transition(TokenEvent::Whitespace),
            (state, Effect::Unchanged)
        );
    }
}

#[test]
fn test_other_token_clears_just_ended() {
    assert_eq!(JustEnded.transition(TokenEvent::Other), (Idle, Effect::Unchanged));
    assert_eq!(
        InSentence.transition(TokenEvent::Other),
        (InSentence, Effect::Unchanged)
    );
    assert_eq!(Idle.transition(TokenEvent::Other), (Idle, Effect::Unchanged));
}

#[test]
fn test_events_from_tokens() {
    let cases = [
        (Token::new(CharClass::Word, "abc"), TokenEvent::Word),
        (Token::new(CharClass::Punctuation, "?!"), TokenEvent::Terminator),
        (Token::new(CharClass::Punctuation, ",;"), TokenEvent::Other),
        (Token::new(CharClass::Whitespace, "\n \n"), TokenEvent::ParagraphBreak),
        (Token::new(CharClass::Whitespace, " \n "), TokenEvent::Whitespace),
        (Token::new(CharClass::Other, "\"42"), TokenEvent::Other),
    ];
    for (token, expected) in cases {
        assert_eq!(TokenEvent::of(&token), expected, "token {:?}", token);
    }
}

#[test]
fn test_default_state_is_idle() {
    assert_eq!(SentenceState::default(), Idle);
}
