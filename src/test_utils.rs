#[cfg(test)]
pub mod test_helpers {
    use crate::aggregator::{Statistics, text_statistics, text_statistics_with};
    use crate::scanner::Classifier;

    /// Statistics for `text` with the default classification rules
    pub fn stats_of(text: &str) -> Statistics {
        text_statistics(text.chars()).expect("in-memory source cannot fail")
    }

    /// Statistics for `text` with `\r` treated as whitespace
    pub fn crlf_stats_of(text: &str) -> Statistics {
        text_statistics_with(text.chars(), Classifier::crlf())
            .expect("in-memory source cannot fail")
    }

    /// Build a `Statistics` in output order
    pub fn counts(
        characters: u64,
        words: u64,
        sentence_words: u64,
        sentences: u64,
        paragraphs: u64,
    ) -> Statistics {
        Statistics {
            characters,
            words,
            sentence_words,
            sentences,
            paragraphs,
        }
    }
}
