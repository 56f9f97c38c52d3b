use serde::Serialize;
use std::fmt;

/// Counts gathered from one input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct Statistics {
    pub characters: u64,
    pub words: u64,
    /// Words inside completed sentences
    pub sentence_words: u64,
    pub sentences: u64,
    pub paragraphs: u64,
}

impl Statistics {
    /// Labels and values in output order
    pub fn fields(&self) -> [(&'static str, u64); 5] {
        [
            ("characters", self.characters),
            ("words", self.words),
            ("sentence-words", self.sentence_words),
            ("sentences", self.sentences),
            ("paragraphs", self.paragraphs),
        ]
    }

    /// `None` when no sentence was completed
    pub fn mean_sentence_length(&self) -> Option<f64> {
        if self.sentences == 0 {
            return None;
        }
        Some(self.sentence_words as f64 / self.sentences as f64)
    }
}

impl fmt::Display for Statistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (label, value)) in self.fields().iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{} {}", label, value)?;
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "statistics_tests.rs"]
mod statistics_tests;
