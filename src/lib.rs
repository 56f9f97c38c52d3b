//! Text statistics: characters, words, sentences and paragraphs
//!
//! Input flows through a [`source::CharSource`], is grouped into runs of a
//! single character class by the [`scanner`], and is folded into
//! [`Statistics`] by the [`aggregator`].

pub mod aggregator;
pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod scanner;
pub mod source;

mod test_utils;

pub use aggregator::{Aggregator, Statistics, aggregate, text_statistics, text_statistics_with};
pub use config::{Config, OutputFormat};
pub use error::{Result, TextStatsError};
pub use scanner::{CharClass, Classifier, Scanner, Token, scan};
pub use source::{CharSource, Utf8Source};
