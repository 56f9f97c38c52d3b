// Configuration type definitions

use crate::scanner::Classifier;
use clap::ValueEnum;

/// How each result is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// `key value` pairs followed by the mean sentence length
    #[default]
    Text,
    /// One JSON object per input
    Json,
}

/// Options for one run over a set of inputs
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Config {
    pub format: OutputFormat,
    pub classifier: Classifier,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_text_with_classic_rules() {
        let config = Config::default();
        assert_eq!(config.format, OutputFormat::Text);
        assert!(!config.classifier.carriage_return_is_whitespace);
    }

    #[test]
    fn test_output_format_parses_from_flag_values() {
        assert_eq!(OutputFormat::from_str("text", false), Ok(OutputFormat::Text));
        assert_eq!(OutputFormat::from_str("json", false), Ok(OutputFormat::Json));
        assert!(OutputFormat::from_str("yaml", false).is_err());
    }
}
