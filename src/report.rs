//! Rendering of statistics for display

use crate::aggregator::Statistics;
use crate::config::OutputFormat;
use crate::error::Result;
use serde::Serialize;

#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    file: Option<&'a str>,
    #[serde(flatten)]
    stats: &'a Statistics,
    #[serde(rename = "mean-sentence-length")]
    mean_sentence_length: Option<f64>,
}

#[derive(Serialize)]
struct JsonFailure<'a> {
    file: &'a str,
    error: &'a str,
}

/// Mean sentence length to two decimals, or `n/a` without sentences
pub fn format_mean(stats: &Statistics) -> String {
    match stats.mean_sentence_length() {
        Some(mean) => format!("{:.2}", mean),
        None => "n/a".to_string(),
    }
}

/// Single-line text report
pub fn render_text(stats: &Statistics) -> String {
    format!("{} Mean sentence length {}", stats, format_mean(stats))
}

/// Compact JSON object, tagged with `file` when the input was named
pub fn render_json(stats: &Statistics, file: Option<&str>) -> Result<String> {
    let report = JsonReport {
        file,
        stats,
        mean_sentence_length: stats.mean_sentence_length(),
    };
    Ok(serde_json::to_string(&report)?)
}

pub fn render(stats: &Statistics, format: OutputFormat, file: Option<&str>) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(stats)),
        OutputFormat::Json => render_json(stats, file),
    }
}

/// JSON object describing an input that could not be processed
pub fn render_json_failure(file: &str, error: &str) -> Result<String> {
    Ok(serde_json::to_string(&JsonFailure { file, error })?)
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;
