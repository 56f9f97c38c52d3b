//! Command-line front end
//!
//! Each named file is processed independently; a file that cannot be opened
//! or read is reported and the run moves on to the next one.

use crate::aggregator::{Statistics, text_statistics_with};
use crate::config::{Config, OutputFormat};
use crate::error::Result;
use crate::report;
use crate::scanner::Classifier;
use crate::source::Utf8Source;
use clap::Parser;
use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, Parser)]
#[command(
    name = "textstats",
    version,
    about = "Calculates the characters, words, words in sentences, sentences and paragraphs in a given set of files.",
    after_help = "If no files are specified, the program processes standard input."
)]
pub struct Cli {
    /// Files to process
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Treat carriage returns as whitespace so CRLF blank lines end paragraphs
    #[arg(long)]
    pub crlf: bool,
}

impl Cli {
    pub fn config(&self) -> Config {
        Config {
            format: self.format,
            classifier: Classifier {
                carriage_return_is_whitespace: self.crlf,
            },
        }
    }
}

/// Process every input named by `cli`, writing reports to `out`
///
/// Per-file failures are written to `out` and do not stop the run. Errors
/// reading standard input, or writing `out`, are returned.
pub fn run<W: Write>(cli: &Cli, out: &mut W) -> Result<()> {
    let config = cli.config();

    if cli.files.is_empty() {
        log::debug!("reading standard input");
        let stats = statistics_for(io::stdin().lock(), &config)?;
        writeln!(out, "{}", report::render(&stats, config.format, None)?)?;
        return Ok(());
    }

    for path in &cli.files {
        process_file(path, &config, out)?;
    }
    Ok(())
}

fn statistics_for<R: Read>(reader: R, config: &Config) -> Result<Statistics> {
    text_statistics_with(Utf8Source::new(reader), config.classifier)
}

fn process_file<W: Write>(path: &Path, config: &Config, out: &mut W) -> Result<()> {
    let name = path.display().to_string();
    if config.format == OutputFormat::Text {
        writeln!(out, "File: {}", name)?;
    }

    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            log::warn!("open {} failed: {}", name, e);
            let message = format!("Could not open file {}", name);
            return write_failure(out, config.format, &name, &message);
        }
    };

    match statistics_for(file, config) {
        Ok(stats) => {
            log::debug!("{}: {}", name, stats);
            let rendered = report::render(&stats, config.format, Some(name.as_str()))?;
            writeln!(out, "{}", rendered)?;
            Ok(())
        }
        Err(e) => {
            log::warn!("read {} failed: {}", name, e);
            let message = format!("Could not read file {}: {}", name, e);
            write_failure(out, config.format, &name, &message)
        }
    }
}

fn write_failure<W: Write>(
    out: &mut W,
    format: OutputFormat,
    name: &str,
    message: &str,
) -> Result<()> {
    match format {
        OutputFormat::Text => writeln!(out, "{}", message)?,
        OutputFormat::Json => writeln!(out, "{}", report::render_json_failure(name, message)?)?,
    }
    Ok(())
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
