//! Run-time options
//!
//! There is no configuration file; options come from command-line flags and
//! the defaults reproduce the classic counting rules.

mod types;

pub use types::{Config, OutputFormat};
