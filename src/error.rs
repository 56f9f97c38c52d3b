use thiserror::Error;

/// Errors raised while reading text for statistics
#[derive(Debug, Error)]
pub enum TextStatsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid UTF-8 sequence at byte offset {offset}")]
    InvalidUtf8 { offset: u64 },

    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience alias for library results
pub type Result<T> = std::result::Result<T, TextStatsError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod error_tests;
