//! Tests for TextStatsError type

use super::*;

#[test]
fn test_io_error_display() {
    let io_err = std::io::Error::new(std::io::ErrorKind::Other, "disk on fire");
    let error = TextStatsError::from(io_err);
    let msg = error.to_string();
    assert!(msg.contains("IO error"));
    assert!(msg.contains("disk on fire"));
}

#[test]
fn test_io_error_from_std_io_error() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "test error");
    let err = TextStatsError::from(io_err);
    assert!(matches!(err, TextStatsError::Io(_)));
}

#[test]
fn test_invalid_utf8_display_includes_offset() {
    let error = TextStatsError::InvalidUtf8 { offset: 17 };
    assert_eq!(error.to_string(), "Invalid UTF-8 sequence at byte offset 17");
}

#[test]
fn test_error_debug() {
    let error = TextStatsError::InvalidUtf8 { offset: 0 };
    let debug_str = format!("{:?}", error);
    assert!(debug_str.contains("InvalidUtf8"));
}

#[test]
fn test_json_error_from_serde_json() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err = TextStatsError::from(json_err);
    assert!(matches!(err, TextStatsError::Json(_)));
    assert!(err.to_string().starts_with("JSON encoding error"));
}
