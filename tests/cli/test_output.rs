//! Tests for CLI output formatting helpers

use markua_index::cli::output::{colors, format_duration};

#[test]
fn test_format_duration_milliseconds() {
    assert_eq!(format_duration(0.0), "0ms");
    assert_eq!(format_duration(0.042), "42ms");
}

#[test]
fn test_format_duration_seconds() {
    assert_eq!(format_duration(1.0), "1.00s");
    assert_eq!(format_duration(59.5), "59.50s");
}

#[test]
fn test_format_duration_minutes() {
    assert_eq!(format_duration(60.0), "1m 0.0s");
    assert_eq!(format_duration(125.5), "2m 5.5s");
}

#[test]
fn test_colors_keep_text() {
    assert!(colors::file_path("index_words.txt")
        .to_string()
        .contains("index_words.txt"));
    assert!(colors::number("42").to_string().contains("42"));
    assert!(colors::warning("careful").to_string().contains("careful"));
}
