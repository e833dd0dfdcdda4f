// Utility functions
use chrono::{DateTime, Utc};

/// Formats a UTC instant as `YYYY-MM-DDTHH:MM:SSZ`.
pub fn format_utc(ts: DateTime<Utc>) -> String {
    ts.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Lower-cases a key and turns `.` and `-` into `_`.
pub fn to_snake_key(key: &str) -> String {
    key.to_lowercase().replace(['.', '-'], "_")
}

/// Keeps at most `max` characters, never splitting a code point.
pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
