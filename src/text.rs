//! Decoding of the producer's fixed-length text buffers.
//!
//! Name fields in the shared-memory block are fixed-size byte buffers,
//! NUL-terminated when fully written and garbage-padded when the producer is
//! mid-write or between sessions. Decoding truncates at the first terminator,
//! replaces invalid UTF-8, and drops unprintable characters; an all-invalid
//! buffer decodes to an empty string; a missing name is a normal display
//! condition, never an error.

/// Decode a fixed-length producer text buffer into clean display text.
pub fn decode(raw: &[u8]) -> String {
    let end = raw.iter().position(|&b| b == 0).unwrap_or(raw.len());
    let decoded = String::from_utf8_lossy(&raw[..end]);
    strip_invalid_char(&decoded)
}

/// Remove control and replacement characters from display text.
///
/// Also used on composed strings (track/class combos) whose parts were
/// decoded separately.
pub fn strip_invalid_char(text: &str) -> String {
    text.chars().filter(|&c| !c.is_control() && c != char::REPLACEMENT_CHARACTER).collect()
}
