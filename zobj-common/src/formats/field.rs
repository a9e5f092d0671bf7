//! Fixed-width text fields
//!
//! Text is stored as raw bytes starting at offset 0 of the field, with every
//! remaining byte zeroed. No terminator is reserved by the writer itself;
//! the schema limits (field size minus one) are enforced by the callers.

use std::borrow::Cow;

/// Copy `text` into `region`, zero-filling every byte after it.
///
/// Callers are expected to pass text that fits. Text longer than the region
/// is cut at the last character boundary that fits, so the write never
/// leaves the region and never splits a UTF-8 sequence.
pub fn write_field(region: &mut [u8], text: &str) {
    let bytes = truncate_to_boundary(text, region.len()).as_bytes();
    region[..bytes.len()].copy_from_slice(bytes);
    region[bytes.len()..].fill(0);
}

/// Read the text stored in a fixed-width field (up to the first zero byte).
pub fn read_field(region: &[u8]) -> Cow<'_, str> {
    let end = region.iter().position(|&b| b == 0).unwrap_or(region.len());
    String::from_utf8_lossy(&region[..end])
}

/// Longest prefix of `text` that is at most `max_len` bytes and ends on a
/// character boundary.
pub fn truncate_to_boundary(text: &str, max_len: usize) -> &str {
    if text.len() <= max_len {
        return text;
    }
    let mut end = max_len;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    &text[..end]
}
