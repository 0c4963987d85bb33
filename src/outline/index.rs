//! Heading recognition and indexing

use super::HeadingEntry;

/// Parse a single line as an ATX heading.
///
/// A heading is 1-6 leading `#` characters, at least one whitespace
/// character, then non-empty text, after trimming the line. Returns the
/// level and the trimmed heading text.
pub fn heading_on_line(line: &str) -> Option<(u8, &str)> {
    let trimmed = line.trim();
    let hashes = trimmed.chars().take_while(|c| *c == '#').count();
    if hashes == 0 || hashes > 6 {
        return None;
    }
    let rest = &trimmed[hashes..];
    if !rest.starts_with(|c: char| c.is_whitespace()) {
        return None;
    }
    let text = rest.trim();
    if text.is_empty() {
        return None;
    }
    Some((hashes as u8, text))
}

/// Index all headings in a document.
///
/// Deterministic, O(number of lines), no side effects. The returned
/// entries have strictly increasing line numbers and ordinals 0..n-1 in
/// document order.
pub fn index(text: &str) -> Vec<HeadingEntry> {
    let mut entries = Vec::new();
    for (i, line) in text.lines().enumerate() {
        if let Some((level, heading)) = heading_on_line(line) {
            entries.push(HeadingEntry {
                level,
                text: heading.to_string(),
                line: i + 1,
                ordinal: entries.len(),
            });
        }
    }
    entries
}
