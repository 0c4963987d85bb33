//! Markdown heading extraction
//!
//! Provides the flat heading list consumed by the outline panel and by
//! anchor capture. Only ATX heading lines are structurally recognized;
//! the rest of the document is opaque to the shell.

mod index;

pub use index::{heading_on_line, index};

/// A single heading in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadingEntry {
    /// Heading level, 1..=6
    pub level: u8,
    /// Trimmed heading text
    pub text: String,
    /// 1-based source line number
    pub line: usize,
    /// 0-based rank among all headings in document order.
    /// This is what disambiguates duplicate heading text.
    pub ordinal: usize,
}
