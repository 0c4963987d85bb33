//! Position anchors bridging line-based and pixel-based addressing
//!
//! An anchor is captured from the outgoing view at the moment a
//! transition begins and consumed once by the scroll coordinator. A
//! heading identity is preferred; the scroll ratio is the fallback when
//! no heading is in reach.

use crate::host::HeadingBox;
use crate::outline::{heading_on_line, HeadingEntry};

/// A captured reference point used to realign one view after a mode switch
#[derive(Debug, Clone, PartialEq)]
pub enum Anchor {
    /// A heading identity. `ordinal` is the primary discriminator when
    /// the same text appears at several locations.
    Heading {
        text: String,
        /// 1-based source line, when captured from the source view
        line: Option<usize>,
        ordinal: usize,
    },
    /// Fraction of the scrollable range, in [0, 1]
    Ratio(f32),
}

/// `clamp(offset / max(1, range), 0, 1)`
pub fn scroll_ratio(offset: f32, range: f32) -> f32 {
    (offset / range.max(1.0)).clamp(0.0, 1.0)
}

/// Capture an anchor from the source view.
///
/// Scans backward from the caret line (inclusive) for the nearest
/// heading-pattern line. The caret above every heading yields a ratio
/// anchor instead.
pub fn capture_from_source(
    text: &str,
    caret_line: usize,
    headings: &[HeadingEntry],
    ratio: f32,
) -> Anchor {
    let lines: Vec<&str> = text.lines().collect();
    let start = caret_line.min(lines.len());

    for line_no in (1..=start).rev() {
        let raw = lines[line_no - 1];
        if let Some((_, heading_text)) = heading_on_line(raw) {
            // Ordinal from the current heading list; if the list is
            // mid-debounce stale, count heading lines above instead
            let ordinal = headings
                .iter()
                .find(|h| h.line == line_no)
                .map(|h| h.ordinal)
                .unwrap_or_else(|| {
                    lines[..line_no - 1]
                        .iter()
                        .filter(|l| heading_on_line(l).is_some())
                        .count()
                });
            return Anchor::Heading {
                text: heading_text.to_string(),
                line: Some(line_no),
                ordinal,
            };
        }
    }

    Anchor::Ratio(ratio)
}

/// Capture an anchor from the rendered view.
///
/// Picks the heading element whose top edge is nearest to the container
/// top, in either direction. No heading elements yields a ratio anchor.
pub fn capture_from_rendered(boxes: &[HeadingBox], scroll_offset: f32, ratio: f32) -> Anchor {
    let mut best: Option<(usize, f32)> = None;
    for (i, heading) in boxes.iter().enumerate() {
        let distance = (heading.top - scroll_offset).abs();
        if best.map_or(true, |(_, d)| distance < d) {
            best = Some((i, distance));
        }
    }

    match best {
        Some((i, _)) => Anchor::Heading {
            text: boxes[i].text.clone(),
            line: None,
            ordinal: i,
        },
        None => Anchor::Ratio(ratio),
    }
}
