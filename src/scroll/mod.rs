//! Scroll coordination between views
//!
//! Aligns the target view to an anchor after a mode switch or an outline
//! jump. The rendered view's layout may not be settled when the
//! transition lands, so alignment is attempted on a bounded retry
//! schedule; the scroll ratio is the fallback once attempts run out.
//! Scroll assignment is idempotent, so a retry superseded by a newer
//! transition is harmless.

use crate::anchor::{scroll_ratio, Anchor};
use crate::host::Host;
use crate::model::{PendingAlign, RatioMemory, ViewMode};
use crate::outline::HeadingEntry;

/// Default layout units between the container top and an aligned
/// heading's top edge.
pub const DEFAULT_ALIGN_OFFSET: f32 = 100.0;

/// Retry delays after the immediate attempt. Empirical tuning, not a
/// contract; together they span roughly half a second.
pub const RETRY_DELAYS_MS: [u64; 3] = [80, 160, 240];

/// How long the transient navigation highlight stays visible.
pub const FLASH_CLEAR_MS: u64 = 1000;

/// Outcome of one alignment attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignOutcome {
    /// A heading matched and was scrolled into place; retries stop.
    /// `flash` is set when the target view shows a highlight.
    Matched { flash: bool },
    /// No heading match; the ratio fallback was applied and retries
    /// may continue
    Fallback,
}

/// Pick a heading index for an anchor.
///
/// Preference order: (a) same ordinal position, (b) exact text equality,
/// (c) substring containment in either direction. Ordinal-first is the
/// policy that disambiguates duplicate heading text; text matching only
/// applies when the target list is too short for the ordinal.
pub fn match_heading(texts: &[&str], anchor_text: &str, ordinal: usize) -> Option<usize> {
    if ordinal < texts.len() {
        return Some(ordinal);
    }
    if let Some(idx) = texts.iter().position(|t| *t == anchor_text) {
        return Some(idx);
    }
    texts
        .iter()
        .position(|t| t.contains(anchor_text) || anchor_text.contains(t))
}

/// One alignment attempt against the target view.
///
/// Applies either the heading alignment or the ratio fallback; never
/// fails. The caller decides whether to retry based on the outcome.
pub fn apply_attempt(
    host: &mut dyn Host,
    headings: &[HeadingEntry],
    ratio_memory: &RatioMemory,
    pending: &PendingAlign,
    align_offset: f32,
) -> AlignOutcome {
    match pending.target {
        ViewMode::Rendered => apply_to_rendered(host, ratio_memory, pending, align_offset),
        ViewMode::Source => apply_to_source(host, headings, ratio_memory, pending),
    }
}

fn apply_to_rendered(
    host: &mut dyn Host,
    ratio_memory: &RatioMemory,
    pending: &PendingAlign,
    align_offset: f32,
) -> AlignOutcome {
    if let Anchor::Heading { text, ordinal, .. } = &pending.anchor {
        let boxes = host.render().heading_boxes();
        let texts: Vec<&str> = boxes.iter().map(|b| b.text.as_str()).collect();
        if let Some(idx) = match_heading(&texts, text, *ordinal) {
            let top = boxes[idx].top;
            let render = host.render();
            let range = render.scrollable_range().max(0.0);
            render.set_scroll_offset((top - align_offset).clamp(0.0, range));
            render.flash_heading(idx);
            tracing::debug!(heading = %text, idx, "aligned rendered view to heading");
            return AlignOutcome::Matched { flash: true };
        }
    }

    let ratio = fallback_ratio(&pending.anchor, ratio_memory, pending.target);
    let render = host.render();
    let range = render.scrollable_range().max(0.0);
    render.set_scroll_offset((ratio * range).round());
    AlignOutcome::Fallback
}

fn apply_to_source(
    host: &mut dyn Host,
    headings: &[HeadingEntry],
    ratio_memory: &RatioMemory,
    pending: &PendingAlign,
) -> AlignOutcome {
    if let Anchor::Heading { text, ordinal, .. } = &pending.anchor {
        let texts: Vec<&str> = headings.iter().map(|h| h.text.as_str()).collect();
        if let Some(idx) = match_heading(&texts, text, *ordinal) {
            let line = headings[idx].line;
            let source = host.source();
            source.set_cursor_line(line);
            source.reveal_line(line);
            tracing::debug!(heading = %text, line, "aligned source view to heading");
            return AlignOutcome::Matched { flash: false };
        }
    }

    let ratio = fallback_ratio(&pending.anchor, ratio_memory, pending.target);
    let source = host.source();
    let range = source.scrollable_range().max(0.0);
    source.set_scroll_offset((ratio * range).round());
    AlignOutcome::Fallback
}

/// Ratio used when no heading alignment is available: the anchor's own
/// ratio, or the target mode's remembered ratio for heading anchors.
fn fallback_ratio(anchor: &Anchor, memory: &RatioMemory, target: ViewMode) -> f32 {
    match anchor {
        Anchor::Ratio(ratio) => *ratio,
        Anchor::Heading { .. } => memory.get(target),
    }
}

/// Refresh the target mode's remembered ratio from the position actually
/// applied. Runs after every attempt, independent of the anchor kind.
pub fn refresh_ratio_memory(host: &mut dyn Host, memory: &mut RatioMemory, target: ViewMode) {
    let (offset, range) = match target {
        ViewMode::Rendered => {
            let render = host.render();
            (render.scroll_offset(), render.scrollable_range())
        }
        ViewMode::Source => {
            let source = host.source();
            (source.scroll_offset(), source.scrollable_range())
        }
    };
    memory.set(target, scroll_ratio(offset, range));
}
