//! Outline message handling (heading navigation)
//!
//! Jumps operate within the active mode. In the source view the caret
//! moves directly to the line; in the rendered view the line is first
//! translated into a heading identity and handed to the alignment
//! machinery, which owns the retry and highlight behavior.

use crate::anchor::Anchor;
use crate::commands::Cmd;
use crate::host::Host;
use crate::messages::OutlineMsg;
use crate::model::{AppModel, ViewMode};
use crate::update::start_align;

pub fn update_outline(model: &mut AppModel, host: &mut dyn Host, msg: OutlineMsg) -> Option<Cmd> {
    match msg {
        OutlineMsg::JumpToLine { line, heading } => {
            jump_to_line(model, host, line, heading.as_deref())
        }
    }
}

fn jump_to_line(
    model: &mut AppModel,
    host: &mut dyn Host,
    line: usize,
    heading: Option<&str>,
) -> Option<Cmd> {
    match model.mode {
        ViewMode::Source => {
            let source = host.source();
            source.set_cursor_line(line);
            source.reveal_line(line);
            source.focus();
            Some(Cmd::Redraw)
        }
        ViewMode::Rendered => {
            let Some(anchor) = jump_anchor(model, line, heading) else {
                tracing::debug!(line, "no heading identity for outline jump");
                return None;
            };
            start_align(model, host, ViewMode::Rendered, anchor)
        }
    }
}

/// Translate an outline line into a heading anchor.
///
/// The index entry at or nearest above the line supplies the ordinal;
/// the panel's text hint wins over the indexed text when both exist.
/// With no index entry the hint alone forces pure text matching.
fn jump_anchor(model: &AppModel, line: usize, hint: Option<&str>) -> Option<Anchor> {
    let entry = model.headings.iter().rev().find(|h| h.line <= line);
    match (entry, hint) {
        (Some(entry), hint) => Some(Anchor::Heading {
            text: hint.unwrap_or(&entry.text).to_string(),
            line: Some(entry.line),
            ordinal: entry.ordinal,
        }),
        (None, Some(hint)) => Some(Anchor::Heading {
            text: hint.to_string(),
            line: None,
            ordinal: usize::MAX,
        }),
        (None, None) => None,
    }
}
