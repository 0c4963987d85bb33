//! View message handling (mode switching, scroll alignment)
//!
//! A mode switch captures an anchor from the outgoing view, flips the
//! widget, and starts an alignment sequence against the incoming view.
//! The incoming layout may not be settled yet, so each attempt that
//! falls back to the ratio schedules another tick; ticks carry the
//! transition's sequence number and a stale tick is dropped on arrival.

use crate::anchor::{self, scroll_ratio, Anchor};
use crate::assets::rewrite_images;
use crate::commands::Cmd;
use crate::host::Host;
use crate::messages::{Msg, ViewMsg};
use crate::model::{AppModel, PendingAlign, ViewMode};
use crate::scroll::{self, AlignOutcome, FLASH_CLEAR_MS, RETRY_DELAYS_MS};

pub fn update_view(model: &mut AppModel, host: &mut dyn Host, msg: ViewMsg) -> Option<Cmd> {
    match msg {
        ViewMsg::SwitchMode {
            mode,
            preserve_position,
        } => switch_mode(model, host, mode, preserve_position),
        ViewMsg::AlignTick { seq } => run_align_attempt(model, host, seq),
        ViewMsg::ClearFlash { seq } => clear_flash(model, host, seq),
    }
}

fn switch_mode(
    model: &mut AppModel,
    host: &mut dyn Host,
    mode: ViewMode,
    preserve_position: bool,
) -> Option<Cmd> {
    if mode == model.mode {
        return None;
    }

    // Remember where the outgoing view was before anything moves
    let (offset, range) = match model.mode {
        ViewMode::Source => {
            let source = host.source();
            (source.scroll_offset(), source.scrollable_range())
        }
        ViewMode::Rendered => {
            let render = host.render();
            (render.scroll_offset(), render.scrollable_range())
        }
    };
    let outgoing_ratio = scroll_ratio(offset, range);
    model.ratio_memory.set(model.mode, outgoing_ratio);

    // With preservation the position carries across proportionally when
    // no heading anchors it; without, the incoming view restores its own
    // remembered spot
    let anchor = if preserve_position {
        match model.mode {
            ViewMode::Source => {
                let caret = host.source().cursor_line();
                anchor::capture_from_source(&model.text, caret, &model.headings, outgoing_ratio)
            }
            ViewMode::Rendered => {
                let boxes = host.render().heading_boxes();
                anchor::capture_from_rendered(&boxes, offset, outgoing_ratio)
            }
        }
    } else {
        Anchor::Ratio(model.ratio_memory.get(mode))
    };

    host.render().set_mode(mode);
    if mode == ViewMode::Rendered {
        let path = host.document_path();
        let rewritten = rewrite_images(&model.text, path.as_deref(), host.converter());
        host.render().set_text(&rewritten);
        if !host.render().request_relayout() {
            tracing::debug!("host declined relayout, aligning against current layout");
        }
    }
    model.mode = mode;

    tracing::debug!(?mode, ?anchor, "switched view mode");
    start_align(model, host, mode, anchor)
}

/// Begin an alignment sequence toward `target`, superseding any
/// in-flight one, and run the immediate attempt.
pub(crate) fn start_align(
    model: &mut AppModel,
    host: &mut dyn Host,
    target: ViewMode,
    anchor: Anchor,
) -> Option<Cmd> {
    let seq = model.next_align_seq();
    model.pending_align = Some(PendingAlign {
        seq,
        target,
        anchor,
        attempt: 0,
    });
    run_align_attempt(model, host, seq)
}

fn run_align_attempt(model: &mut AppModel, host: &mut dyn Host, seq: u64) -> Option<Cmd> {
    let pending = match &model.pending_align {
        Some(pending) if pending.seq == seq => pending.clone(),
        Some(pending) => {
            tracing::debug!(seq, current = pending.seq, "dropping stale alignment tick");
            return None;
        }
        None => return None,
    };

    let outcome = scroll::apply_attempt(
        host,
        &model.headings,
        &model.ratio_memory,
        &pending,
        model.config.align_offset,
    );
    // The remembered ratio follows whatever position was actually applied
    scroll::refresh_ratio_memory(host, &mut model.ratio_memory, pending.target);

    match outcome {
        AlignOutcome::Matched { flash } => {
            model.pending_align = None;
            if flash {
                model.flash_seq = Some(seq);
                Some(Cmd::batch(vec![
                    Cmd::Redraw,
                    Cmd::schedule(FLASH_CLEAR_MS, Msg::View(ViewMsg::ClearFlash { seq })),
                ]))
            } else {
                Some(Cmd::Redraw)
            }
        }
        AlignOutcome::Fallback => {
            if pending.attempt < RETRY_DELAYS_MS.len() {
                let delay = RETRY_DELAYS_MS[pending.attempt];
                if let Some(pending) = model.pending_align.as_mut() {
                    pending.attempt += 1;
                }
                Some(Cmd::batch(vec![
                    Cmd::Redraw,
                    Cmd::schedule(delay, Msg::View(ViewMsg::AlignTick { seq })),
                ]))
            } else {
                tracing::debug!(seq, "alignment attempts exhausted, ratio position stands");
                model.pending_align = None;
                Some(Cmd::Redraw)
            }
        }
    }
}

fn clear_flash(model: &mut AppModel, host: &mut dyn Host, seq: u64) -> Option<Cmd> {
    // A newer transition owns the highlight now
    if model.flash_seq != Some(seq) {
        return None;
    }
    model.flash_seq = None;
    host.render().clear_flash();
    Some(Cmd::Redraw)
}
