//! Outline navigation in both view modes

mod common;

use common::{shell, TestHost};
use markpad::model::ViewMode;
use markpad::scroll::FLASH_CLEAR_MS;
use markpad::{Msg, Shell};

/// Thirty lines, "Intro" duplicated on lines 1 and 20
fn duplicate_heading_doc() -> String {
    let mut doc = String::new();
    for line in 1..=30 {
        match line {
            1 => doc.push_str("# Intro\n"),
            10 => doc.push_str("# Middle\n"),
            20 => doc.push_str("# Intro\n"),
            _ => doc.push_str("body text\n"),
        }
    }
    doc
}

fn jump(shell: &mut Shell<TestHost>, line: usize, heading: Option<&str>, now: u64) {
    shell.dispatch(Msg::jump_to_line(line, heading), now);
}

#[test]
fn test_source_jump_moves_caret() {
    let mut shell = shell(&duplicate_heading_doc());

    jump(&mut shell, 10, Some("Middle"), 2000);

    assert_eq!(shell.host().source.cursor, 10);
    assert_eq!(shell.host().source.revealed, Some(10));
    assert!(shell.host().source.focused);
    // The rendered widget was never touched
    assert_eq!(shell.host().render.flashed, None);
}

#[test]
fn test_rendered_jump_picks_correct_duplicate() {
    let mut shell = shell(&duplicate_heading_doc());
    shell.dispatch(Msg::switch_mode(ViewMode::Rendered, false), 2000);

    // Jump to the second "Intro": same text as the first, different line
    jump(&mut shell, 20, Some("Intro"), 3000);

    assert_eq!(
        shell.host().render.flashed,
        Some(2),
        "second occurrence by ordinal, not the first text match"
    );
    let range = shell.host().render.range;
    let align_offset = shell.model().config.align_offset;
    let second_intro_top = 19.0 * common::LINE_HEIGHT;
    assert_eq!(
        shell.host().render.offset,
        (second_intro_top - align_offset).clamp(0.0, range)
    );
}

#[test]
fn test_rendered_jump_near_top_clamps_to_zero() {
    let mut shell = shell(&duplicate_heading_doc());
    shell.dispatch(Msg::switch_mode(ViewMode::Rendered, false), 2000);
    shell.host_mut().render.offset = 150.0;

    jump(&mut shell, 1, Some("Intro"), 3000);

    assert_eq!(shell.host().render.flashed, Some(0));
    // Heading top minus the offset would be negative; clamped to the top
    assert_eq!(shell.host().render.offset, 0.0);
}

#[test]
fn test_rendered_jump_highlight_clears() {
    let mut shell = shell(&duplicate_heading_doc());
    shell.dispatch(Msg::switch_mode(ViewMode::Rendered, false), 2000);

    jump(&mut shell, 10, Some("Middle"), 3000);
    assert_eq!(shell.host().render.flashed, Some(1));

    shell.run_due(3000 + FLASH_CLEAR_MS);
    assert_eq!(shell.host().render.flashed, None);
}

#[test]
fn test_jump_between_headings_snaps_to_one_above() {
    let mut shell = shell(&duplicate_heading_doc());
    shell.dispatch(Msg::switch_mode(ViewMode::Rendered, false), 2000);

    // Line 15 is body text between "Middle" (10) and "Intro" (20)
    jump(&mut shell, 15, None, 3000);
    assert_eq!(shell.host().render.flashed, Some(1));
}
