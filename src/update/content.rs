//! Content message handling (text commits, debounced reindexing)
//!
//! Every commit bumps the revision and schedules a reindex; a result
//! arriving for an older revision is dropped, so only the newest text is
//! ever indexed. The reindex itself is a wholesale rebuild, never a
//! patch.

use crate::assets::rewrite_images;
use crate::commands::Cmd;
use crate::host::Host;
use crate::messages::{ContentMsg, Msg};
use crate::model::{AppModel, ViewMode};
use crate::outline;

pub fn update_content(model: &mut AppModel, host: &mut dyn Host, msg: ContentMsg) -> Option<Cmd> {
    match msg {
        ContentMsg::Changed(text) => text_changed(model, host, text),
        ContentMsg::IndexReady { revision } => index_ready(model, revision),
    }
}

fn text_changed(model: &mut AppModel, host: &mut dyn Host, text: String) -> Option<Cmd> {
    model.text = text;
    model.revision += 1;

    // The preview shows the committed text, with image destinations
    // already resolved
    if model.mode == ViewMode::Rendered {
        let path = host.document_path();
        let rewritten = rewrite_images(&model.text, path.as_deref(), host.converter());
        host.render().set_text(&rewritten);
    }

    tracing::trace!(revision = model.revision, "content committed, debouncing reindex");
    Some(Cmd::batch(vec![
        Cmd::Redraw,
        Cmd::schedule(
            model.config.index_debounce_ms,
            Msg::Content(ContentMsg::IndexReady {
                revision: model.revision,
            }),
        ),
    ]))
}

fn index_ready(model: &mut AppModel, revision: u64) -> Option<Cmd> {
    if revision != model.revision {
        tracing::debug!(
            revision,
            current = model.revision,
            "discarding stale heading index"
        );
        return None;
    }
    if model.indexed_revision == revision {
        return None;
    }

    model.headings = outline::index(&model.text);
    model.indexed_revision = revision;
    tracing::debug!(
        revision,
        headings = model.headings.len(),
        "heading index rebuilt"
    );
    Some(Cmd::Redraw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::update::testing::StubHost;

    #[test]
    fn test_commit_bumps_revision_and_schedules_reindex() {
        let mut model = AppModel::with_text("# One\n");
        let mut host = StubHost::new();

        let cmd = update_content(
            &mut model,
            &mut host,
            ContentMsg::Changed("# One\n# Two\n".to_string()),
        );

        assert_eq!(model.revision, 2);
        // Index untouched until the debounce fires
        assert_eq!(model.headings.len(), 1);
        let Some(Cmd::Batch(cmds)) = cmd else {
            panic!("expected a batch");
        };
        assert!(cmds
            .iter()
            .any(|c| matches!(c, Cmd::Schedule { delay_ms, .. } if *delay_ms == model.config.index_debounce_ms)));
    }

    #[test]
    fn test_stale_index_result_dropped() {
        let mut model = AppModel::with_text("# One\n");
        let mut host = StubHost::new();

        update_content(&mut model, &mut host, ContentMsg::Changed("# A\n".into()));
        update_content(&mut model, &mut host, ContentMsg::Changed("# A\n# B\n".into()));

        // First commit's debounce fires against a newer revision
        assert!(index_ready(&mut model, 2).is_none());
        assert_eq!(model.headings.len(), 1, "stale result must not reindex");

        // The current revision's debounce does the real work
        assert!(index_ready(&mut model, 3).is_some());
        assert_eq!(model.headings.len(), 2);
        assert_eq!(model.indexed_revision, 3);
    }

    #[test]
    fn test_rendered_mode_refreshes_preview_text() {
        let mut model = AppModel::with_text("");
        model.mode = ViewMode::Rendered;
        let mut host = StubHost::new();
        host.document_path = Some("/docs/note.md".to_string());

        update_content(
            &mut model,
            &mut host,
            ContentMsg::Changed("![a](img/a.png)\n".to_string()),
        );

        assert_eq!(host.render.text, "![a](app://local//docs/img/a.png)\n");
    }

    #[test]
    fn test_source_mode_leaves_preview_alone() {
        let mut model = AppModel::with_text("");
        let mut host = StubHost::new();

        update_content(&mut model, &mut host, ContentMsg::Changed("hi".into()));
        assert!(host.render.text.is_empty());
    }
}
