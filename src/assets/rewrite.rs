//! Image reference rewriting
//!
//! Walks the document with pulldown-cmark and rewrites each inline image
//! destination through the resolver. Everything outside the rewritten
//! destinations stays byte-identical, so the preview widget receives the
//! author's text with only the addresses swapped.

use pulldown_cmark::{Event, Options, Parser, Tag};

use super::resolver::{resolve, Resolved};
use crate::host::UrlConverter;

/// Rewrite every image destination in `text` into a loadable address.
///
/// Remote, embedded, and sandbox-native destinations are untouched;
/// unresolvable ones are left as written.
pub fn rewrite_images(
    text: &str,
    base_document_path: Option<&str>,
    converter: &dyn UrlConverter,
) -> String {
    // (byte range of the destination, replacement address)
    let mut edits: Vec<(std::ops::Range<usize>, String)> = Vec::new();

    for (event, range) in Parser::new_ext(text, Options::empty()).into_offset_iter() {
        let Event::Start(Tag::Image { dest_url, .. }) = event else {
            continue;
        };
        if dest_url.is_empty() {
            continue;
        }

        let address = match resolve(&dest_url, base_document_path, converter) {
            Resolved::Converted(addr) => addr,
            // Pass-through and unresolved both leave the text as written
            Resolved::Unchanged(_) | Resolved::Unresolved => continue,
        };
        if address == dest_url.as_ref() {
            continue;
        }

        // Locate the destination inside the tag's raw span. Reference
        // style images resolve through a definition elsewhere and are
        // skipped (the destination is not in this span).
        if let Some(pos) = text[range.clone()].find(dest_url.as_ref()) {
            let start = range.start + pos;
            edits.push((start..start + dest_url.len(), address));
        } else {
            tracing::trace!(dest = %dest_url, "image destination not inline, skipping rewrite");
        }
    }

    if edits.is_empty() {
        return text.to_string();
    }

    edits.sort_by_key(|(range, _)| range.start);

    let mut out = String::with_capacity(text.len());
    let mut cursor = 0;
    for (range, replacement) in edits {
        if range.start < cursor {
            continue;
        }
        out.push_str(&text[cursor..range.start]);
        out.push_str(&replacement);
        cursor = range.end;
    }
    out.push_str(&text[cursor..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    struct PrefixConverter;

    impl UrlConverter for PrefixConverter {
        fn convert(&self, path: &str) -> Option<String> {
            Some(format!("sandbox://files/{path}"))
        }

        fn native_prefixes(&self) -> &[&str] {
            &["sandbox://"]
        }
    }

    #[test]
    fn test_relative_image_rewritten() {
        let text = "# Title\n\n![shot](img/a.png)\n\ntext after\n";
        let out = rewrite_images(text, Some("/docs/note.md"), &PrefixConverter);
        assert_eq!(
            out,
            "# Title\n\n![shot](sandbox://files//docs/img/a.png)\n\ntext after\n"
        );
    }

    #[test]
    fn test_remote_and_data_untouched() {
        let text = "![a](https://example.com/a.png) and ![b](data:image/png;base64,AA==)\n";
        let out = rewrite_images(text, Some("/docs/note.md"), &PrefixConverter);
        assert_eq!(out, text);
    }

    #[test]
    fn test_unresolved_left_as_written() {
        // Relative reference with no base path stays visually broken
        let text = "![a](./pic.png)\n";
        let out = rewrite_images(text, None, &PrefixConverter);
        assert_eq!(out, text);
    }

    #[test]
    fn test_multiple_images_rewritten_in_order() {
        let text = "![a](/one.png) middle ![b](/two.png)";
        let out = rewrite_images(text, None, &PrefixConverter);
        assert_eq!(
            out,
            "![a](sandbox://files//one.png) middle ![b](sandbox://files//two.png)"
        );
    }

    #[test]
    fn test_non_image_text_untouched() {
        let text = "[a link](/not/an/image.md) and `code (/x.png)`\n";
        let out = rewrite_images(text, Some("/docs/note.md"), &PrefixConverter);
        assert_eq!(out, text);
    }
}
