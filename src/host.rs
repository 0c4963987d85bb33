//! Adapter interfaces the embedding host implements
//!
//! The shell drives the rendering widget and the editing surface
//! exclusively through these traits. The contract is fixed here, so no
//! runtime feature probing is needed; the single optional capability is
//! `request_relayout`, which a host may decline.

use crate::model::ViewMode;

/// Position of one rendered heading element.
#[derive(Debug, Clone, PartialEq)]
pub struct HeadingBox {
    /// Heading text as rendered
    pub text: String,
    /// Top edge of the element, in layout units from the top of the
    /// scrollable content (not the visible viewport)
    pub top: f32,
}

/// The rendered (preview) surface of the widget.
pub trait RenderSurface {
    fn set_mode(&mut self, mode: ViewMode);
    /// Replace the text the widget displays
    fn set_text(&mut self, text: &str);
    fn get_text(&self) -> String;

    fn scroll_offset(&self) -> f32;
    /// Scrollable range (content height minus viewport height).
    /// May read 0 while the view has not finished laying out.
    fn scrollable_range(&self) -> f32;
    fn set_scroll_offset(&mut self, offset: f32);

    /// Heading elements currently laid out, in rendered order.
    /// Empty while the re-render after a mode switch has not settled.
    fn heading_boxes(&self) -> Vec<HeadingBox>;

    /// Mark a heading for the transient navigation highlight
    fn flash_heading(&mut self, index: usize);
    fn clear_flash(&mut self);

    /// Ask the widget to force a re-render. Hosts without this
    /// capability return false and the shell skips the refinement.
    fn request_relayout(&mut self) -> bool {
        false
    }
}

/// Cursor/viewport access to the plain-text editing surface.
pub trait SourceView {
    /// 1-based caret line
    fn cursor_line(&self) -> usize;
    fn set_cursor_line(&mut self, line: usize);
    /// Scroll so the given line is visible
    fn reveal_line(&mut self, line: usize);
    fn focus(&mut self);

    fn scroll_offset(&self) -> f32;
    fn scrollable_range(&self) -> f32;
    fn set_scroll_offset(&mut self, offset: f32);
}

/// Host capability mapping a local filesystem path to an address the
/// rendering sandbox is permitted to load. Pure mapping; the shell
/// performs no I/O through it.
pub trait UrlConverter {
    fn convert(&self, path: &str) -> Option<String>;

    /// Scheme prefixes of addresses this converter has already produced.
    /// The resolver passes such addresses through unchanged.
    fn native_prefixes(&self) -> &[&str] {
        &[]
    }

    /// URL-space prefix under which the host serves local content by
    /// embedding an encoded filesystem path, if it does so. Addresses
    /// under this prefix are decoded back to a path and re-resolved.
    fn local_content_prefix(&self) -> Option<&str> {
        None
    }
}

/// Bundle of collaborators handed to `update`.
pub trait Host {
    fn render(&mut self) -> &mut dyn RenderSurface;
    fn source(&mut self) -> &mut dyn SourceView;
    fn converter(&self) -> &dyn UrlConverter;

    /// Persisted document path, when the document has been opened or
    /// saved. Opaque to the shell apart from resource resolution.
    fn document_path(&self) -> Option<String>;
}
