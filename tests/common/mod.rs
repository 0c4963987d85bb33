//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use markpad::host::{HeadingBox, Host, RenderSurface, SourceView, UrlConverter};
use markpad::model::ViewMode;
use markpad::outline;
use markpad::{Msg, Shell, ShellConfig};

/// Layout units per rendered line in the fake widget
pub const LINE_HEIGHT: f32 = 20.0;
/// Viewport height of the fake widget
pub const VIEWPORT: f32 = 400.0;

/// Fake rendering widget with a deterministic layout: every line is
/// `LINE_HEIGHT` units tall, headings sit at the top of their line.
/// With `auto_settle` off the layout stays empty after `set_text` until
/// the test calls `settle()`, imitating an asynchronous re-render.
pub struct FakeRender {
    pub mode: ViewMode,
    pub text: String,
    pub offset: f32,
    pub boxes: Vec<HeadingBox>,
    pub range: f32,
    pub flashed: Option<usize>,
    pub auto_settle: bool,
    pub accept_relayout: bool,
    pub relayout_requests: usize,
}

impl FakeRender {
    pub fn new() -> Self {
        Self {
            mode: ViewMode::Source,
            text: String::new(),
            offset: 0.0,
            boxes: Vec::new(),
            range: 0.0,
            flashed: None,
            auto_settle: true,
            accept_relayout: true,
            relayout_requests: 0,
        }
    }

    /// Compute the layout from the current text
    pub fn settle(&mut self) {
        self.boxes = outline::index(&self.text)
            .into_iter()
            .map(|h| HeadingBox {
                text: h.text,
                top: (h.line as f32 - 1.0) * LINE_HEIGHT,
            })
            .collect();
        let lines = self.text.lines().count() as f32;
        self.range = (lines * LINE_HEIGHT - VIEWPORT).max(0.0);
    }
}

impl RenderSurface for FakeRender {
    fn set_mode(&mut self, mode: ViewMode) {
        self.mode = mode;
    }

    fn set_text(&mut self, text: &str) {
        self.text = text.to_string();
        if self.auto_settle {
            self.settle();
        } else {
            // Layout invalidated until the test settles it
            self.boxes.clear();
            self.range = 0.0;
        }
    }

    fn get_text(&self) -> String {
        self.text.clone()
    }

    fn scroll_offset(&self) -> f32 {
        self.offset
    }

    fn scrollable_range(&self) -> f32 {
        self.range
    }

    fn set_scroll_offset(&mut self, offset: f32) {
        self.offset = offset;
    }

    fn heading_boxes(&self) -> Vec<HeadingBox> {
        self.boxes.clone()
    }

    fn flash_heading(&mut self, index: usize) {
        self.flashed = Some(index);
    }

    fn clear_flash(&mut self) {
        self.flashed = None;
    }

    fn request_relayout(&mut self) -> bool {
        self.relayout_requests += 1;
        self.accept_relayout
    }
}

/// Fake editing surface
pub struct FakeSource {
    pub cursor: usize,
    pub revealed: Option<usize>,
    pub focused: bool,
    pub offset: f32,
    pub range: f32,
}

impl FakeSource {
    pub fn new() -> Self {
        Self {
            cursor: 1,
            revealed: None,
            focused: false,
            offset: 0.0,
            range: 1000.0,
        }
    }
}

impl SourceView for FakeSource {
    fn cursor_line(&self) -> usize {
        self.cursor
    }

    fn set_cursor_line(&mut self, line: usize) {
        self.cursor = line;
    }

    fn reveal_line(&mut self, line: usize) {
        self.revealed = Some(line);
    }

    fn focus(&mut self) {
        self.focused = true;
    }

    fn scroll_offset(&self) -> f32 {
        self.offset
    }

    fn scrollable_range(&self) -> f32 {
        self.range
    }

    fn set_scroll_offset(&mut self, offset: f32) {
        self.offset = offset;
    }
}

/// Converter mapping filesystem paths into a fake sandbox URL space
pub struct FakeConverter;

impl UrlConverter for FakeConverter {
    fn convert(&self, path: &str) -> Option<String> {
        Some(format!("app://local/{path}"))
    }

    fn native_prefixes(&self) -> &[&str] {
        &["app://"]
    }

    fn local_content_prefix(&self) -> Option<&str> {
        Some("https://app.localhost")
    }
}

pub struct TestHost {
    pub render: FakeRender,
    pub source: FakeSource,
    pub document_path: Option<String>,
}

impl TestHost {
    pub fn new() -> Self {
        Self {
            render: FakeRender::new(),
            source: FakeSource::new(),
            document_path: None,
        }
    }
}

impl Host for TestHost {
    fn render(&mut self) -> &mut dyn RenderSurface {
        &mut self.render
    }

    fn source(&mut self) -> &mut dyn SourceView {
        &mut self.source
    }

    fn converter(&self) -> &dyn UrlConverter {
        &FakeConverter
    }

    fn document_path(&self) -> Option<String> {
        self.document_path.clone()
    }
}

/// Shell with the given text committed and indexed (clock at 1000ms)
pub fn shell(text: &str) -> Shell<TestHost> {
    let mut shell = Shell::new(TestHost::new(), ShellConfig::default());
    shell.dispatch(Msg::content_changed(text), 0);
    shell.run_due(1000);
    shell
}

/// A document with headings on lines 1, 5, and 10, thirty lines total
pub fn three_heading_doc() -> String {
    let mut doc = String::new();
    for line in 1..=30 {
        match line {
            1 => doc.push_str("# Alpha\n"),
            5 => doc.push_str("## Beta\n"),
            10 => doc.push_str("## Gamma\n"),
            _ => doc.push_str("body text\n"),
        }
    }
    doc
}
