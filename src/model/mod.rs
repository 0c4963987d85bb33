//! Core state for the editor shell
//!
//! The model never mutates the document; the editing widget owns the live
//! buffer and the model keeps the latest committed snapshot for indexing
//! and resolution.

use crate::anchor::Anchor;
use crate::config::ShellConfig;
use crate::outline::HeadingEntry;

/// Which of the two document views is active. Exactly one at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    /// Plain-text editing surface, addressed by line/column
    #[default]
    Source,
    /// Formatted preview, addressed by pixel scroll offset
    Rendered,
}

/// Last-observed scroll ratio per view mode.
///
/// Lives only in process memory. A mode that has never been visited
/// reads as 0.0.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RatioMemory {
    source: f32,
    rendered: f32,
}

impl RatioMemory {
    pub fn get(&self, mode: ViewMode) -> f32 {
        match mode {
            ViewMode::Source => self.source,
            ViewMode::Rendered => self.rendered,
        }
    }

    /// Record a ratio, clamped to [0, 1]
    pub fn set(&mut self, mode: ViewMode, ratio: f32) {
        let ratio = ratio.clamp(0.0, 1.0);
        match mode {
            ViewMode::Source => self.source = ratio,
            ViewMode::Rendered => self.rendered = ratio,
        }
    }
}

/// In-flight alignment state for one view transition.
///
/// A newer transition allocates a higher `seq`; ticks carrying a stale
/// `seq` are dropped, so an abandoned retry sequence simply stops having
/// any effect.
#[derive(Debug, Clone)]
pub struct PendingAlign {
    pub seq: u64,
    pub target: ViewMode,
    pub anchor: Anchor,
    /// Attempts performed so far (the immediate attempt counts as 0)
    pub attempt: usize,
}

/// Top-level application state
#[derive(Debug, Clone)]
pub struct AppModel {
    /// Latest committed document text
    pub text: String,
    /// Monotonic revision, bumped on every content commit
    pub revision: u64,
    /// Revision the current heading list was built from
    pub indexed_revision: u64,
    /// Current heading index; recomputed wholesale, never patched
    pub headings: Vec<HeadingEntry>,
    pub mode: ViewMode,
    pub ratio_memory: RatioMemory,
    pub pending_align: Option<PendingAlign>,
    /// Transition whose transient heading highlight is currently showing
    pub flash_seq: Option<u64>,
    /// Monotonic transition counter
    align_seq: u64,
    pub config: ShellConfig,
}

impl AppModel {
    pub fn new(config: ShellConfig) -> Self {
        Self {
            text: String::new(),
            revision: 0,
            indexed_revision: 0,
            headings: Vec::new(),
            mode: ViewMode::default(),
            ratio_memory: RatioMemory::default(),
            pending_align: None,
            flash_seq: None,
            align_seq: 0,
            config,
        }
    }

    /// Create a model with pre-committed, pre-indexed text (for tests)
    pub fn with_text(text: &str) -> Self {
        let mut model = Self::new(ShellConfig::default());
        model.text = text.to_string();
        model.revision = 1;
        model.indexed_revision = 1;
        model.headings = crate::outline::index(text);
        model
    }

    /// Allocate the sequence number for a new transition
    pub fn next_align_seq(&mut self) -> u64 {
        self.align_seq += 1;
        self.align_seq
    }
}
