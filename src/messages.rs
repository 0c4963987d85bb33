//! Message types for the Elm-style architecture
//!
//! All state changes flow through these message types.

use crate::model::ViewMode;

/// Content messages (text commits, debounced reindexing)
#[derive(Debug, Clone)]
pub enum ContentMsg {
    /// The editing widget committed new text (payload is the full document)
    Changed(String),
    /// Debounce elapsed; rebuild the heading index if `revision` is still current
    IndexReady { revision: u64 },
}

/// View messages (mode transitions, alignment retries)
#[derive(Debug, Clone)]
pub enum ViewMsg {
    /// Switch between the source and rendered views
    SwitchMode {
        mode: ViewMode,
        /// Capture an anchor from the outgoing view and realign the
        /// incoming view to it; without this the incoming view restores
        /// its last remembered scroll ratio
        preserve_position: bool,
    },
    /// Scheduled alignment attempt for the transition identified by `seq`
    AlignTick { seq: u64 },
    /// Clear the transient heading highlight set by transition `seq`
    ClearFlash { seq: u64 },
}

/// Outline panel messages
#[derive(Debug, Clone)]
pub enum OutlineMsg {
    /// Navigate to a heading picked in the outline panel.
    /// Operates within the active mode; never switches modes.
    JumpToLine {
        /// 1-based source line of the heading
        line: usize,
        /// Heading text hint, when the panel has one
        heading: Option<String>,
    },
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    /// Content messages (document text, heading index)
    Content(ContentMsg),
    /// View messages (mode switching, scroll alignment)
    View(ViewMsg),
    /// Outline messages (heading navigation)
    Outline(OutlineMsg),
}

// Convenience constructors for common messages
impl Msg {
    /// Create a content-changed message
    pub fn content_changed(text: impl Into<String>) -> Self {
        Msg::Content(ContentMsg::Changed(text.into()))
    }

    /// Create a mode-switch message
    pub fn switch_mode(mode: ViewMode, preserve_position: bool) -> Self {
        Msg::View(ViewMsg::SwitchMode {
            mode,
            preserve_position,
        })
    }

    /// Create an outline jump message
    pub fn jump_to_line(line: usize, heading: Option<&str>) -> Self {
        Msg::Outline(OutlineMsg::JumpToLine {
            line,
            heading: heading.map(str::to_string),
        })
    }
}
