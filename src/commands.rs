//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! There is no blocking wait anywhere in the core: anything deferred is a
//! `Schedule` that the runtime's timer queue delivers later.

use crate::messages::Msg;

/// Commands returned by update functions
#[derive(Debug, Clone, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a redraw of the embedding UI
    Redraw,
    /// Deliver a message after a delay on the single event thread
    Schedule { delay_ms: u64, msg: Box<Msg> },
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Create a scheduled message delivery
    pub fn schedule(delay_ms: u64, msg: Msg) -> Self {
        Cmd::Schedule {
            delay_ms,
            msg: Box::new(msg),
        }
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            // Scheduled messages trigger their own redraw when delivered
            Cmd::Schedule { .. } => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Convert Option<Cmd> with None to Cmd::None
    pub fn from_option(opt: Option<Cmd>) -> Self {
        opt.unwrap_or(Cmd::None)
    }
}

// Allow converting Option<Cmd> to Cmd
impl From<Option<Cmd>> for Cmd {
    fn from(opt: Option<Cmd>) -> Self {
        opt.unwrap_or(Cmd::None)
    }
}
