//! Runtime driving the update loop
//!
//! Everything runs on the embedding UI's single event thread. The
//! runtime owns the model and the host collaborators, feeds messages
//! through `update`, and executes the returned commands. Deferred work
//! is a timer queue of messages; the embedder calls `run_due` from its
//! timer source (and `next_due` to know when to wake).

use crate::commands::Cmd;
use crate::config::ShellConfig;
use crate::host::Host;
use crate::messages::Msg;
use crate::model::{AppModel, ViewMode};
use crate::update::update;

/// Timer queue of deferred messages, keyed by an absolute due time in
/// milliseconds. The clock is whatever monotonic source the embedder
/// passes in; the queue only compares values.
#[derive(Debug, Default)]
pub struct Scheduler {
    entries: Vec<Entry>,
    counter: u64,
}

#[derive(Debug)]
struct Entry {
    due_ms: u64,
    /// Insertion order, to keep delivery stable among equal due times
    order: u64,
    msg: Msg,
}

impl Scheduler {
    pub fn schedule(&mut self, now_ms: u64, delay_ms: u64, msg: Msg) {
        self.counter += 1;
        self.entries.push(Entry {
            due_ms: now_ms + delay_ms,
            order: self.counter,
            msg,
        });
    }

    /// Remove and return every message due at `now_ms`, in due order
    pub fn take_due(&mut self, now_ms: u64) -> Vec<Msg> {
        let mut due: Vec<Entry> = Vec::new();
        let mut rest: Vec<Entry> = Vec::new();
        for entry in self.entries.drain(..) {
            if entry.due_ms <= now_ms {
                due.push(entry);
            } else {
                rest.push(entry);
            }
        }
        self.entries = rest;
        due.sort_by_key(|e| (e.due_ms, e.order));
        due.into_iter().map(|e| e.msg).collect()
    }

    /// Earliest pending due time, if any
    pub fn next_due(&self) -> Option<u64> {
        self.entries.iter().map(|e| e.due_ms).min()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The editor shell: model, host collaborators, and the timer queue.
///
/// The embedder constructs it around its own host implementation and
/// forwards UI events as messages via `dispatch`.
pub struct Shell<H: Host> {
    model: AppModel,
    host: H,
    scheduler: Scheduler,
    needs_redraw: bool,
}

impl<H: Host> Shell<H> {
    pub fn new(host: H, config: ShellConfig) -> Self {
        Self {
            model: AppModel::new(config),
            host,
            scheduler: Scheduler::default(),
            needs_redraw: false,
        }
    }

    pub fn model(&self) -> &AppModel {
        &self.model
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// Process one message and execute the resulting command
    pub fn dispatch(&mut self, msg: Msg, now_ms: u64) {
        let cmd = Cmd::from_option(update(&mut self.model, &mut self.host, msg));
        self.run_cmd(cmd, now_ms);
    }

    /// Switch to the other view mode, honoring the configured
    /// position-preservation default
    pub fn toggle_mode(&mut self, now_ms: u64) {
        let mode = match self.model.mode {
            ViewMode::Source => ViewMode::Rendered,
            ViewMode::Rendered => ViewMode::Source,
        };
        let preserve = self.model.config.preserve_position;
        self.dispatch(Msg::switch_mode(mode, preserve), now_ms);
    }

    /// Deliver every timer message due at `now_ms`
    pub fn run_due(&mut self, now_ms: u64) {
        for msg in self.scheduler.take_due(now_ms) {
            self.dispatch(msg, now_ms);
        }
    }

    /// When the embedder should next call `run_due`
    pub fn next_due(&self) -> Option<u64> {
        self.scheduler.next_due()
    }

    /// Consume the pending redraw request, if one accumulated
    pub fn take_redraw(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    fn run_cmd(&mut self, cmd: Cmd, now_ms: u64) {
        match cmd {
            Cmd::None => {}
            Cmd::Redraw => self.needs_redraw = true,
            Cmd::Schedule { delay_ms, msg } => self.scheduler.schedule(now_ms, delay_ms, *msg),
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.run_cmd(cmd, now_ms);
                }
            }
        }
    }
}
