//! Update functions for the Elm-style architecture
//!
//! `update` is the single entry point for state changes: it takes the
//! model, the host collaborators, and a message, mutates the model, and
//! returns an optional command for the runtime to execute. The host is
//! passed in by the caller on every dispatch; the core holds no global
//! handles.

mod content;
mod outline;
mod view;

pub(crate) use view::start_align;

use crate::commands::Cmd;
use crate::host::Host;
use crate::messages::Msg;
use crate::model::AppModel;

/// Process a message, returning a command if side effects are needed
pub fn update(model: &mut AppModel, host: &mut dyn Host, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Content(msg) => content::update_content(model, host, msg),
        Msg::View(msg) => view::update_view(model, host, msg),
        Msg::Outline(msg) => outline::update_outline(model, host, msg),
    }
}
