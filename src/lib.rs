//! Markpad - markdown editor shell
//!
//! This crate provides the core logic for an editor shell that keeps two
//! live views of one Markdown document aligned: a plain-text source view
//! addressed by line, and a rendered preview addressed by scroll pixels.
//! It implements the Elm Architecture pattern; the rendering widget and
//! editing surface are host collaborators reached through the `host` traits.

pub mod anchor;
pub mod assets;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod host;
pub mod messages;
pub mod model;
pub mod outline;
pub mod runtime;
pub mod scroll;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use commands::Cmd;
pub use config::ShellConfig;
pub use messages::Msg;
pub use model::{AppModel, ViewMode};
pub use runtime::Shell;
