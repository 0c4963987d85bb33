//! Local resource resolution for the rendered view
//!
//! Markdown documents reference images by relative path, platform
//! absolute path, file URI, or remote/embedded address. The rendering
//! sandbox can only load addresses the host converter has blessed, so
//! image destinations are rewritten before the preview sees the text.
//! Resolution never fails loudly: an unresolvable reference is left as
//! written and stays visually broken instead of breaking the view.

mod resolver;
mod rewrite;

pub use resolver::{resolve, Resolved};
pub use rewrite::rewrite_images;
