//! Template compilation and rendering for help screens.
//!
//! - [`TemplateEngine`]: the narrow contract the dispatcher renders through
//! - [`MiniJinjaEngine`]: the minijinja-backed implementation
//! - [`Templates`]: the `usage`, `command` and `topic` templates of a tool
//! - [`filters`]: the `trim`, `capitalize` and `pad_right` filters

mod engine;
pub mod filters;
mod templates;

pub use engine::{MiniJinjaEngine, TemplateEngine};
pub use filters::register_filters;
pub use templates::{Templates, COMMAND, TOPIC, USAGE};
