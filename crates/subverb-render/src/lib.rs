//! # subverb-render
//!
//! Template rendering for the help and usage screens of `subverb` tools.
//!
//! The dispatcher treats rendering as a collaborator with one job: turn a
//! named template and a serializable value into text, or fail. This crate
//! provides that collaborator on top of [MiniJinja](https://docs.rs/minijinja)
//! and the filters help templates need.
//!
//! ## Quick Start
//!
//! ```rust
//! use subverb_render::{Templates, TemplateEngine, USAGE};
//! use serde_json::json;
//!
//! let templates = Templates::new().usage(
//!     "usage: {{ program }} [command]\n\
//!      {% for cmd in commands %}  {{ cmd.name | pad_right(6) }}# {{ cmd.short | capitalize }}\n{% endfor %}",
//! );
//! let engine = templates.compile().unwrap();
//!
//! let data = json!({
//!     "program": "tool",
//!     "commands": [{ "name": "hey", "short": "says hey" }],
//!     "topics": [],
//! });
//! let out = engine.render_named(USAGE, &data).unwrap();
//! assert_eq!(out, "usage: tool [command]\n  hey   # Says hey\n");
//! ```
//!
//! ## Filters
//!
//! | Filter | Example | Effect |
//! |--------|---------|--------|
//! | `trim` | `{{ long \| trim }}` | strip surrounding whitespace |
//! | `capitalize` | `{{ short \| capitalize }}` | upper-case the first character only |
//! | `pad_right` | `{{ name \| pad_right(14) }}` | left-align in a 14-column cell |
//!
//! Undefined values are errors: a template that refers to a field its data
//! does not carry fails to render instead of printing a blank.

mod error;
pub mod template;
mod util;

pub use error::RenderError;
pub use template::{
    register_filters, MiniJinjaEngine, TemplateEngine, Templates, COMMAND, TOPIC, USAGE,
};
pub use util::{capitalize, display_width, pad_right};
