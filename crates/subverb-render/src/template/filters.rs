//! MiniJinja filter registration.
//!
//! Help templates get three text transforms on top of minijinja's
//! built-ins:
//!
//! - `trim` strips surrounding whitespace, so a `long` text written as an
//!   indented raw string can be dropped into a template as-is.
//! - `capitalize` upper-cases the first character only. This replaces the
//!   built-in of the same name, which also lower-cases the rest.
//! - `pad_right(width)` left-aligns a value in a column of `width` cells.

use minijinja::{Environment, Value};

use crate::util::{capitalize, pad_right};

/// Registers the help filters on a minijinja environment.
pub fn register_filters(env: &mut Environment<'static>) {
    env.add_filter("trim", |value: String| -> String {
        value.trim().to_string()
    });

    env.add_filter("capitalize", |value: String| -> String {
        capitalize(&value)
    });

    // {{ cmd.name | pad_right(14) }}
    env.add_filter("pad_right", |value: Value, width: usize| -> String {
        pad_right(&value.to_string(), width)
    });
}
