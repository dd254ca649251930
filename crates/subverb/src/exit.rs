//! Exit statuses and the injectable exit function.

use std::fmt;

/// A handler completed, or help was rendered.
pub const SUCCESS: i32 = 0;

/// A user-facing failure: no subcommand, unknown subcommand, unknown help
/// topic, too many help arguments, or a handler error.
pub const FAILURE: i32 = 1;

/// A configuration defect: a help template failed to render, or output
/// could not be written.
pub const FATAL: i32 = 2;

/// Terminates the process with a status.
///
/// [`App::run`](crate::App::run) calls this exactly once, after dispatch has
/// finished. Tests swap in a closure that records the status instead.
pub type ExitFn = Box<dyn FnMut(i32)>;

/// The default exit function: [`std::process::exit`].
pub fn process_exit() -> ExitFn {
    Box::new(|status| std::process::exit(status))
}

/// A handler error that ends the command with a specific status.
///
/// Any other error returned from a handler is printed as `error: ...` and
/// exits with [`FAILURE`]. Returning `Exit` prints nothing.
///
/// ```rust
/// use subverb::{Exit, HandlerResult};
///
/// fn check(lang: &str) -> HandlerResult {
///     match lang {
///         "en" | "fr" => Ok(()),
///         _ => Err(Exit(2).into()),
///     }
/// }
/// assert!(check("de").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exit(pub i32);

impl fmt::Display for Exit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "exit status {}", self.0)
    }
}

impl std::error::Error for Exit {}
