//! Command handler types.
//!
//! A handler is the code a subcommand runs. By the time it is called the
//! dispatcher has already matched the command name and parsed the command's
//! flags; the handler receives what is left:
//!
//! - a [`CommandContext`] with the parsed [`ArgMatches`] and the output sink,
//! - the positional arguments that followed the flags.
//!
//! Handlers return a [`HandlerResult`]. `Ok(())` ends the process with
//! status 0; see [`Exit`](crate::Exit) for ending with another status.

use clap::ArgMatches;
use std::fmt;
use std::io::Write;

/// The result type for command handlers.
///
/// Enables use of the `?` operator for error propagation.
pub type HandlerResult = Result<(), anyhow::Error>;

/// Context passed to command handlers.
pub struct CommandContext<'a> {
    program: &'a str,
    name: &'a str,
    usage: &'a str,
    matches: ArgMatches,
    out: &'a mut dyn Write,
}

impl<'a> CommandContext<'a> {
    pub(crate) fn new(
        program: &'a str,
        name: &'a str,
        usage: &'a str,
        matches: ArgMatches,
        out: &'a mut dyn Write,
    ) -> Self {
        Self {
            program,
            name,
            usage,
            matches,
            out,
        }
    }

    /// The program name shown in help output.
    pub fn program(&self) -> &str {
        self.program
    }

    /// The name the command was invoked by.
    pub fn name(&self) -> &str {
        self.name
    }

    /// The command's full usage line.
    pub fn usage(&self) -> &str {
        self.usage
    }

    /// The parsed flags.
    ///
    /// Empty for commands with custom flag handling.
    pub fn matches(&self) -> &ArgMatches {
        &self.matches
    }

    /// Standard output, or the capture buffer under
    /// [`App::run_to_string`](crate::App::run_to_string).
    pub fn out(&mut self) -> &mut dyn Write {
        &mut *self.out
    }
}

impl fmt::Debug for CommandContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandContext")
            .field("program", &self.program)
            .field("name", &self.name)
            .field("usage", &self.usage)
            .finish_non_exhaustive()
    }
}

/// Trait for command handlers.
///
/// Handlers take `&mut self`, so a handler can keep state between calls
/// when an [`App`](crate::App) is dispatched more than once (as in tests).
///
/// ```rust
/// use std::io::Write;
/// use subverb::{CommandContext, Handler, HandlerResult};
///
/// struct Echo;
///
/// impl Handler for Echo {
///     fn handle(&mut self, ctx: &mut CommandContext<'_>, args: &[String]) -> HandlerResult {
///         writeln!(ctx.out(), "{}", args.join(" "))?;
///         Ok(())
///     }
/// }
/// ```
pub trait Handler {
    /// Runs the command with its positional arguments.
    fn handle(&mut self, ctx: &mut CommandContext<'_>, args: &[String]) -> HandlerResult;
}

/// A wrapper that implements [`Handler`] for `FnMut` closures.
pub struct FnHandler<F> {
    f: F,
}

impl<F> FnHandler<F>
where
    F: FnMut(&mut CommandContext<'_>, &[String]) -> HandlerResult,
{
    /// Creates a new FnHandler wrapping the given closure.
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> Handler for FnHandler<F>
where
    F: FnMut(&mut CommandContext<'_>, &[String]) -> HandlerResult,
{
    fn handle(&mut self, ctx: &mut CommandContext<'_>, args: &[String]) -> HandlerResult {
        (self.f)(ctx, args)
    }
}
