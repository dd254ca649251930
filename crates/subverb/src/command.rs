//! Subcommand descriptors.
//!
//! [`Subcommand`] is the capability set the dispatcher works with: a name,
//! help text, whether the entry is runnable, and how to run it. [`Command`]
//! is the implementation most tools need; anything else (commands discovered
//! at runtime, say) can implement the trait and sit in the same registry.

use clap::{Arg, ArgAction, ArgMatches};
use serde::Serialize;
use std::fmt;

use crate::error::DispatchError;
use crate::exit::{Exit, FAILURE, SUCCESS};
use crate::handler::{CommandContext, FnHandler, Handler, HandlerResult};
use crate::help::{extract_options, OptionData};
use crate::session::Session;

/// Id of the catch-all positional appended to every command's flag schema.
pub(crate) const ARGS_ID: &str = "__subverb_args";

/// Whether a descriptor runs something or only documents something.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Category {
    /// Has a handler; reachable by dispatch.
    Command,
    /// No handler; reachable only through `help`.
    Documentation,
}

/// The data a `command` help template receives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandData {
    pub name: String,
    pub usage: String,
    pub short: String,
    pub long: String,
    pub callable: bool,
    pub category: Category,
    pub options: Vec<OptionData>,
}

/// A registered unit the dispatcher can list, document and run.
pub trait Subcommand {
    /// The word used to invoke the subcommand.
    fn name(&self) -> &str;

    /// One-line summary for listings.
    fn short(&self) -> &str;

    /// Detailed help text.
    fn long(&self) -> &str;

    /// True if [`call`](Self::call) actually runs something.
    fn is_callable(&self) -> bool;

    /// [`Category::Command`] when callable, [`Category::Documentation`] otherwise.
    fn category(&self) -> Category {
        if self.is_callable() {
            Category::Command
        } else {
            Category::Documentation
        }
    }

    /// The data handed to the `command` help template.
    fn data(&self) -> CommandData;

    /// Runs the subcommand.
    ///
    /// `args` starts with the token the command was invoked by. Returns the
    /// status the process should exit with.
    fn call(&mut self, session: &mut Session<'_>, args: &[String]) -> Result<i32, DispatchError>;
}

/// Returns the first word of a usage line.
///
/// ```rust
/// assert_eq!(subverb::name_of("foo bar baz"), "foo");
/// assert_eq!(subverb::name_of("foo"), "foo");
/// ```
pub fn name_of(usage: &str) -> &str {
    match usage.find(' ') {
        Some(i) => &usage[..i],
        None => usage,
    }
}

/// A subcommand defined by a usage line, help text, a clap flag schema and
/// an optional handler.
///
/// ```rust
/// use clap::Arg;
/// use std::io::Write;
/// use subverb::Command;
///
/// let greet = Command::new("greet [options]")
///     .short("displays a greeting")
///     .long("Greet displays a greeting to a person.")
///     .flags(clap::Command::new("greet").arg(Arg::new("person").long("person")))
///     .run(|ctx, _args| {
///         let person = ctx.matches().get_one::<String>("person").cloned();
///         writeln!(ctx.out(), "Hello {}", person.unwrap_or_default())?;
///         Ok(())
///     });
///
/// assert_eq!(subverb::Subcommand::name(&greet), "greet");
/// ```
pub struct Command {
    usage: String,
    short: String,
    long: String,
    flags: clap::Command,
    custom_flags: bool,
    handler: Option<Box<dyn Handler>>,
}

impl Command {
    /// Creates a documentation-only command; add a handler with
    /// [`run`](Self::run) to make it callable.
    ///
    /// The first word of `usage` is the command's name.
    pub fn new(usage: impl Into<String>) -> Self {
        let usage = usage.into();
        let flags = clap::Command::new(name_of(&usage).to_string());
        Self {
            usage,
            short: String::new(),
            long: String::new(),
            flags,
            custom_flags: false,
            handler: None,
        }
    }

    /// Sets the one-line summary.
    pub fn short(mut self, short: impl Into<String>) -> Self {
        self.short = short.into();
        self
    }

    /// Sets the detailed help text.
    pub fn long(mut self, long: impl Into<String>) -> Self {
        self.long = long.into();
        self
    }

    /// Sets the flag schema.
    ///
    /// Only options belong here. Positional arguments are collected by the
    /// dispatcher: parsing stops at the first positional token and
    /// everything from there on is handed to the handler.
    pub fn flags(mut self, flags: clap::Command) -> Self {
        self.flags = flags;
        self
    }

    /// Skips flag parsing entirely; the handler receives every token after
    /// the command name untouched.
    pub fn custom_flags(mut self, custom: bool) -> Self {
        self.custom_flags = custom;
        self
    }

    /// Sets the handler from a closure.
    pub fn run<F>(self, f: F) -> Self
    where
        F: FnMut(&mut CommandContext<'_>, &[String]) -> HandlerResult + 'static,
    {
        self.handler(FnHandler::new(f))
    }

    /// Sets the handler.
    pub fn handler<H: Handler + 'static>(mut self, handler: H) -> Self {
        self.handler = Some(Box::new(handler));
        self
    }

    /// The full usage line.
    pub fn usage(&self) -> &str {
        &self.usage
    }

    fn parser(&self) -> clap::Command {
        self.flags
            .clone()
            .name(name_of(&self.usage).to_string())
            .no_binary_name(false)
            .arg(
                Arg::new(ARGS_ID)
                    .num_args(1..)
                    .action(ArgAction::Append)
                    .trailing_var_arg(true)
                    .hide(true),
            )
    }

    /// Parses the flags. A help flag or a flag error shows the command's
    /// help instead and the handler does not run.
    fn parse(&self, session: &mut Session<'_>, args: &[String]) -> Result<Parsed, DispatchError> {
        if self.custom_flags {
            return Ok(Parsed::Args(
                ArgMatches::default(),
                args.iter().skip(1).cloned().collect(),
            ));
        }

        match self.parser().try_get_matches_from(args) {
            Ok(matches) => {
                let rest = matches
                    .get_many::<String>(ARGS_ID)
                    .map(|values| values.cloned().collect())
                    .unwrap_or_default();
                Ok(Parsed::Args(matches, rest))
            }
            // -h/--help and malformed flags both end in the command's help
            Err(e) => {
                log::debug!("{}: flag parse stopped: {:?}", name_of(&self.usage), e.kind());
                let text = session.render_command(&self.data())?;
                session.out().write_all(text.as_bytes())?;
                Ok(Parsed::Done(SUCCESS))
            }
        }
    }
}

enum Parsed {
    Args(ArgMatches, Vec<String>),
    Done(i32),
}

impl Subcommand for Command {
    fn name(&self) -> &str {
        name_of(&self.usage)
    }

    fn short(&self) -> &str {
        &self.short
    }

    fn long(&self) -> &str {
        &self.long
    }

    fn is_callable(&self) -> bool {
        self.handler.is_some()
    }

    fn data(&self) -> CommandData {
        CommandData {
            name: self.name().to_string(),
            usage: self.usage.clone(),
            short: self.short.clone(),
            long: self.long.clone(),
            callable: self.is_callable(),
            category: self.category(),
            options: extract_options(&self.flags),
        }
    }

    fn call(&mut self, session: &mut Session<'_>, args: &[String]) -> Result<i32, DispatchError> {
        if self.handler.is_none() {
            writeln!(session.err(), "unknown subcommand {:?}", self.name())?;
            return Ok(FAILURE);
        }

        let (matches, positional) = match self.parse(session, args)? {
            Parsed::Args(matches, positional) => (matches, positional),
            Parsed::Done(status) => return Ok(status),
        };

        let name = name_of(&self.usage);
        let Some(handler) = self.handler.as_mut() else {
            return Ok(FAILURE);
        };
        log::debug!("running {} with {} positional args", name, positional.len());

        let mut ctx = CommandContext::new(session.program, name, &self.usage, matches, &mut *session.out);
        match handler.handle(&mut ctx, &positional) {
            Ok(()) => Ok(SUCCESS),
            Err(e) => match e.downcast_ref::<Exit>() {
                Some(Exit(status)) => Ok(*status),
                None => {
                    writeln!(session.err, "error: {:#}", e)?;
                    Ok(FAILURE)
                }
            },
        }
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("usage", &self.usage)
            .field("short", &self.short)
            .field("custom_flags", &self.custom_flags)
            .field("callable", &self.handler.is_some())
            .finish_non_exhaustive()
    }
}
