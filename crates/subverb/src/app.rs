//! The application entry point and its builder.

use std::fmt;
use std::io::{self, Write};
use subverb_render::{MiniJinjaEngine, TemplateEngine, Templates};

use crate::command::{Command, Subcommand};
use crate::dispatch::{dispatch, program_name, HELP_COMMAND};
use crate::error::SetupError;
use crate::exit::{process_exit, ExitFn, FATAL};
use crate::registry::Registry;
use crate::session::Session;
use crate::topic::Topic;

/// What one dispatch produced, captured instead of written to the process
/// streams.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        self.status == 0
    }
}

/// A tool: its subcommands, topics and help templates.
///
/// ```rust
/// use std::io::Write;
/// use subverb::{App, Command};
///
/// let mut app = App::builder()
///     .program("tool")
///     .command(Command::new("hey [name]").short("says hey").run(|ctx, args| {
///         writeln!(ctx.out(), "hey {}", args.join(" "))?;
///         Ok(())
///     }))
///     .build()
///     .unwrap();
///
/// let outcome = app.run_to_string(["tool", "hey", "you"]);
/// assert_eq!(outcome.status, 0);
/// assert_eq!(outcome.stdout, "hey you\n");
/// ```
pub struct App {
    program: Option<String>,
    registry: Registry,
    engine: Box<dyn TemplateEngine>,
    exit: ExitFn,
}

impl App {
    pub fn builder() -> AppBuilder {
        AppBuilder::new()
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Dispatches `args` (`argv[0]` included) against stdout and stderr,
    /// then calls the exit function with the resulting status.
    ///
    /// With the default exit function this never returns.
    pub fn run<I, S>(&mut self, args: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let status = self.dispatch(args, &mut io::stdout().lock(), &mut io::stderr().lock());
        let _ = io::stdout().flush();
        (self.exit)(status);
    }

    /// Dispatches `args` against the given streams and returns the status
    /// without exiting.
    pub fn dispatch<I, S>(&mut self, args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let argv: Vec<String> = args.into_iter().map(Into::into).collect();
        let program = match &self.program {
            Some(program) => program.clone(),
            None => argv
                .first()
                .map(|arg0| program_name(arg0).to_string())
                .unwrap_or_default(),
        };

        let mut session = Session::new(&program, self.engine.as_ref(), out, err);
        match dispatch(&mut self.registry, &mut session, &argv) {
            Ok(status) => status,
            Err(e) => {
                log::error!("{}", e);
                let _ = writeln!(session.err(), "fatal: {}", e);
                FATAL
            }
        }
    }

    /// Dispatches `args` and captures both streams.
    pub fn run_to_string<I, S>(&mut self, args: I) -> Outcome
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let status = self.dispatch(args, &mut out, &mut err);
        Outcome {
            status,
            stdout: String::from_utf8_lossy(&out).into_owned(),
            stderr: String::from_utf8_lossy(&err).into_owned(),
        }
    }
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("program", &self.program)
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}

/// Builder for [`App`].
///
/// Registration order is kept: it is the order of the help listing and the
/// tie-break when two entries share a name.
pub struct AppBuilder {
    program: Option<String>,
    registry: Registry,
    templates: Templates,
    exit: ExitFn,
}

impl AppBuilder {
    pub fn new() -> Self {
        Self {
            program: None,
            registry: Registry::new(),
            templates: Templates::default(),
            exit: process_exit(),
        }
    }

    /// Sets the program name shown in help output.
    ///
    /// Defaults to the file name of `argv[0]`.
    pub fn program(mut self, program: impl Into<String>) -> Self {
        self.program = Some(program.into());
        self
    }

    /// Registers a [`Command`].
    pub fn command(self, command: Command) -> Self {
        self.subcommand(command)
    }

    /// Registers any [`Subcommand`] implementation.
    pub fn subcommand<C: Subcommand + 'static>(mut self, command: C) -> Self {
        let name = command.name().to_string();
        if name.is_empty() {
            log::warn!("command registered with an empty usage line");
        } else if name == HELP_COMMAND {
            log::warn!("command {:?} is shadowed by the help pseudo-command", name);
        } else if command.is_callable()
            && self
                .registry
                .commands()
                .any(|c| c.is_callable() && c.name() == name)
        {
            log::warn!("command {:?} is shadowed by an earlier registration", name);
        }
        self.registry.push(Box::new(command));
        self
    }

    /// Registers a help topic.
    pub fn topic(mut self, topic: Topic) -> Self {
        self.registry.push_topic(topic);
        self
    }

    /// Replaces the help templates.
    pub fn templates(mut self, templates: Templates) -> Self {
        self.templates = templates;
        self
    }

    /// Replaces the exit function called by [`App::run`].
    pub fn exit_with<F: FnMut(i32) + 'static>(mut self, exit: F) -> Self {
        self.exit = Box::new(exit);
        self
    }

    /// Compiles the templates and assembles the app.
    pub fn build(self) -> Result<App, SetupError> {
        let engine: MiniJinjaEngine = self.templates.compile()?;
        Ok(App {
            program: self.program,
            registry: self.registry,
            engine: Box::new(engine),
            exit: self.exit,
        })
    }
}

impl Default for AppBuilder {
    fn default() -> Self {
        Self::new()
    }
}
