//! Subcommand dispatch for CLIs shaped like `tool <command> [options] [args]`.
//!
//! `subverb` reads an argument vector, finds which registered subcommand was
//! asked for, lets that subcommand's own [clap](https://docs.rs/clap) schema
//! parse its flags, and runs its handler with whatever positional arguments
//! are left. Help and usage screens are rendered from templates (see
//! [`subverb_render`]).
//!
//! # Features
//!
//! - **First-match routing**: subcommands are looked up by the first word of
//!   their usage line, in registration order
//! - **A `help` pseudo-command**: `help`, `help <command>`, `help <topic>`
//! - **Per-command flags**: each command owns a `clap::Command`; `-h` after a
//!   command prints the same text as `help <command>`
//! - **Topics**: help-only entries with no command behind them
//! - **Testable exits**: the exit function is injected, and
//!   [`App::run_to_string`] captures output and status without exiting
//!
//! # Example
//!
//! ```rust
//! use clap::Arg;
//! use std::io::Write;
//! use subverb::{App, Command, Templates, Topic};
//!
//! let mut app = App::builder()
//!     .program("tool")
//!     .command(
//!         Command::new("hey [options] <name>")
//!             .short("says hey")
//!             .long("Hey says hey to someone.")
//!             .flags(clap::Command::new("hey").arg(Arg::new("greeting").long("greeting")))
//!             .run(|ctx, args| {
//!                 let greeting = ctx
//!                     .matches()
//!                     .get_one::<String>("greeting")
//!                     .cloned()
//!                     .unwrap_or_else(|| "hey".to_string());
//!                 writeln!(ctx.out(), "{} {}", greeting, args.join(" "))?;
//!                 Ok(())
//!             }),
//!     )
//!     .topic(Topic::new("manners", "when to say hey", "Always."))
//!     .templates(Templates::new().topic("{{ long }}\n"))
//!     .build()
//!     .unwrap();
//!
//! let outcome = app.run_to_string(["tool", "hey", "--greeting", "hi", "you"]);
//! assert_eq!(outcome.stdout, "hi you\n");
//!
//! let outcome = app.run_to_string(["tool", "help", "manners"]);
//! assert_eq!(outcome.stdout, "Always.\n");
//!
//! let outcome = app.run_to_string(["tool", "bye"]);
//! assert_eq!(outcome.status, subverb::FAILURE);
//! assert_eq!(outcome.stderr, "unknown subcommand \"bye\"\n");
//! ```
//!
//! # Exit statuses
//!
//! | Status | Meaning |
//! |--------|---------|
//! | [`SUCCESS`] (0) | handler returned `Ok`, or help was shown (including after a bad flag) |
//! | [`FAILURE`] (1) | no subcommand, unknown subcommand, unknown help topic, too many help arguments, handler error |
//! | [`FATAL`] (2) | a help template failed to render, or output could not be written |
//!
//! A handler can pick its own status by returning [`Exit`].
//!
//! # Streams
//!
//! Help asked for (`help`, `-h`) goes to stdout. Errors, and the usage shown
//! when no subcommand is given, go to stderr.

mod app;
mod command;
mod dispatch;
mod error;
mod exit;
mod handler;
mod help;
mod registry;
mod session;
mod topic;

pub use app::{App, AppBuilder, Outcome};
pub use command::{name_of, Category, Command, CommandData, Subcommand};
pub use dispatch::{program_name, HELP_COMMAND};
pub use error::{DispatchError, SetupError};
pub use exit::{process_exit, Exit, ExitFn, FAILURE, FATAL, SUCCESS};
pub use handler::{CommandContext, FnHandler, Handler, HandlerResult};
pub use help::OptionData;
pub use registry::{Registry, UsageData};
pub use session::Session;
pub use topic::{Topic, TopicData};

pub use subverb_render::{RenderError, TemplateEngine, Templates};
