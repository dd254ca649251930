//! Dispatch logic.
//!
//! Splits the argument vector into global flags and the rest, then routes
//! the first remaining token:
//!
//! ```text
//! argv ─┬─ -h/--help ─────────────► usage on stdout, 0
//!       ├─ (nothing left) ────────► usage on stderr, 1
//!       ├─ help [args] ───────────► help procedure
//!       ├─ <callable command> ────► call protocol
//!       └─ <anything else> ───────► unknown subcommand, 1
//! ```

use clap::{Arg, ArgAction};

use crate::error::DispatchError;
use crate::exit::{FAILURE, SUCCESS};
use crate::help::help;
use crate::registry::Registry;
use crate::session::Session;

const HELP_ID: &str = "__subverb_help";
const REST_ID: &str = "__subverb_rest";

/// The name of the help pseudo-command.
pub const HELP_COMMAND: &str = "help";

/// The top-level parser: `-h/--help`, then everything from the first
/// positional token on, untouched.
fn global_parser(program: &str) -> clap::Command {
    clap::Command::new(program.to_string())
        .disable_help_flag(true)
        .disable_version_flag(true)
        .arg(
            Arg::new(HELP_ID)
                .short('h')
                .long("help")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(REST_ID)
                .num_args(1..)
                .action(ArgAction::Append)
                .trailing_var_arg(true),
        )
}

/// Returns the file name part of `argv[0]`.
pub fn program_name(arg0: &str) -> &str {
    std::path::Path::new(arg0)
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or(arg0)
}

/// Dispatches one argument vector, `argv[0]` included.
///
/// Returns the status the process should exit with.
pub(crate) fn dispatch(
    registry: &mut Registry,
    session: &mut Session<'_>,
    argv: &[String],
) -> Result<i32, DispatchError> {
    let matches = match global_parser(session.program).try_get_matches_from(argv) {
        Ok(matches) => matches,
        Err(e) => {
            log::debug!("global flag parse failed: {:?}", e.kind());
            let text = session.render_usage(&registry.data(session.program))?;
            let message = e.to_string();
            writeln!(session.err(), "{}", message.lines().next().unwrap_or_default())?;
            session.err().write_all(text.as_bytes())?;
            return Ok(FAILURE);
        }
    };

    if matches.get_flag(HELP_ID) {
        let text = session.render_usage(&registry.data(session.program))?;
        session.out().write_all(text.as_bytes())?;
        return Ok(SUCCESS);
    }

    let args: Vec<String> = matches
        .get_many::<String>(REST_ID)
        .map(|values| values.cloned().collect())
        .unwrap_or_default();

    let Some(first) = args.first() else {
        log::debug!("no subcommand given");
        let text = session.render_usage(&registry.data(session.program))?;
        session.err().write_all(text.as_bytes())?;
        return Ok(FAILURE);
    };

    if first == HELP_COMMAND {
        return help(registry, session, &args[1..]);
    }

    match registry.lookup_callable_mut(first) {
        Some(command) => {
            log::debug!("dispatching to {:?}", first);
            command.call(session, &args)
        }
        None => {
            log::debug!("no callable command named {:?}", first);
            writeln!(session.err(), "unknown subcommand {:?}", first)?;
            Ok(FAILURE)
        }
    }
}
