//! The `help` pseudo-command and option listings for command help.

use clap::Command;
use serde::Serialize;
use subverb_render::display_width;

use crate::error::DispatchError;
use crate::exit::{FAILURE, SUCCESS};
use crate::registry::Registry;
use crate::session::Session;

/// Fixed width for the option name column in command help.
pub(crate) const NAME_COLUMN_WIDTH: usize = 14;

/// One row of a command's option listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OptionData {
    /// `-p, --person <PERSON>` style label.
    pub name: String,
    pub help: String,
    /// Spaces that pad `name` out to the name column.
    pub padding: String,
    pub short: Option<char>,
    pub long: Option<String>,
}

/// Collects the visible options of a clap command in display order.
pub(crate) fn extract_options(cmd: &Command) -> Vec<OptionData> {
    let mut args: Vec<_> = cmd
        .get_arguments()
        .filter(|a| !a.is_hide_set() && !a.is_positional())
        .collect();
    args.sort_by_key(|a| a.get_display_order());

    args.into_iter()
        .map(|arg| {
            let mut name = String::new();
            if let Some(short) = arg.get_short() {
                name.push_str(&format!("-{}", short));
            }
            if let Some(long) = arg.get_long() {
                if !name.is_empty() {
                    name.push_str(", ");
                }
                name.push_str(&format!("--{}", long));
            }
            if arg.get_action().takes_values() {
                let value = arg
                    .get_value_names()
                    .and_then(|names| names.first())
                    .map(|n| n.to_string())
                    .unwrap_or_else(|| arg.get_id().to_string().to_uppercase());
                name.push_str(&format!(" <{}>", value));
            }

            let pad = NAME_COLUMN_WIDTH.saturating_sub(display_width(&name));
            OptionData {
                help: arg.get_help().map(|s| s.to_string()).unwrap_or_default(),
                padding: " ".repeat(pad),
                short: arg.get_short(),
                long: arg.get_long().map(|s| s.to_string()),
                name,
            }
        })
        .collect()
}

/// Runs `help` with the arguments that followed it.
///
/// - no arguments: the usage view on stdout
/// - one argument: that command's help, else that topic's help, on stdout
/// - anything else: an error on stderr
pub(crate) fn help(
    registry: &Registry,
    session: &mut Session<'_>,
    args: &[String],
) -> Result<i32, DispatchError> {
    let name = match args {
        [] => {
            let text = session.render_usage(&registry.data(session.program))?;
            session.out().write_all(text.as_bytes())?;
            return Ok(SUCCESS);
        }
        [name] => name,
        _ => {
            writeln!(session.err(), "help given too many arguments")?;
            return Ok(FAILURE);
        }
    };

    if let Some(command) = registry.lookup(name) {
        log::debug!("help: command {:?}", name);
        let text = session.render_command(&command.data())?;
        session.out().write_all(text.as_bytes())?;
        return Ok(SUCCESS);
    }

    if let Some(topic) = registry.lookup_topic(name) {
        log::debug!("help: topic {:?}", name);
        let text = session.render_topic(&topic.data())?;
        session.out().write_all(text.as_bytes())?;
        return Ok(SUCCESS);
    }

    writeln!(session.err(), "unknown help topic {:?}", name)?;
    Ok(FAILURE)
}
