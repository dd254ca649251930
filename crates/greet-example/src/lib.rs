//! The `greet` tool: one command, one topic, default help templates.
//!
//! ```text
//! $ greet greet --person Ana --lang fr
//! Bonjour Ana
//! $ greet help languages
//! ```

use clap::{Args, FromArgMatches};
use subverb::{App, AppBuilder, Command, CommandContext, Exit, HandlerResult, Topic};

/// Status `greet` exits with when asked for a language it cannot speak.
pub const UNSUPPORTED_LANGUAGE: i32 = 2;

#[derive(Args, Debug)]
pub struct GreetArgs {
    /// Name of person to greet
    #[arg(long, value_name = "name", default_value = "someone?")]
    pub person: String,

    /// Language to use (en or fr)
    #[arg(long, value_name = "lang", default_value = "en")]
    pub lang: String,
}

/// Returns the greeting for `lang`, if it is one we know.
pub fn salutation(lang: &str) -> Option<&'static str> {
    match lang {
        "en" => Some("Hello"),
        "fr" => Some("Bonjour"),
        _ => None,
    }
}

fn greet(ctx: &mut CommandContext<'_>, _args: &[String]) -> HandlerResult {
    let args = GreetArgs::from_arg_matches(ctx.matches())?;
    let Some(hello) = salutation(&args.lang) else {
        log::error!("unsupported language {:?}", args.lang);
        return Err(Exit(UNSUPPORTED_LANGUAGE).into());
    };
    writeln!(ctx.out(), "{} {}", hello, args.person)?;
    Ok(())
}

pub fn greet_command() -> Command {
    Command::new("greet [options]")
        .short("displays a greeting")
        .long(
            "Greet displays a greeting to a person, in English unless told \
             otherwise. See \"greet help languages\" for the choices.",
        )
        .flags(GreetArgs::augment_args(clap::Command::new("greet")))
        .run(greet)
}

/// The `greet` tool, ready to build.
pub fn app() -> AppBuilder {
    App::builder()
        .program("greet")
        .command(greet_command())
        .topic(Topic::from_text("languages", include_str!("languages.txt")))
}
