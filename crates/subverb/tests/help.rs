use subverb::{App, Command, Templates, Topic, FAILURE, SUCCESS};

const USAGE: &str = "\
usage: {{ program }} <command>

{% for cmd in commands %}  {{ cmd.name | pad_right(15) }} {{ cmd.short }}
{% endfor %}";

const COMMAND: &str = "usage: {{ program }} {{ usage }}\n\n  {{ long | trim }}\n";

fn app() -> App {
    App::builder()
        .program("test")
        .templates(Templates::new().usage(USAGE).command(COMMAND).topic("{{ name }}: {{ long }}\n"))
        .command(Command::new("he").short("says he").run(|_ctx, _args| Ok(())))
        .command(
            Command::new("hey [options]")
                .short("says hey")
                .long("\n  Hey is a command to say hey, HEY!\n")
                .run(|_ctx, _args| Ok(())),
        )
        .command(Command::new("bye").short("says bye").run(|_ctx, _args| Ok(())))
        .topic(Topic::new("manners", "when to say what", "Say hey first."))
        .build()
        .unwrap()
}

#[test]
fn test_help_lists_commands() {
    let outcome = app().run_to_string(["me", "help"]);

    assert_eq!(outcome.status, SUCCESS);
    assert_eq!(
        outcome.stdout,
        "usage: test <command>\n\n  he              says he\n  hey             says hey\n  bye             says bye\n"
    );
    assert_eq!(outcome.stderr, "");
}

#[test]
fn test_help_for_command() {
    let outcome = app().run_to_string(["me", "help", "hey"]);

    assert_eq!(outcome.status, SUCCESS);
    assert_eq!(outcome.stdout, "usage: test hey [options]\n\n  Hey is a command to say hey, HEY!\n");
}

#[test]
fn test_help_for_topic() {
    let outcome = app().run_to_string(["me", "help", "manners"]);

    assert_eq!(outcome.status, SUCCESS);
    assert_eq!(outcome.stdout, "manners: Say hey first.\n");
}

#[test]
fn test_help_unknown_topic() {
    let outcome = app().run_to_string(["me", "help", "what"]);

    assert_eq!(outcome.status, FAILURE);
    assert_eq!(outcome.stdout, "");
    assert_eq!(outcome.stderr, "unknown help topic \"what\"\n");
}

#[test]
fn test_help_too_many_arguments() {
    let outcome = app().run_to_string(["me", "help", "hey", "bye"]);

    assert_eq!(outcome.status, FAILURE);
    assert_eq!(outcome.stdout, "");
    assert_eq!(outcome.stderr, "help given too many arguments\n");
}

#[test]
fn test_help_prefers_command_over_topic() {
    let mut app = App::builder()
        .templates(Templates::new().command("command {{ name }}\n").topic("topic {{ name }}\n"))
        .topic(Topic::new("hey", "", ""))
        .command(Command::new("hey").run(|_ctx, _args| Ok(())))
        .build()
        .unwrap();

    let outcome = app.run_to_string(["me", "help", "hey"]);

    assert_eq!(outcome.stdout, "command hey\n");
}

#[test]
fn test_help_shows_first_entry_even_if_documentation() {
    let mut app = App::builder()
        .templates(Templates::new().command("{{ long }} {{ callable }}\n"))
        .command(Command::new("hey").long("docs"))
        .command(Command::new("hey").long("runs").run(|_ctx, _args| Ok(())))
        .build()
        .unwrap();

    let outcome = app.run_to_string(["me", "help", "hey"]);

    assert_eq!(outcome.stdout, "docs false\n");
}

#[test]
fn test_default_templates() {
    let mut app = App::builder()
        .program("tool")
        .command(
            Command::new("add [options] <item>")
                .short("add an item")
                .long("Add puts an item on the list.")
                .flags(
                    clap::Command::new("add")
                        .arg(clap::Arg::new("force").long("force").action(clap::ArgAction::SetTrue).help("replace an existing item")),
                )
                .run(|_ctx, _args| Ok(())),
        )
        .command(Command::new("naming").short("how items are named").long("Items are named by their text."))
        .topic(Topic::new("storage", "where the list lives", "In a file."))
        .build()
        .unwrap();

    let usage = app.run_to_string(["tool", "help"]);
    assert_eq!(
        usage.stdout,
        "usage: tool <command> [arguments]\n\
         \n\
         Commands:\n    \
         add            Add an item\n\
         \n\
         Use \"tool help <command>\" for more information about a command.\n\
         \n\
         Additional help topics:\n    \
         naming         How items are named\n    \
         storage        Where the list lives\n\
         \n\
         Use \"tool help <topic>\" for more information about that topic.\n"
    );

    let command = app.run_to_string(["tool", "help", "add"]);
    assert_eq!(
        command.stdout,
        "usage: tool add [options] <item>\n\
         \n\
         Add puts an item on the list.\n\
         \n\
         Options:\n    \
         --force        replace an existing item\n"
    );

    let docs = app.run_to_string(["tool", "help", "naming"]);
    assert_eq!(docs.stdout, "Items are named by their text.\n");

    let topic = app.run_to_string(["tool", "help", "storage"]);
    assert_eq!(topic.stdout, "In a file.\n");
}

#[test]
fn test_default_usage_without_topics() {
    let mut app = App::builder()
        .program("tool")
        .command(Command::new("add").short("add an item").run(|_ctx, _args| Ok(())))
        .build()
        .unwrap();

    let usage = app.run_to_string(["tool", "-h"]);
    assert!(!usage.stdout.contains("Additional help topics"));
    assert!(usage.stdout.ends_with("for more information about a command.\n"));
}
