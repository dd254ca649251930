use greet_example::{app, salutation, UNSUPPORTED_LANGUAGE};
use subverb::{FAILURE, SUCCESS};

#[test]
fn test_greets_someone_by_default() {
    let outcome = app().build().unwrap().run_to_string(["greet", "greet"]);

    assert_eq!(outcome.status, SUCCESS);
    assert_eq!(outcome.stdout, "Hello someone?\n");
}

#[test]
fn test_greets_in_french() {
    let outcome = app()
        .build()
        .unwrap()
        .run_to_string(["greet", "greet", "--person", "Ana", "--lang", "fr"]);

    assert_eq!(outcome.status, SUCCESS);
    assert_eq!(outcome.stdout, "Bonjour Ana\n");
}

#[test]
fn test_unsupported_language_exits_with_two() {
    let outcome = app()
        .build()
        .unwrap()
        .run_to_string(["greet", "greet", "--lang", "de"]);

    assert_eq!(outcome.status, UNSUPPORTED_LANGUAGE);
    assert_eq!(outcome.stdout, "");
}

#[test]
fn test_help_lists_command_and_topic() {
    let outcome = app().build().unwrap().run_to_string(["greet", "help"]);

    assert_eq!(outcome.status, SUCCESS);
    assert!(outcome.stdout.starts_with("usage: greet <command> [arguments]\n"));
    assert!(outcome.stdout.contains("    greet          Displays a greeting\n"));
    assert!(outcome.stdout.contains("    languages      Languages greet can speak\n"));
}

#[test]
fn test_command_help_lists_options() {
    let outcome = app().build().unwrap().run_to_string(["greet", "greet", "-h"]);

    assert_eq!(outcome.status, SUCCESS);
    assert!(outcome.stdout.starts_with("usage: greet greet [options]\n\n"));
    assert!(outcome.stdout.contains("    --person <name> Name of person to greet\n"));
    assert!(outcome.stdout.contains("    --lang <lang>  Language to use (en or fr)\n"));
}

#[test]
fn test_languages_topic() {
    let outcome = app().build().unwrap().run_to_string(["greet", "help", "languages"]);

    assert_eq!(outcome.status, SUCCESS);
    assert!(outcome.stdout.starts_with("Pass one of these to --lang:\n"));
    assert!(outcome.stdout.ends_with("exit with status 2.\n"));
}

#[test]
fn test_unknown_command() {
    let outcome = app().build().unwrap().run_to_string(["greet", "wave"]);

    assert_eq!(outcome.status, FAILURE);
    assert_eq!(outcome.stderr, "unknown subcommand \"wave\"\n");
}

#[test]
fn test_salutation() {
    assert_eq!(salutation("en"), Some("Hello"));
    assert_eq!(salutation("fr"), Some("Bonjour"));
    assert_eq!(salutation("EN"), None);
}

#[test]
fn test_unknown_flag_shows_command_help() {
    let mut app = app().build().unwrap();

    let outcome = app.run_to_string(["greet", "greet", "--shout"]);

    assert_eq!(outcome.status, SUCCESS);
    assert_eq!(outcome, app.run_to_string(["greet", "help", "greet"]));
}
