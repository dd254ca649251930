//! The named help templates a tool renders.

use crate::error::RenderError;
use crate::template::engine::{MiniJinjaEngine, TemplateEngine};

/// Name of the top-level usage template.
pub const USAGE: &str = "usage";
/// Name of the per-command help template.
pub const COMMAND: &str = "command";
/// Name of the per-topic help template.
pub const TOPIC: &str = "topic";

/// The three templates used to display help.
///
/// - `usage` is shown for `tool help`, `tool -h` and a bare `tool`. It
///   receives `{ program, commands, topics }`.
/// - `command` is shown for `tool help <command>` and `tool <command> -h`.
///   It receives a single command: `{ program, name, usage, short, long,
///   callable, category, options }`.
/// - `topic` is shown for `tool help <topic>`. It receives
///   `{ program, name, short, long }`.
///
/// Every template defaults to a built-in layout, so a tool only overrides
/// the ones it wants to change.
///
/// ```rust
/// use subverb_render::{Templates, TemplateEngine, USAGE};
/// use serde_json::json;
///
/// let engine = Templates::default()
///     .usage("usage: {{ program }} <command>\n")
///     .compile()
///     .unwrap();
///
/// let out = engine
///     .render_named(USAGE, &json!({ "program": "tool", "commands": [], "topics": [] }))
///     .unwrap();
/// assert_eq!(out, "usage: tool <command>\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Templates {
    pub usage: String,
    pub command: String,
    pub topic: String,
}

impl Default for Templates {
    fn default() -> Self {
        Self {
            usage: include_str!("default/usage.txt").to_string(),
            command: include_str!("default/command.txt").to_string(),
            topic: include_str!("default/topic.txt").to_string(),
        }
    }
}

impl Templates {
    /// Creates the default template set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the top-level usage template.
    pub fn usage(mut self, source: impl Into<String>) -> Self {
        self.usage = source.into();
        self
    }

    /// Replaces the per-command template.
    pub fn command(mut self, source: impl Into<String>) -> Self {
        self.command = source.into();
        self
    }

    /// Replaces the per-topic template.
    pub fn topic(mut self, source: impl Into<String>) -> Self {
        self.topic = source.into();
        self
    }

    /// Compiles all three templates into a fresh engine.
    ///
    /// Fails on the first template with a syntax error.
    pub fn compile(&self) -> Result<MiniJinjaEngine, RenderError> {
        let mut engine = MiniJinjaEngine::new();
        self.install(&mut engine)?;
        Ok(engine)
    }

    /// Registers all three templates on an existing engine.
    pub fn install(&self, engine: &mut dyn TemplateEngine) -> Result<(), RenderError> {
        engine.add_template(USAGE, &self.usage)?;
        engine.add_template(COMMAND, &self.command)?;
        engine.add_template(TOPIC, &self.topic)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn usage_data() -> serde_json::Value {
        json!({
            "program": "tool",
            "commands": [
                { "name": "add", "short": "add a thing", "callable": true },
                { "name": "rules", "short": "how things are named", "callable": false },
            ],
            "topics": [
                { "name": "formats", "short": "supported formats" },
            ],
        })
    }

    #[test]
    fn test_default_usage_lists_commands_and_topics() {
        let engine = Templates::default().compile().unwrap();
        let out = engine.render_named(USAGE, &usage_data()).unwrap();

        assert!(out.starts_with("usage: tool <command> [arguments]\n"));
        assert!(out.contains("\nCommands:\n    add            Add a thing\n"));
        assert!(out.contains("\nAdditional help topics:\n"));
        assert!(out.contains("    rules          How things are named\n"));
        assert!(out.contains("    formats        Supported formats\n"));
        assert!(out.ends_with("for more information about that topic.\n"));
    }

    #[test]
    fn test_default_usage_without_docs() {
        let engine = Templates::default().compile().unwrap();
        let data = json!({
            "program": "tool",
            "commands": [{ "name": "add", "short": "add a thing", "callable": true }],
            "topics": [],
        });
        let out = engine.render_named(USAGE, &data).unwrap();

        assert!(!out.contains("Additional help topics"));
        assert!(out.ends_with("for more information about a command.\n"));
    }

    #[test]
    fn test_default_command_template() {
        let engine = Templates::default().compile().unwrap();
        let data = json!({
            "program": "tool",
            "name": "add",
            "usage": "add [options] <item>",
            "short": "add a thing",
            "long": "\n  Adds a thing.\n",
            "callable": true,
            "category": "Command",
            "options": [{ "name": "--force", "help": "overwrite", "padding": "      " }],
        });
        let out = engine.render_named(COMMAND, &data).unwrap();

        assert_eq!(
            out,
            "usage: tool add [options] <item>\n\nAdds a thing.\n\nOptions:\n    --force       overwrite\n"
        );
    }

    #[test]
    fn test_default_command_template_documentation_entry() {
        let engine = Templates::default().compile().unwrap();
        let data = json!({
            "program": "tool",
            "name": "rules",
            "usage": "rules",
            "short": "",
            "long": "Names are lowercase.\n",
            "callable": false,
            "category": "Documentation",
            "options": [],
        });
        let out = engine.render_named(COMMAND, &data).unwrap();
        assert_eq!(out, "Names are lowercase.\n");
    }

    #[test]
    fn test_default_topic_template() {
        let engine = Templates::default().compile().unwrap();
        let data = json!({ "program": "tool", "name": "formats", "short": "", "long": "  All of them.  " });
        assert_eq!(engine.render_named(TOPIC, &data).unwrap(), "All of them.\n");
    }

    #[test]
    fn test_override_single_template() {
        let templates = Templates::new().topic("{{ name }}\n");
        assert_eq!(templates.usage, Templates::default().usage);
        let engine = templates.compile().unwrap();
        let out = engine
            .render_named(TOPIC, &json!({ "name": "formats" }))
            .unwrap();
        assert_eq!(out, "formats\n");
    }

    #[test]
    fn test_compile_rejects_malformed() {
        let err = Templates::new().command("{% if %}").compile().unwrap_err();
        assert!(matches!(err, RenderError::Template(_)));
    }
}
