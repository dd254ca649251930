//! The ordered collection of subcommands and topics a tool knows about.

use serde::Serialize;

use crate::command::{CommandData, Subcommand};
use crate::topic::{Topic, TopicData};

/// The data the `usage` template receives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UsageData {
    pub program: String,
    pub commands: Vec<CommandData>,
    pub topics: Vec<TopicData>,
}

/// Subcommands and topics in registration order.
///
/// Order decides two things: the order of the help listing, and which
/// entry wins when two share a name (the first one registered).
#[derive(Default)]
pub struct Registry {
    commands: Vec<Box<dyn Subcommand>>,
    topics: Vec<Topic>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a subcommand.
    pub fn push(&mut self, command: Box<dyn Subcommand>) {
        self.commands.push(command);
    }

    /// Appends a topic.
    pub fn push_topic(&mut self, topic: Topic) {
        self.topics.push(topic);
    }

    /// Returns the first subcommand named `name`, callable or not.
    pub fn lookup(&self, name: &str) -> Option<&dyn Subcommand> {
        self.commands
            .iter()
            .map(|c| c.as_ref())
            .find(|c| c.name() == name)
    }

    /// Returns the first callable subcommand named `name`.
    ///
    /// Documentation entries are skipped, so a help-only `hey` registered
    /// before a runnable `hey` does not hide it.
    pub fn lookup_callable_mut(&mut self, name: &str) -> Option<&mut (dyn Subcommand + 'static)> {
        self.commands
            .iter_mut()
            .find(|c| c.is_callable() && c.name() == name)
            .map(|c| c.as_mut())
    }

    /// Returns the first topic named `name`.
    pub fn lookup_topic(&self, name: &str) -> Option<&Topic> {
        self.topics.iter().find(|t| t.name == name)
    }

    /// Iterates subcommands in registration order.
    pub fn commands(&self) -> impl Iterator<Item = &dyn Subcommand> {
        self.commands.iter().map(|c| c.as_ref())
    }

    pub fn topics(&self) -> &[Topic] {
        &self.topics
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Builds the `usage` template data.
    pub fn data(&self, program: &str) -> UsageData {
        UsageData {
            program: program.to_string(),
            commands: self.commands().map(|c| c.data()).collect(),
            topics: self.topics.iter().map(Topic::data).collect(),
        }
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("commands", &self.commands().map(|c| c.name()).collect::<Vec<_>>())
            .field("topics", &self.topics.iter().map(|t| &t.name).collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::{Category, Command};

    fn registry() -> Registry {
        let mut registry = Registry::new();
        registry.push(Box::new(Command::new("hey").short("documentation about hey")));
        registry.push(Box::new(
            Command::new("hey [name]")
                .short("runs hey")
                .run(|_ctx, _args| Ok(())),
        ));
        registry.push(Box::new(Command::new("bye").short("first bye").run(|_ctx, _args| Ok(()))));
        registry.push(Box::new(Command::new("bye").short("second bye").run(|_ctx, _args| Ok(()))));
        registry.push_topic(Topic::new("hey", "topic hey", ""));
        registry.push_topic(Topic::new("formats", "supported formats", ""));
        registry
    }

    #[test]
    fn test_lookup_first_match() {
        let registry = registry();
        assert_eq!(registry.lookup("hey").unwrap().short(), "documentation about hey");
        assert_eq!(registry.lookup("bye").unwrap().short(), "first bye");
        assert!(registry.lookup("nope").is_none());
    }

    #[test]
    fn test_lookup_callable_skips_documentation() {
        let mut registry = registry();
        let hey = registry.lookup_callable_mut("hey").unwrap();
        assert_eq!(hey.short(), "runs hey");
        assert_eq!(hey.category(), Category::Command);
        assert_eq!(registry.lookup_callable_mut("bye").unwrap().short(), "first bye");
    }

    #[test]
    fn test_lookup_topic_independent_of_commands() {
        let registry = registry();
        assert_eq!(registry.lookup_topic("hey").unwrap().short, "topic hey");
        assert_eq!(registry.lookup_topic("formats").unwrap().short, "supported formats");
        assert!(registry.lookup_topic("bye").is_none());
    }

    #[test]
    fn test_data_keeps_order() {
        let data = registry().data("tool");
        assert_eq!(data.program, "tool");
        let names: Vec<_> = data.commands.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["hey", "hey", "bye", "bye"]);
        let topics: Vec<_> = data.topics.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(topics, ["hey", "formats"]);
    }

    #[test]
    fn test_empty() {
        let mut registry = Registry::new();
        assert!(registry.is_empty());
        assert!(registry.lookup_callable_mut("hey").is_none());
        registry.push(Box::new(Command::new("hey")));
        assert_eq!(registry.len(), 1);
        // documentation only
        assert!(registry.lookup_callable_mut("hey").is_none());
    }
}
