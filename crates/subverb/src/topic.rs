//! Help topics: named documentation with no command behind it.
//!
//! Topics show up in the usage listing and answer `help <name>`, but they
//! are never dispatch targets. When a command and a topic share a name,
//! `help <name>` shows the command.

use serde::Serialize;

/// The data a `topic` help template receives.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TopicData {
    pub name: String,
    pub short: String,
    pub long: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topic {
    pub name: String,
    pub short: String,
    pub long: String,
}

impl Topic {
    pub fn new(name: impl Into<String>, short: impl Into<String>, long: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            short: short.into(),
            long: long.into(),
        }
    }

    /// Builds a topic from a block of text.
    ///
    /// The first non-blank line is the summary and everything after it is
    /// the body, so a topic can live in a plain text file pulled in with
    /// `include_str!`.
    ///
    /// ```rust
    /// use subverb::Topic;
    ///
    /// let topic = Topic::from_text("formats", "\nSupported formats\n\nJSON and YAML.\n");
    /// assert_eq!(topic.short, "Supported formats");
    /// assert_eq!(topic.long, "JSON and YAML.");
    /// ```
    pub fn from_text(name: impl Into<String>, text: &str) -> Self {
        let lines: Vec<&str> = text.lines().collect();
        match lines.iter().position(|l| !l.trim().is_empty()) {
            Some(idx) => Self::new(
                name,
                lines[idx].trim(),
                lines[idx + 1..].join("\n").trim(),
            ),
            None => Self::new(name, "", ""),
        }
    }

    pub fn data(&self) -> TopicData {
        TopicData {
            name: self.name.clone(),
            short: self.short.clone(),
            long: self.long.clone(),
        }
    }
}
