//! Per-invocation rendering and output state.

use serde::Serialize;
use std::io::Write;
use subverb_render::{TemplateEngine, COMMAND, TOPIC, USAGE};

use crate::command::CommandData;
use crate::error::DispatchError;
use crate::registry::UsageData;
use crate::topic::TopicData;

/// Everything a subcommand needs from the dispatcher while it runs: the
/// program name, the compiled help templates and the two output streams.
///
/// Help output is rendered to a `String` first and written only once
/// rendering has succeeded, so a failing template never leaves half a
/// screen of output behind.
pub struct Session<'a> {
    pub(crate) program: &'a str,
    pub(crate) engine: &'a dyn TemplateEngine,
    pub(crate) out: &'a mut dyn Write,
    pub(crate) err: &'a mut dyn Write,
}

/// A command or topic rendered together with the program name.
#[derive(Serialize)]
struct View<'a, T: Serialize> {
    program: &'a str,
    #[serde(flatten)]
    data: &'a T,
}

impl<'a> Session<'a> {
    pub(crate) fn new(
        program: &'a str,
        engine: &'a dyn TemplateEngine,
        out: &'a mut dyn Write,
        err: &'a mut dyn Write,
    ) -> Self {
        Self {
            program,
            engine,
            out,
            err,
        }
    }

    /// The program name shown in help output.
    pub fn program(&self) -> &str {
        self.program
    }

    /// Standard output.
    pub fn out(&mut self) -> &mut dyn Write {
        &mut *self.out
    }

    /// Standard error.
    pub fn err(&mut self) -> &mut dyn Write {
        &mut *self.err
    }

    /// Renders the top-level usage view.
    pub fn render_usage(&self, data: &UsageData) -> Result<String, DispatchError> {
        self.render(USAGE, data)
    }

    /// Renders the help view of one command.
    pub fn render_command(&self, data: &CommandData) -> Result<String, DispatchError> {
        self.render(
            COMMAND,
            &View {
                program: self.program,
                data,
            },
        )
    }

    /// Renders the help view of one topic.
    pub fn render_topic(&self, data: &TopicData) -> Result<String, DispatchError> {
        self.render(
            TOPIC,
            &View {
                program: self.program,
                data,
            },
        )
    }

    fn render<T: Serialize>(&self, template: &'static str, data: &T) -> Result<String, DispatchError> {
        let value = serde_json::to_value(data).map_err(|e| DispatchError::Render {
            template,
            source: e.into(),
        })?;
        self.engine
            .render_named(template, &value)
            .map_err(|source| DispatchError::Render { template, source })
    }
}
