//! Template engine abstraction.
//!
//! The dispatcher only needs "render this named template with this data".
//! [`TemplateEngine`] captures that contract so the dispatcher never touches
//! minijinja directly; [`MiniJinjaEngine`] is the implementation shipped here.

use minijinja::{Environment, UndefinedBehavior, Value};

use crate::error::RenderError;
use crate::template::filters::register_filters;

/// A template engine that can render templates with data.
pub trait TemplateEngine: Send + Sync {
    /// Compiles a template and stores it under `name`.
    ///
    /// A template with a syntax error is rejected here rather than at render
    /// time.
    fn add_template(&mut self, name: &str, source: &str) -> Result<(), RenderError>;

    /// Renders a previously registered template.
    fn render_named(&self, name: &str, data: &serde_json::Value) -> Result<String, RenderError>;

    /// Compiles and renders a template string in one step.
    fn render_template(&self, source: &str, data: &serde_json::Value)
        -> Result<String, RenderError>;

    /// Checks if a template with the given name exists.
    fn has_template(&self, name: &str) -> bool;
}

/// MiniJinja-based template engine.
///
/// The environment is configured for help text:
///
/// - undefined values are errors, so a template that names a field the data
///   does not have fails loudly instead of printing nothing;
/// - a template's final newline is kept;
/// - `trim`, `capitalize` and `pad_right` are registered.
///
/// ```rust
/// use subverb_render::{MiniJinjaEngine, TemplateEngine};
/// use serde_json::json;
///
/// let mut engine = MiniJinjaEngine::new();
/// engine.add_template("hi", "Hello, {{ name | capitalize }}!\n").unwrap();
///
/// let out = engine.render_named("hi", &json!({ "name": "world" })).unwrap();
/// assert_eq!(out, "Hello, World!\n");
/// ```
#[derive(Debug)]
pub struct MiniJinjaEngine {
    env: Environment<'static>,
}

impl MiniJinjaEngine {
    /// Creates a new engine with the help filters registered.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        register_filters(&mut env);
        Self { env }
    }

    /// Returns a reference to the underlying MiniJinja environment.
    pub fn environment(&self) -> &Environment<'static> {
        &self.env
    }

    /// Returns a mutable reference to the underlying MiniJinja environment.
    ///
    /// Use this to register extra filters or functions for custom templates.
    pub fn environment_mut(&mut self) -> &mut Environment<'static> {
        &mut self.env
    }
}

impl Default for MiniJinjaEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateEngine for MiniJinjaEngine {
    fn add_template(&mut self, name: &str, source: &str) -> Result<(), RenderError> {
        self.env
            .add_template_owned(name.to_string(), source.to_string())?;
        Ok(())
    }

    fn render_named(&self, name: &str, data: &serde_json::Value) -> Result<String, RenderError> {
        let tmpl = self.env.get_template(name)?;
        Ok(tmpl.render(Value::from_serialize(data))?)
    }

    fn render_template(
        &self,
        source: &str,
        data: &serde_json::Value,
    ) -> Result<String, RenderError> {
        Ok(self.env.render_str(source, Value::from_serialize(data))?)
    }

    fn has_template(&self, name: &str) -> bool {
        self.env.get_template(name).is_ok()
    }
}
