//! Error types.
//!
//! User mistakes (unknown subcommand, unknown help topic) are not errors at
//! this level: they are reported on stderr and turned into a failure
//! status. The types here cover the two other cases:
//!
//! - [`SetupError`]: a help template does not compile, so
//!   [`AppBuilder::build`](crate::AppBuilder::build) refuses the tool.
//! - [`DispatchError`]: output could not be produced while dispatching
//!   (render failure, broken stream). These are fatal configuration defects.

use subverb_render::RenderError;
use thiserror::Error;

/// Errors raised while assembling an [`App`](crate::App).
#[derive(Debug, Error)]
pub enum SetupError {
    /// One of the help templates failed to compile.
    #[error("invalid help templates: {0}")]
    Templates(#[from] RenderError),
}

/// Fatal errors raised while dispatching.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// A help template failed to render against its data.
    #[error("rendering {template} template: {source}")]
    Render {
        template: &'static str,
        #[source]
        source: RenderError,
    },

    /// Writing to stdout or stderr failed.
    #[error("writing output: {0}")]
    Io(#[from] std::io::Error),
}
