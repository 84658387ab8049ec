//! Plugins - independently authored producers of slot content
//!
//! A plugin only ever talks to the shell through its [`PluginContext`]: it
//! fills slots by name and registers subscriptions. The [`PluginLoader`]
//! renders each plugin in isolation so one failing plugin only removes its
//! own contribution.

pub mod builtins;
mod context;
mod loader;

pub use context::{PluginContext, Subscription};
pub use loader::{
    CollectingReporter, ErrorReporter, PluginLoader, PluginReport, PluginStatus, TracingReporter,
};

use thiserror::Error;

/// Why a plugin render failed
#[derive(Debug, Error)]
pub enum PluginError {
    #[error("{0}")]
    Render(String),
    #[error("panicked: {0}")]
    Panicked(String),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PluginError {
    pub fn render(message: impl Into<String>) -> Self {
        PluginError::Render(message.into())
    }
}

/// A producer of slot content
pub trait Plugin<C> {
    /// Unique name, used to address the plugin and in failure reports
    fn name(&self) -> &str;

    /// Publish the plugin's current content through `ctx`
    ///
    /// Called on mount and on every re-render. Fills not published in a
    /// successful render are withdrawn afterwards.
    fn render(&mut self, ctx: &mut PluginContext<C>) -> Result<(), PluginError>;
}
