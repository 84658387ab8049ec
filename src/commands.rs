//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.
//! The shell core never performs them itself; the host does.

use crate::layout::LayoutState;

/// Side effects requested by an update
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Request a redraw of the shell chrome
    Redraw,
    /// Committed layout changed; the host decides how to persist it
    PersistLayout(LayoutState),
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Redraw plus persisting the given layout
    pub fn commit(layout: &LayoutState) -> Self {
        Cmd::Batch(vec![Cmd::PersistLayout(layout.clone()), Cmd::Redraw])
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            Cmd::PersistLayout(_) => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// The layout to persist, if this command (or a batched one) carries one
    pub fn layout_to_persist(&self) -> Option<&LayoutState> {
        match self {
            Cmd::PersistLayout(layout) => Some(layout),
            Cmd::Batch(cmds) => cmds.iter().rev().find_map(|c| c.layout_to_persist()),
            _ => None,
        }
    }
}
