//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that should be performed after an update.

use crate::host::Transaction;
use crate::model::Span;

/// Commands returned by update functions
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Repaint the panel
    Redraw,
    /// Dispatch a transaction to the editor host
    Dispatch(Transaction),
    /// Show or remove the highlight decoration in the editor
    SetDecoration(Option<Span>),
    /// Center the panel on a row at the next tick
    ScrollIntoView { row: usize },
    /// Execute multiple commands
    Batch(Vec<Cmd>),
}

impl Cmd {
    /// Create a batch of commands
    pub fn batch(cmds: Vec<Cmd>) -> Self {
        Cmd::Batch(cmds)
    }

    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw => true,
            // The host update coming back decides whether the panel changes
            Cmd::Dispatch(_) => false,
            Cmd::SetDecoration(_) => false,
            Cmd::ScrollIntoView { .. } => false,
            Cmd::Batch(cmds) => cmds.iter().any(|c| c.needs_redraw()),
        }
    }

    /// Flatten nested batches into execution order, dropping `None`
    pub fn flatten(self) -> Vec<Cmd> {
        let mut out = Vec::new();
        self.flatten_into(&mut out);
        out
    }

    fn flatten_into(self, out: &mut Vec<Cmd>) {
        match self {
            Cmd::None => {}
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    cmd.flatten_into(out);
                }
            }
            other => out.push(other),
        }
    }
}
