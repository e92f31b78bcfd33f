//! Rebuild scheduling
//!
//! Decides per editor update whether the outline is rebuilt and whether that
//! rebuild may scroll the panel.

use crate::host::{EditorUpdate, OriginTag};
use crate::model::ParseTree;

/// Outcome of one scheduling decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RebuildDecision {
    pub rebuild: bool,
    /// Only meaningful when `rebuild` is set
    pub scroll: bool,
}

impl RebuildDecision {
    pub const SKIP: Self = Self {
        rebuild: false,
        scroll: false,
    };
}

#[derive(Debug, Clone)]
pub struct RebuildScheduler {
    origin: OriginTag,
    last_tree: Option<ParseTree>,
}

impl RebuildScheduler {
    pub fn new(origin: OriginTag) -> Self {
        Self {
            origin,
            last_tree: None,
        }
    }

    /// Record the tree rendered at mount time; that render may scroll
    pub fn prime(&mut self, tree: &ParseTree) -> RebuildDecision {
        self.last_tree = Some(tree.clone());
        RebuildDecision {
            rebuild: true,
            scroll: true,
        }
    }

    pub fn on_update(&mut self, update: &EditorUpdate) -> RebuildDecision {
        let tree_changed = match &self.last_tree {
            Some(last) => !last.same_tree(&update.tree),
            None => true,
        };

        if !tree_changed && !update.selection_changed {
            return RebuildDecision::SKIP;
        }

        self.last_tree = Some(update.tree.clone());
        let from_self = update.origin == Some(self.origin);

        tracing::debug!(
            tree_changed,
            selection_changed = update.selection_changed,
            from_self,
            "outline rebuild"
        );

        RebuildDecision {
            rebuild: true,
            scroll: !from_self,
        }
    }
}
