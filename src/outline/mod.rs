//! Outline rendering
//!
//! Turns a parse tree and the selection into one row per node, in pre-order,
//! each carrying its depth and classification flags. Anonymous nodes only get
//! rows when `show_anonymous_nodes` is set. Every render is a full rebuild;
//! rows hold no editor state.

mod viewport;

use crate::classify::{classify, RowFlags};
use crate::config::InspectorConfig;
use crate::footer::position_footer;
use crate::messages::PanelMsg;
use crate::model::{LineLookup, ParseTree, Selection, Span};

pub use viewport::{OutlineViewport, TITLE_PADDING};

/// One rendered tree node
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineRow {
    /// Position in pre-order
    pub index: usize,
    pub depth: usize,
    pub name: String,
    pub span: Span,
    pub flags: RowFlags,
}

impl OutlineRow {
    /// Indented label, `depth * indent_width` spaces before the name
    pub fn text(&self, indent_width: usize) -> String {
        format!("{:indent$}{}", "", self.name, indent = self.depth * indent_width)
    }

    /// Message sent when the pointer enters this row
    pub fn hover_msg(&self) -> PanelMsg {
        PanelMsg::HoverRow(self.index)
    }

    /// Message sent when this row is clicked
    pub fn click_msg(&self) -> PanelMsg {
        PanelMsg::ClickRow(self.index)
    }
}

/// Result of one render pass: rows, then the footer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutlineView {
    pub rows: Vec<OutlineRow>,
    pub footer: Vec<String>,
    /// Last row in traversal order that received any flag
    pub center_row: Option<usize>,
    pub indent_width: usize,
}

impl OutlineView {
    pub fn row(&self, index: usize) -> Option<&OutlineRow> {
        self.rows.get(index)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows followed by footer lines, as plain text
    pub fn lines(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row.text(self.indent_width))
            .chain(self.footer.iter().cloned())
            .collect()
    }
}

/// Render `tree` against `selection`
pub fn render(
    tree: &ParseTree,
    selection: &Selection,
    lines: &impl LineLookup,
    config: &InspectorConfig,
) -> OutlineView {
    let mut rows = Vec::with_capacity(tree.node_count());
    let mut center_row = None;

    let nodes = if config.show_anonymous_nodes {
        tree.preorder()
    } else {
        tree.named_preorder()
    };

    for (index, (depth, node)) in nodes.enumerate() {
        let flags = classify(node.span, selection);
        if !flags.is_empty() {
            center_row = Some(index);
        }
        rows.push(OutlineRow {
            index,
            depth,
            name: node.name.clone(),
            span: node.span,
            flags,
        });
    }

    let footer = if config.footer {
        position_footer(selection, lines)
    } else {
        Vec::new()
    };

    OutlineView {
        rows,
        footer,
        center_row,
        indent_width: config.indent_width,
    }
}
