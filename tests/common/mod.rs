//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use syntax_inspector::config::InspectorConfig;
use syntax_inspector::host::HeadlessEditor;
use syntax_inspector::model::{ParseTree, Selection, SyntaxNode};
use syntax_inspector::panel::InspectorPanel;

/// Source matching [`script_tree`]
pub const SCRIPT: &str = "let x = 1;\nfoo(x);";

/// Hand-built tree for [`SCRIPT`], pre-order indices in brackets:
///
/// ```text
/// [0] Script    0..18
/// [1]   Let     0..10
/// [2]     Ident 4..5
/// [3]     Number 8..9
/// [4]   ExprStmt 11..18
/// [5]     Call  11..17
/// [6]       Ident 11..14
/// [7]       Args 14..17
/// [8]         Ident 15..16
/// ```
pub fn script_tree() -> ParseTree {
    ParseTree::new(SyntaxNode::new("Script", 0, 18).with_children(vec![
        SyntaxNode::new("Let", 0, 10).with_children(vec![
            SyntaxNode::new("Ident", 4, 5),
            SyntaxNode::new("Number", 8, 9),
        ]),
        SyntaxNode::new("ExprStmt", 11, 18).with_children(vec![
            SyntaxNode::new("Call", 11, 17).with_children(vec![
                SyntaxNode::new("Ident", 11, 14),
                SyntaxNode::new("Args", 14, 17)
                    .with_children(vec![SyntaxNode::new("Ident", 15, 16)]),
            ]),
        ]),
    ]))
}

/// Headless host showing [`SCRIPT`] with the caret at 0
pub fn script_host() -> HeadlessEditor {
    HeadlessEditor::with_tree(SCRIPT, script_tree())
}

/// A root with `n` one-character leaves; text is `n` letters
pub fn wide_tree(n: usize) -> ParseTree {
    let leaves = (0..n).map(|i| SyntaxNode::new("Leaf", i, i + 1)).collect();
    ParseTree::new(SyntaxNode::new("Root", 0, n).with_children(leaves))
}

/// Headless host with [`wide_tree`] and matching text
pub fn wide_host(n: usize) -> HeadlessEditor {
    HeadlessEditor::with_tree(&"a".repeat(n), wide_tree(n))
}

/// Attach with default config and flush the initial scroll
pub fn attach(host: &mut HeadlessEditor) -> InspectorPanel {
    let mut panel = InspectorPanel::attach(host, InspectorConfig::default());
    panel.tick(host);
    panel
}

/// Move the host selection as an editor keystroke would and notify the panel
pub fn move_selection(host: &mut HeadlessEditor, panel: &mut InspectorPanel, selection: Selection) -> bool {
    let update = host.set_selection(selection);
    panel.handle(host, update)
}

/// Row names with indentation, rows only
pub fn row_texts(panel: &InspectorPanel) -> Vec<String> {
    let view = panel.view().expect("panel is attached");
    view.rows.iter().map(|r| r.text(view.indent_width)).collect()
}
