//! Rebuild scheduling and the panel-click feedback loop

mod common;

use common::{attach, move_selection, script_host, script_tree, wide_host};
use syntax_inspector::classify::RowFlags;
use syntax_inspector::host::{EditorHost, OriginTag, Transaction};
use syntax_inspector::messages::PanelMsg;
use syntax_inspector::model::{Selection, SelectionRange};

#[test]
fn test_click_selects_node_span_with_origin() {
    let mut host = script_host();
    let mut panel = attach(&mut host);

    assert!(panel.handle(&mut host, PanelMsg::ClickRow(3)));

    assert_eq!(host.selection(), &Selection::single(SelectionRange::new(8, 9)));
    let tx = host.dispatched().last().unwrap();
    assert_eq!(tx.origin, Some(panel.origin()));
    assert!(tx.effects.is_empty());
}

#[test]
fn test_click_rerenders_flags_without_scrolling() {
    let mut host = wide_host(200);
    let mut panel = attach(&mut host);
    move_selection(&mut host, &mut panel, Selection::caret(150));
    panel.tick(&mut host);
    assert_eq!(panel.scroll_offset(), 130);

    panel.handle(&mut host, PanelMsg::ClickRow(140));

    // Rows were rebuilt against the new selection
    let view = panel.view().unwrap();
    assert!(view.rows[140].flags.contains(RowFlags::FULLY_COVERED));
    // The selection head sits on the next leaf's start
    assert_eq!(view.rows[141].flags, RowFlags::CURSOR_AT_START);
    assert_eq!(view.center_row, Some(141));

    // ...but the panel did not schedule a scroll for its own change
    assert_eq!(panel.pending_scrolls(), 0);
    panel.tick(&mut host);
    assert_eq!(panel.scroll_offset(), 130);
}

#[test]
fn test_editor_selection_change_scrolls_next_tick() {
    let mut host = wide_host(200);
    let mut panel = attach(&mut host);

    assert!(move_selection(&mut host, &mut panel, Selection::caret(150)));
    assert_eq!(panel.pending_scrolls(), 1);
    assert_eq!(panel.scroll_offset(), 0);

    panel.tick(&mut host);
    assert_eq!(panel.scroll_offset(), 130);
}

#[test]
fn test_foreign_origin_still_scrolls() {
    let mut host = wide_host(200);
    let mut panel = attach(&mut host);

    let other = OriginTag::fresh();
    let update = host.dispatch(Transaction::select(Selection::caret(100), other));
    panel.handle(&mut host, update);

    assert_eq!(panel.pending_scrolls(), 1);
}

#[test]
fn test_queued_scrolls_all_run_and_last_wins() {
    let mut host = wide_host(200);
    let mut panel = attach(&mut host);

    move_selection(&mut host, &mut panel, Selection::caret(150));
    move_selection(&mut host, &mut panel, Selection::caret(60));
    assert_eq!(panel.pending_scrolls(), 2);

    panel.tick(&mut host);
    assert_eq!(panel.pending_scrolls(), 0);
    // Row 61 centred
    assert_eq!(panel.scroll_offset(), 40);
}

#[test]
fn test_no_op_update_leaves_panel_untouched() {
    let mut host = wide_host(200);
    let mut panel = attach(&mut host);
    move_selection(&mut host, &mut panel, Selection::caret(150));
    panel.tick(&mut host);

    let before = panel.view().unwrap().clone();
    let update = host.idle_update();
    assert!(!panel.handle(&mut host, update));

    assert_eq!(panel.view().unwrap(), &before);
    assert_eq!(panel.pending_scrolls(), 0);
    assert_eq!(panel.scroll_offset(), 130);
}

#[test]
fn test_new_tree_identity_forces_rebuild() {
    let mut host = script_host();
    let mut panel = attach(&mut host);

    // Structurally equal, but a different snapshot
    let update = host.set_tree(script_tree());
    assert!(panel.handle(&mut host, update));
    assert_eq!(panel.pending_scrolls(), 1);
}

#[test]
fn test_same_tree_and_selection_render_identically() {
    let mut host = script_host();
    let mut panel = attach(&mut host);
    move_selection(&mut host, &mut panel, Selection::caret(15));
    let first = panel.view().unwrap().clone();

    move_selection(&mut host, &mut panel, Selection::caret(15));
    assert_eq!(panel.view().unwrap(), &first);
}

#[test]
fn test_flags_follow_editor_selection() {
    let mut host = script_host();
    let mut panel = attach(&mut host);
    move_selection(&mut host, &mut panel, Selection::caret(15));

    let view = panel.view().unwrap();
    let flags: Vec<RowFlags> = view.rows.iter().map(|r| r.flags).collect();
    assert_eq!(flags[0], RowFlags::PARTIAL); // Script
    assert!(flags[1].is_empty()); // Let
    assert!(flags[6].is_empty()); // Ident 11..14
    assert_eq!(flags[7], RowFlags::PARTIAL); // Args 14..17
    assert_eq!(flags[8], RowFlags::CURSOR_AT_START); // Ident 15..16
    assert_eq!(view.center_row, Some(8));
}

#[test]
fn test_multi_range_selection_flags_and_footer() {
    let mut host = script_host();
    let mut panel = attach(&mut host);
    let selection = Selection::from_ranges(vec![
        SelectionRange::new(0, 10),
        SelectionRange::caret(15),
    ])
    .unwrap();
    move_selection(&mut host, &mut panel, selection);

    let view = panel.view().unwrap();
    assert!(view.rows[1].flags.contains(RowFlags::FULLY_COVERED));
    assert!(view.rows[8].flags.contains(RowFlags::CURSOR_AT_START));
    assert_eq!(
        view.footer,
        vec!["line 1, col 11, pos 10", "line 2, col 5, pos 15"]
    );
}

#[test]
fn test_edit_rebuilds_with_mapped_selection() {
    let mut host = syntax_inspector::HeadlessEditor::new("[1, 2]", syntax_inspector::LanguageId::Json)
        .unwrap()
        .with_selection(Selection::caret(4));
    let mut panel = attach(&mut host);

    let update = host.replace(0, 0, "  ");
    assert!(panel.handle(&mut host, update));

    assert_eq!(host.selection(), &Selection::caret(6));
    assert_eq!(panel.view().unwrap().footer, vec!["line 1, col 7, pos 6"]);
}

#[test]
fn test_unchanged_reparse_is_not_a_rebuild() {
    let mut host =
        syntax_inspector::HeadlessEditor::new("[1, 2]", syntax_inspector::LanguageId::Json)
            .unwrap();
    let mut panel = attach(&mut host);

    // Text ends up identical, so the parser hands back the same snapshot
    let update = host.replace(1, 2, "1");
    assert!(update.doc_changed);
    assert!(!panel.handle(&mut host, update));
}
