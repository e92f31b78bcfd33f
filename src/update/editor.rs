//! Editor notification handling: highlight store, then rebuild scheduling

use crate::commands::Cmd;
use crate::host::{EditorHost, EditorUpdate};
use crate::outline::render;
use crate::panel::InspectorPanel;

/// Handle one `EditorUpdate` from the host
pub fn update_editor<H: EditorHost>(
    panel: &mut InspectorPanel,
    host: &H,
    update: EditorUpdate,
) -> Option<Cmd> {
    let config = &panel.config;
    let mounted = panel.mounted.as_mut()?;
    let mut cmds = Vec::new();

    if mounted
        .highlight
        .apply(update.selection_changed, &update.effects)
    {
        let current = mounted.highlight.current();
        if current.is_none() {
            // Whoever cleared it, hovering the same row again must re-send
            mounted.hovered = None;
        }
        cmds.push(Cmd::SetDecoration(current));
    }

    let decision = mounted.scheduler.on_update(&update);
    if decision.rebuild {
        mounted.view = render(&update.tree, &update.selection, host, config);
        mounted.hovered = None;
        let footer_lines = mounted.footer_lines();
        mounted.viewport.clamp(mounted.view.len(), footer_lines);
        cmds.push(Cmd::Redraw);

        if decision.scroll {
            if let Some(row) = mounted.view.center_row {
                cmds.push(Cmd::ScrollIntoView { row });
            }
        }
    }

    match cmds.len() {
        0 => None,
        1 => cmds.pop(),
        _ => Some(Cmd::batch(cmds)),
    }
}
