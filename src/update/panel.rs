//! Panel input handlers: hover, click, pointer, scroll, tick

use crate::commands::Cmd;
use crate::host::{HighlightEffect, OriginTag, Transaction};
use crate::messages::PanelMsg;
use crate::model::{Selection, SelectionRange, Span};
use crate::panel::InspectorPanel;

/// Handle pointer and wheel input on the panel
pub fn update_panel(panel: &mut InspectorPanel, msg: PanelMsg) -> Option<Cmd> {
    let origin = panel.origin;
    let mounted = panel.mounted.as_mut()?;

    match msg {
        PanelMsg::HoverRow(index) => {
            if mounted.hovered == Some(index) {
                return None;
            }
            let span = mounted.view.row(index)?.span;
            mounted.hovered = Some(index);
            Some(highlight(span))
        }

        PanelMsg::HoverSpan(span) => {
            mounted.hovered = None;
            Some(highlight(span))
        }

        PanelMsg::PointerLeft => {
            let was_hovering = mounted.hovered.take().is_some();
            if was_hovering || mounted.highlight.current().is_some() {
                Some(Cmd::Dispatch(Transaction::highlight(
                    HighlightEffect::clear(),
                )))
            } else {
                None
            }
        }

        PanelMsg::ClickRow(index) => {
            let span = mounted.view.row(index)?.span;
            Some(select(span, origin))
        }

        PanelMsg::ClickSpan(span) => Some(select(span, origin)),

        PanelMsg::PointerMoved { x, y } => {
            let hit = mounted.viewport.row_at(
                x,
                y,
                mounted.view.len(),
                mounted.footer_lines(),
            );
            let msg = match hit {
                Some(index) => PanelMsg::HoverRow(index),
                None => PanelMsg::PointerLeft,
            };
            update_panel(panel, msg)
        }

        PanelMsg::PointerPressed { x, y } => {
            let index = mounted.viewport.row_at(
                x,
                y,
                mounted.view.len(),
                mounted.footer_lines(),
            )?;
            update_panel(panel, PanelMsg::ClickRow(index))
        }

        PanelMsg::Scroll(lines) => {
            let before = mounted.viewport.scroll_offset;
            let footer_lines = mounted.footer_lines();
            mounted
                .viewport
                .scroll_by(lines, mounted.view.len(), footer_lines);
            (mounted.viewport.scroll_offset != before).then_some(Cmd::Redraw)
        }
    }
}

/// Perform every deferred scroll, oldest first
pub fn update_tick(panel: &mut InspectorPanel) -> Option<Cmd> {
    let mounted = panel.mounted.as_mut()?;
    if mounted.pending_scrolls.is_empty() {
        return None;
    }

    let total = mounted.view.len();
    let footer_lines = mounted.footer_lines();
    while let Some(row) = mounted.pending_scrolls.pop_front() {
        mounted.viewport.center_on(row, total, footer_lines);
    }
    tracing::trace!(offset = mounted.viewport.scroll_offset, "scrolled into view");
    Some(Cmd::Redraw)
}

fn highlight(span: Span) -> Cmd {
    Cmd::Dispatch(Transaction::highlight(HighlightEffect::set(span)))
}

/// Select the node, anchor at its start and head at its end
fn select(span: Span, origin: OriginTag) -> Cmd {
    let selection = Selection::single(SelectionRange::new(span.from, span.to));
    Cmd::Dispatch(Transaction::select(selection, origin))
}
