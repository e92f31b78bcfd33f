//! Update functions for the Elm-style architecture
//!
//! All panel state transformations flow through these functions.

mod editor;
mod panel;

use crate::commands::Cmd;
use crate::host::EditorHost;
use crate::messages::Msg;
use crate::panel::InspectorPanel;

#[cfg(any(debug_assertions, feature = "trace-updates"))]
use tracing::{debug, span, Level};

pub use editor::update_editor;
pub use panel::{update_panel, update_tick};

/// Main update function - dispatches to sub-handlers
///
/// In debug builds (or with the `trace-updates` feature), this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update<H: EditorHost>(panel: &mut InspectorPanel, host: &H, msg: Msg) -> Option<Cmd> {
    #[cfg(any(debug_assertions, feature = "trace-updates"))]
    {
        update_traced(panel, host, msg)
    }
    #[cfg(not(any(debug_assertions, feature = "trace-updates")))]
    {
        update_inner(panel, host, msg)
    }
}

fn update_inner<H: EditorHost>(panel: &mut InspectorPanel, host: &H, msg: Msg) -> Option<Cmd> {
    // Inert or detached panels ignore everything
    if !panel.is_attached() {
        return None;
    }

    match msg {
        Msg::Editor(update) => editor::update_editor(panel, host, update),
        Msg::Panel(m) => panel::update_panel(panel, m),
        Msg::Tick => panel::update_tick(panel),
    }
}

/// Traced update wrapper (debug builds or `trace-updates`)
///
/// Ticks are frequent and usually empty, so they are not logged.
#[cfg(any(debug_assertions, feature = "trace-updates"))]
fn update_traced<H: EditorHost>(panel: &mut InspectorPanel, host: &H, msg: Msg) -> Option<Cmd> {
    let is_noisy = matches!(&msg, Msg::Tick);

    let msg_name = msg_type_name(&msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    if !is_noisy {
        debug!(target: "message", msg = %msg_name, "processing");
    }

    let result = update_inner(panel, host, msg);

    if let Some(cmd) = &result {
        tracing::trace!(target: "message", ?cmd, "produced");
    }

    result
}

/// Get a display name for a message type
///
/// Editor updates only show their flags; trees can be large.
#[cfg(any(debug_assertions, feature = "trace-updates"))]
fn msg_type_name(msg: &Msg) -> String {
    match msg {
        Msg::Editor(u) => format!(
            "Editor(selection_changed={}, doc_changed={}, effects={}, tagged={})",
            u.selection_changed,
            u.doc_changed,
            u.effects.len(),
            u.origin.is_some()
        ),
        Msg::Panel(m) => format!("Panel::{:?}", m),
        Msg::Tick => "Tick".to_string(),
    }
}
