//! Message types for the Elm-style architecture
//!
//! All panel state changes flow through these message types.

use crate::host::EditorUpdate;
use crate::model::Span;

/// Pointer and wheel input on the panel surface
#[derive(Debug, Clone, PartialEq)]
pub enum PanelMsg {
    // === Row hooks ===
    /// Pointer entered an outline row
    HoverRow(usize),
    /// Pointer entered a node with this span (host-side hit-testing)
    HoverSpan(Span),
    /// Pointer left the row list
    PointerLeft,
    /// Outline row clicked
    ClickRow(usize),
    /// Node with this span clicked
    ClickSpan(Span),

    // === Raw pointer input (panel coordinates, logical pixels) ===
    /// Pointer moved to a position inside the host window
    PointerMoved { x: f32, y: f32 },
    /// Primary button pressed at a position inside the host window
    PointerPressed { x: f32, y: f32 },
    /// Scroll the row list (positive = down, negative = up)
    Scroll(i32),
}

/// Top-level message type
#[derive(Debug, Clone)]
pub enum Msg {
    /// Change notification from the editor host
    Editor(EditorUpdate),
    /// Input on the panel
    Panel(PanelMsg),
    /// Scheduler tick; runs deferred scrolls
    Tick,
}

impl From<PanelMsg> for Msg {
    fn from(msg: PanelMsg) -> Self {
        Msg::Panel(msg)
    }
}

impl From<EditorUpdate> for Msg {
    fn from(update: EditorUpdate) -> Self {
        Msg::Editor(update)
    }
}
