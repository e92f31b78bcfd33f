//! Dock container geometry
//!
//! Carves the inspector's container out of the editor surface and remembers
//! the surface's original rect so detaching can put it back.

use serde::{Deserialize, Serialize};

use crate::model::Rect;

/// Position where the dock is placed relative to the editor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DockPosition {
    Left,
    #[default]
    Right,
    Bottom,
}

impl DockPosition {
    /// Returns the axis this dock expands along
    pub fn axis(&self) -> Axis {
        match self {
            DockPosition::Left | DockPosition::Right => Axis::Vertical,
            DockPosition::Bottom => Axis::Horizontal,
        }
    }
}

/// Axis for dock sizing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Minimum dock size in logical pixels
pub const MIN_DOCK_SIZE: f32 = 120.0;

/// Maximum dock size as fraction of the host extent
pub const MAX_DOCK_FRACTION: f32 = 0.5;

/// A mounted dock container
#[derive(Debug, Clone, PartialEq)]
pub struct Dock {
    pub position: DockPosition,

    /// Requested size in logical pixels (width for left/right, height for bottom)
    pub size_logical: f32,

    /// Host surface rect before the dock was carved out
    original: Rect,

    /// Editor part after the split
    editor_rect: Rect,

    /// Panel part after the split
    panel_rect: Rect,
}

impl Dock {
    /// Split `host` and remember it for [`Dock::original`]
    pub fn mount(position: DockPosition, size_logical: f32, host: Rect) -> Self {
        let (editor_rect, panel_rect) = split(position, size_logical, host);
        Self {
            position,
            size_logical,
            original: host,
            editor_rect,
            panel_rect,
        }
    }

    /// Host rect at mount time, restored on detach
    pub fn original(&self) -> Rect {
        self.original
    }

    pub fn editor_rect(&self) -> Rect {
        self.editor_rect
    }

    pub fn panel_rect(&self) -> Rect {
        self.panel_rect
    }
}

/// Clamp a requested size to `[MIN_DOCK_SIZE, MAX_DOCK_FRACTION * extent]`.
///
/// When the host is too small for the minimum, the fraction cap wins.
pub fn clamp_size(requested: f32, extent: f32) -> f32 {
    let max = (extent * MAX_DOCK_FRACTION).max(0.0);
    requested.max(MIN_DOCK_SIZE).min(max)
}

/// Split `host` into `(editor_rect, panel_rect)` for a dock at `position`
pub fn split(position: DockPosition, size_logical: f32, host: Rect) -> (Rect, Rect) {
    match position {
        DockPosition::Left => {
            let size = clamp_size(size_logical, host.width);
            (
                Rect::new(host.x + size, host.y, host.width - size, host.height),
                Rect::new(host.x, host.y, size, host.height),
            )
        }
        DockPosition::Right => {
            let size = clamp_size(size_logical, host.width);
            (
                Rect::new(host.x, host.y, host.width - size, host.height),
                Rect::new(host.right() - size, host.y, size, host.height),
            )
        }
        DockPosition::Bottom => {
            let size = clamp_size(size_logical, host.height);
            (
                Rect::new(host.x, host.y, host.width, host.height - size),
                Rect::new(host.x, host.bottom() - size, host.width, size),
            )
        }
    }
}
