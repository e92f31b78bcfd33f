//! Inspector panel lifecycle
//!
//! An [`InspectorPanel`] owns everything the inspector keeps between
//! messages: its dock container, the rendered rows, the highlight store, the
//! rebuild scheduler, its origin tag, and the queue of deferred scrolls.
//! Nothing is shared between panels, so two panels on two hosts never interact.
//!
//! ## Flow
//!
//! - `attach` mounts the dock and performs the first render
//! - `handle` runs [`crate::update::update`] and performs the returned [`Cmd`]s,
//!   feeding every `EditorUpdate` the host produces back into `update`
//! - `detach` restores the host surface

mod dock;

use std::collections::VecDeque;

use crate::commands::Cmd;
use crate::config::InspectorConfig;
use crate::highlight::HighlightState;
use crate::host::{EditorHost, OriginTag};
use crate::messages::Msg;
use crate::model::Span;
use crate::outline::{render, OutlineView, OutlineViewport};
use crate::scheduler::RebuildScheduler;

pub use dock::{clamp_size, split, Axis, Dock, DockPosition, MAX_DOCK_FRACTION, MIN_DOCK_SIZE};

/// State that only exists while the panel is mounted
#[derive(Debug)]
pub(crate) struct Mounted {
    pub(crate) dock: Dock,
    pub(crate) scheduler: RebuildScheduler,
    pub(crate) highlight: HighlightState,
    pub(crate) view: OutlineView,
    pub(crate) viewport: OutlineViewport,
    /// Row currently under the pointer
    pub(crate) hovered: Option<usize>,
    /// Rows to center on at the next tick, oldest first
    pub(crate) pending_scrolls: VecDeque<usize>,
}

impl Mounted {
    pub(crate) fn footer_lines(&self) -> usize {
        self.view.footer.len()
    }
}

#[derive(Debug)]
pub struct InspectorPanel {
    pub(crate) config: InspectorConfig,
    pub(crate) origin: OriginTag,
    /// `None` when inert or detached
    pub(crate) mounted: Option<Mounted>,
}

impl InspectorPanel {
    /// Mount the panel next to the host's editor surface and render once.
    ///
    /// If the host has no surface the panel is inert: it renders nothing and
    /// ignores every message.
    pub fn attach<H: EditorHost>(host: &mut H, config: InspectorConfig) -> Self {
        let origin = OriginTag::fresh();

        let Some(surface) = host.editor_surface() else {
            tracing::warn!("editor surface not found, syntax inspector stays inert");
            return Self {
                config,
                origin,
                mounted: None,
            };
        };

        let dock = Dock::mount(config.dock, config.panel_size, surface);
        host.set_editor_surface(dock.editor_rect());

        let tree = host.current_tree();
        let selection = host.current_selection();
        let mut scheduler = RebuildScheduler::new(origin);
        let decision = scheduler.prime(&tree);

        let view = render(&tree, &selection, &*host, &config);
        let viewport = OutlineViewport::new(dock.panel_rect(), config.row_height);

        let mut pending_scrolls = VecDeque::new();
        if decision.scroll {
            pending_scrolls.extend(view.center_row);
        }

        tracing::debug!(
            position = ?config.dock,
            rows = view.len(),
            origin = origin.raw(),
            "syntax inspector attached"
        );

        Self {
            config,
            origin,
            mounted: Some(Mounted {
                dock,
                scheduler,
                highlight: HighlightState::new(),
                view,
                viewport,
                hovered: None,
                pending_scrolls,
            }),
        }
    }

    /// Remove the container and give the host its original surface back
    pub fn detach<H: EditorHost>(&mut self, host: &mut H) {
        let Some(mounted) = self.mounted.take() else {
            return;
        };
        if mounted.highlight.current().is_some() {
            host.set_highlight_decoration(None);
        }
        host.set_editor_surface(mounted.dock.original());
        tracing::debug!(origin = self.origin.raw(), "syntax inspector detached");
    }

    /// Process one message and perform its commands; returns true if the
    /// panel needs repainting.
    pub fn handle<H: EditorHost>(&mut self, host: &mut H, msg: impl Into<Msg>) -> bool {
        let msg: Msg = msg.into();
        let mut inbox = VecDeque::from([msg]);
        let mut redraw = false;

        while let Some(msg) = inbox.pop_front() {
            let Some(cmd) = crate::update::update(self, &*host, msg) else {
                continue;
            };
            redraw |= cmd.needs_redraw();

            for cmd in cmd.flatten() {
                match cmd {
                    Cmd::Dispatch(tx) => inbox.push_back(Msg::Editor(host.dispatch(tx))),
                    Cmd::SetDecoration(span) => host.set_highlight_decoration(span),
                    Cmd::ScrollIntoView { row } => {
                        if let Some(mounted) = self.mounted.as_mut() {
                            mounted.pending_scrolls.push_back(row);
                        }
                    }
                    Cmd::Redraw | Cmd::None | Cmd::Batch(_) => {}
                }
            }
        }

        redraw
    }

    /// Run deferred scrolls; shorthand for `handle(host, Msg::Tick)`
    pub fn tick<H: EditorHost>(&mut self, host: &mut H) -> bool {
        self.handle(host, Msg::Tick)
    }

    pub fn is_attached(&self) -> bool {
        self.mounted.is_some()
    }

    pub fn origin(&self) -> OriginTag {
        self.origin
    }

    pub fn config(&self) -> &InspectorConfig {
        &self.config
    }

    /// Rows and footer from the latest render
    pub fn view(&self) -> Option<&OutlineView> {
        self.mounted.as_ref().map(|m| &m.view)
    }

    /// Current transient highlight
    pub fn highlight(&self) -> Option<Span> {
        self.mounted.as_ref().and_then(|m| m.highlight.current())
    }

    pub fn dock(&self) -> Option<&Dock> {
        self.mounted.as_ref().map(|m| &m.dock)
    }

    pub fn viewport(&self) -> Option<&OutlineViewport> {
        self.mounted.as_ref().map(|m| &m.viewport)
    }

    pub fn scroll_offset(&self) -> usize {
        self.mounted
            .as_ref()
            .map_or(0, |m| m.viewport.scroll_offset)
    }

    /// Number of scrolls waiting for the next tick
    pub fn pending_scrolls(&self) -> usize {
        self.mounted.as_ref().map_or(0, |m| m.pending_scrolls.len())
    }
}
