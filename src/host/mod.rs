//! Host editor contract
//!
//! The inspector never owns the document, the parser, or the selection. It
//! reads them through [`EditorHost`] and changes them only by dispatching a
//! [`Transaction`]; the host answers every transaction with the
//! [`EditorUpdate`] it produced, which is fed back through `update`.

mod headless;

use std::sync::atomic::{AtomicU64, Ordering};

use crate::model::{LineLookup, ParseTree, Rect, Selection, Span};

pub use headless::HeadlessEditor;

static NEXT_ORIGIN: AtomicU64 = AtomicU64::new(1);

/// Opaque causality tag attached to a dispatched transaction.
///
/// Each panel instance owns one; an update carrying it was caused by that
/// panel and not by any other input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OriginTag(u64);

impl OriginTag {
    /// A tag no other caller in this process has received
    pub fn fresh() -> Self {
        Self(NEXT_ORIGIN.fetch_add(1, Ordering::Relaxed))
    }

    pub fn raw(self) -> u64 {
        self.0
    }
}

/// Set or clear the transient highlight (`None` clears)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightEffect(pub Option<Span>);

impl HighlightEffect {
    pub fn set(span: Span) -> Self {
        Self(Some(span))
    }

    pub fn clear() -> Self {
        Self(None)
    }
}

/// A change request applied atomically by the host
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transaction {
    pub effects: Vec<HighlightEffect>,
    pub selection: Option<Selection>,
    pub origin: Option<OriginTag>,
}

impl Transaction {
    /// Highlight-only transaction
    pub fn highlight(effect: HighlightEffect) -> Self {
        Self {
            effects: vec![effect],
            ..Self::default()
        }
    }

    /// Selection change tagged with the panel's origin
    pub fn select(selection: Selection, origin: OriginTag) -> Self {
        Self {
            effects: Vec::new(),
            selection: Some(selection),
            origin: Some(origin),
        }
    }
}

/// Notification sent by the host after every applied change
#[derive(Debug, Clone)]
pub struct EditorUpdate {
    /// Current tree snapshot (same identity if the parse did not change)
    pub tree: ParseTree,
    /// Current selection
    pub selection: Selection,
    /// Whether this update set or moved the selection
    pub selection_changed: bool,
    /// Whether the document text changed
    pub doc_changed: bool,
    /// Origin tag of the transaction that produced this update, if any
    pub origin: Option<OriginTag>,
    /// Highlight effects carried by the transaction, in order
    pub effects: Vec<HighlightEffect>,
}

/// Everything the inspector needs from the editor
pub trait EditorHost: LineLookup {
    /// Current parse tree (identity-stable across no-op updates)
    fn current_tree(&self) -> ParseTree;

    /// Current selection
    fn current_selection(&self) -> Selection;

    /// Apply a transaction atomically and report the resulting update
    fn dispatch(&mut self, tx: Transaction) -> EditorUpdate;

    /// Show (or remove) the persistent mark for the transient highlight
    fn set_highlight_decoration(&mut self, span: Option<Span>);

    /// The editor's rendering surface, if it can be found
    fn editor_surface(&self) -> Option<Rect>;

    /// Resize the editor's rendering surface
    fn set_editor_surface(&mut self, rect: Rect);
}
