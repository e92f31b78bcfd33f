//! In-process editor host without a window
//!
//! Holds a rope document, its parse tree, the selection, a surface rect, and
//! the current highlight decoration. Used by integration tests and benches,
//! and by embedders that drive the inspector from their own event loop.

use std::path::PathBuf;

use anyhow::{Context, Result};

use super::{EditorHost, EditorUpdate, HighlightEffect, OriginTag, Transaction};
use crate::model::{
    Document, LineInfo, LineLookup, ParseTree, Rect, Selection, SelectionRange, Span,
};
use crate::syntax::{LanguageId, SyntaxParser};

/// Default surface: 1280x800 window
const DEFAULT_SURFACE: Rect = Rect {
    x: 0.0,
    y: 0.0,
    width: 1280.0,
    height: 800.0,
};

#[derive(Debug)]
pub struct HeadlessEditor {
    document: Document,
    parser: Option<ParserSlot>,
    tree: ParseTree,
    selection: Selection,
    surface: Option<Rect>,
    decoration: Option<Span>,
    dispatched: Vec<Transaction>,
}

/// `SyntaxParser` holds a tree-sitter parser, which is not `Debug`
struct ParserSlot(SyntaxParser);

impl std::fmt::Debug for ParserSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("SyntaxParser")
            .field(&self.0.language())
            .finish()
    }
}

impl HeadlessEditor {
    /// Create an editor whose tree comes from a tree-sitter grammar
    pub fn new(text: &str, language: LanguageId) -> Result<Self> {
        Self::from_document(Document::with_language(text, language))
    }

    /// Open a file, detecting its language from the extension
    pub fn open(path: PathBuf) -> Result<Self> {
        let document = Document::from_file(path.clone())
            .with_context(|| format!("failed to read {}", path.display()))?;
        Self::from_document(document)
    }

    /// Create an editor from a document, parsing it once
    pub fn from_document(document: Document) -> Result<Self> {
        let mut parser = SyntaxParser::new(document.language)?;
        let tree = parser.parse(&document.buffer);
        Ok(Self {
            document,
            parser: Some(ParserSlot(parser)),
            tree,
            selection: Selection::default(),
            surface: Some(DEFAULT_SURFACE),
            decoration: None,
            dispatched: Vec::new(),
        })
    }

    /// Create an editor with a hand-built tree (no parser attached)
    pub fn with_tree(text: &str, tree: ParseTree) -> Self {
        Self {
            document: Document::with_text(text),
            parser: None,
            tree,
            selection: Selection::default(),
            surface: Some(DEFAULT_SURFACE),
            decoration: None,
            dispatched: Vec::new(),
        }
    }

    /// Replace the surface rect (`None` simulates a missing mount point)
    pub fn with_surface(mut self, surface: Option<Rect>) -> Self {
        self.surface = surface;
        self
    }

    /// Start with a given selection
    pub fn with_selection(mut self, selection: Selection) -> Self {
        self.selection = selection;
        self
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Highlight decoration currently shown
    pub fn decoration(&self) -> Option<Span> {
        self.decoration
    }

    pub fn surface(&self) -> Option<Rect> {
        self.surface
    }

    /// Every transaction dispatched so far, oldest first
    pub fn dispatched(&self) -> &[Transaction] {
        &self.dispatched
    }

    /// Selection change coming from ordinary editor input (keyboard, mouse)
    pub fn set_selection(&mut self, selection: Selection) -> EditorUpdate {
        self.selection = selection;
        self.make_update(true, false, None, Vec::new())
    }

    /// Swap in a new hand-built tree, as a reparse would
    pub fn set_tree(&mut self, tree: ParseTree) -> EditorUpdate {
        self.tree = tree;
        self.make_update(false, false, None, Vec::new())
    }

    /// Replace `[from, to)` with `text`, reparse, and map the selection through the edit
    pub fn replace(&mut self, from: usize, to: usize, text: &str) -> EditorUpdate {
        self.document.replace(from, to, text);
        if let Some(ParserSlot(parser)) = self.parser.as_mut() {
            self.tree = parser.parse(&self.document.buffer);
        }

        let inserted = text.chars().count();
        let map = |offset: usize| -> usize {
            if offset <= from {
                offset
            } else if offset >= to {
                offset - (to - from) + inserted
            } else {
                from + inserted
            }
        };
        let mapped: Vec<SelectionRange> = self
            .selection
            .iter()
            .map(|r| SelectionRange::new(map(r.anchor), map(r.head)))
            .collect();
        let mapped = Selection::from_ranges(mapped).unwrap_or_default();

        let selection_changed = mapped != self.selection;
        self.selection = mapped;
        self.make_update(selection_changed, true, None, Vec::new())
    }

    /// An update where nothing changed (e.g. a focus or viewport event)
    pub fn idle_update(&self) -> EditorUpdate {
        self.make_update(false, false, None, Vec::new())
    }

    fn make_update(
        &self,
        selection_changed: bool,
        doc_changed: bool,
        origin: Option<OriginTag>,
        effects: Vec<HighlightEffect>,
    ) -> EditorUpdate {
        EditorUpdate {
            tree: self.tree.clone(),
            selection: self.selection.clone(),
            selection_changed,
            doc_changed,
            origin,
            effects,
        }
    }
}

impl LineLookup for HeadlessEditor {
    fn line_at(&self, offset: usize) -> LineInfo {
        self.document.line_at(offset)
    }
}

impl EditorHost for HeadlessEditor {
    fn current_tree(&self) -> ParseTree {
        self.tree.clone()
    }

    fn current_selection(&self) -> Selection {
        self.selection.clone()
    }

    fn dispatch(&mut self, tx: Transaction) -> EditorUpdate {
        tracing::trace!(
            effects = tx.effects.len(),
            selects = tx.selection.is_some(),
            tagged = tx.origin.is_some(),
            "headless dispatch"
        );
        self.dispatched.push(tx.clone());

        let selection_changed = match tx.selection {
            Some(selection) => {
                self.selection = selection;
                true
            }
            None => false,
        };
        self.make_update(selection_changed, false, tx.origin, tx.effects)
    }

    fn set_highlight_decoration(&mut self, span: Option<Span>) {
        self.decoration = span;
    }

    fn editor_surface(&self) -> Option<Rect> {
        self.surface
    }

    fn set_editor_surface(&mut self, rect: Rect) {
        self.surface = Some(rect);
    }
}
