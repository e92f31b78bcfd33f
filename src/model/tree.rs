//! Parse tree snapshots
//!
//! A [`ParseTree`] is an immutable snapshot shared behind an `Arc`. Two
//! snapshots are the same tree iff they point at the same allocation, which is
//! what the rebuild scheduler compares on every editor update.

use std::fmt;
use std::sync::Arc;

/// Half-open character interval `[from, to)`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Span {
    pub from: usize,
    pub to: usize,
}

impl Span {
    pub const fn new(from: usize, to: usize) -> Self {
        debug_assert!(from <= to);
        Self { from, to }
    }

    pub fn len(&self) -> usize {
        self.to - self.from
    }

    /// Zero-width span (from == to)
    pub fn is_empty(&self) -> bool {
        self.from == self.to
    }

    /// Check if `other` lies entirely inside this span
    pub fn contains_span(&self, other: Span) -> bool {
        self.from <= other.from && other.to <= self.to
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}..{})", self.from, self.to)
    }
}

/// A single node: grammar label, span, children in document order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntaxNode {
    pub name: String,
    pub span: Span,
    /// False for grammar tokens without a rule name (punctuation, keywords)
    pub named: bool,
    pub children: Vec<SyntaxNode>,
}

impl SyntaxNode {
    /// Create a named leaf node
    pub fn new(name: impl Into<String>, from: usize, to: usize) -> Self {
        Self {
            name: name.into(),
            span: Span::new(from, to),
            named: true,
            children: Vec::new(),
        }
    }

    /// Create an anonymous leaf node
    pub fn anonymous(name: impl Into<String>, from: usize, to: usize) -> Self {
        Self {
            named: false,
            ..Self::new(name, from, to)
        }
    }

    /// Attach children (builder style)
    pub fn with_children(mut self, children: Vec<SyntaxNode>) -> Self {
        debug_assert!(
            children.iter().all(|c| self.span.contains_span(c.span)),
            "children of {} must nest inside {}",
            self.name,
            self.span
        );
        self.children = children;
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }
}

/// Immutable, identity-comparable parse tree snapshot
#[derive(Clone)]
pub struct ParseTree {
    root: Arc<SyntaxNode>,
}

impl ParseTree {
    pub fn new(root: SyntaxNode) -> Self {
        Self {
            root: Arc::new(root),
        }
    }

    pub fn root(&self) -> &SyntaxNode {
        &self.root
    }

    /// Reference identity: true only for clones of the same snapshot
    pub fn same_tree(&self, other: &ParseTree) -> bool {
        Arc::ptr_eq(&self.root, &other.root)
    }

    /// Depth-first pre-order traversal yielding `(depth, node)`; the root has depth 0
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder {
            stack: vec![(0, self.root())],
            named_only: false,
        }
    }

    /// Like [`ParseTree::preorder`], skipping anonymous nodes and everything
    /// below them. The root is always yielded.
    pub fn named_preorder(&self) -> Preorder<'_> {
        Preorder {
            stack: vec![(0, self.root())],
            named_only: true,
        }
    }

    /// Total number of nodes (one outline row each)
    pub fn node_count(&self) -> usize {
        self.preorder().count()
    }
}

impl fmt::Debug for ParseTree {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseTree")
            .field("root", &self.root.name)
            .field("span", &self.root.span)
            .field("ptr", &Arc::as_ptr(&self.root))
            .finish()
    }
}

/// Explicit-stack pre-order iterator.
///
/// Depth travels with each stack entry, so no counter is shared between
/// enter/leave steps.
pub struct Preorder<'a> {
    stack: Vec<(usize, &'a SyntaxNode)>,
    named_only: bool,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = (usize, &'a SyntaxNode);

    fn next(&mut self) -> Option<Self::Item> {
        let named_only = self.named_only;
        let (depth, node) = self.stack.pop()?;
        // Reverse so the first child is popped next
        self.stack.extend(
            node.children
                .iter()
                .rev()
                .filter(|child| !named_only || child.named)
                .map(|child| (depth + 1, child)),
        );
        Some((depth, node))
    }
}
