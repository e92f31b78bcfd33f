//! Data model - documents, selections, and parse tree snapshots

pub mod document;
pub mod geometry;
pub mod selection;
pub mod tree;

pub use document::{Document, LineInfo, LineLookup};
pub use geometry::Rect;
pub use selection::{Selection, SelectionRange};
pub use tree::{ParseTree, Preorder, Span, SyntaxNode};
