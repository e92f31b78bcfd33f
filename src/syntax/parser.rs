//! Tree-sitter parsing into [`ParseTree`] snapshots
//!
//! Keeps the last tree and source so edits parse incrementally, and hands back
//! the previous snapshot untouched when the text did not change.

use anyhow::{anyhow, Result};
use ropey::Rope;
use tree_sitter::{InputEdit, Parser, Point, Tree, TreeCursor};

use super::languages::LanguageId;
use crate::model::{ParseTree, SyntaxNode};

/// Root label used for documents without a grammar
pub const PLAIN_TEXT_ROOT: &str = "Document";

/// Cached parse state (enables incremental parsing and snapshot reuse)
struct CachedParse {
    source: String,
    tree: Option<Tree>,
    snapshot: ParseTree,
}

/// Convert a byte offset to a tree-sitter Point (row, column in bytes)
fn byte_to_point(text: &str, byte_offset: usize) -> Point {
    let before = &text.as_bytes()[..byte_offset];
    let row = before.iter().filter(|&&b| b == b'\n').count();
    let column = match before.iter().rposition(|&b| b == b'\n') {
        Some(nl) => byte_offset - nl - 1,
        None => byte_offset,
    };
    Point { row, column }
}

/// Compute an InputEdit by diffing old and new source text.
/// Returns None if the sources are identical.
fn compute_incremental_edit(old_src: &str, new_src: &str) -> Option<InputEdit> {
    if old_src == new_src {
        return None;
    }

    let old_bytes = old_src.as_bytes();
    let new_bytes = new_src.as_bytes();

    let start = old_bytes
        .iter()
        .zip(new_bytes)
        .take_while(|(a, b)| a == b)
        .count();

    // Common suffix, never overlapping the prefix
    let max_suffix = (old_bytes.len() - start).min(new_bytes.len() - start);
    let suffix = old_bytes
        .iter()
        .rev()
        .zip(new_bytes.iter().rev())
        .take(max_suffix)
        .take_while(|(a, b)| a == b)
        .count();

    let old_end = old_bytes.len() - suffix;
    let new_end = new_bytes.len() - suffix;

    Some(InputEdit {
        start_byte: start,
        old_end_byte: old_end,
        new_end_byte: new_end,
        start_position: byte_to_point(old_src, start),
        old_end_position: byte_to_point(old_src, old_end),
        new_end_position: byte_to_point(new_src, new_end),
    })
}

/// Parser for one document
pub struct SyntaxParser {
    language: LanguageId,
    parser: Option<Parser>,
    cache: Option<CachedParse>,
}

impl SyntaxParser {
    /// Create a parser for a language.
    ///
    /// Snapshots keep anonymous tokens too, marked with `named: false`.
    pub fn new(language: LanguageId) -> Result<Self> {
        let parser = match language.grammar() {
            Some(grammar) => {
                let mut parser = Parser::new();
                parser
                    .set_language(&grammar)
                    .map_err(|e| anyhow!("failed to load {} grammar: {}", language.display_name(), e))?;
                Some(parser)
            }
            None => None,
        };

        Ok(Self {
            language,
            parser,
            cache: None,
        })
    }

    pub fn language(&self) -> LanguageId {
        self.language
    }

    /// Parse the rope, returning the cached snapshot when the text is unchanged
    pub fn parse(&mut self, rope: &Rope) -> ParseTree {
        let source = rope.to_string();

        if let Some(cached) = &self.cache {
            if cached.source == source {
                tracing::trace!("Source unchanged, reusing snapshot");
                return cached.snapshot.clone();
            }
        }

        let tree = self.parse_tree(&source);
        let snapshot = match &tree {
            Some(tree) => ParseTree::new(convert_tree(tree, rope)),
            None => ParseTree::new(SyntaxNode::new(PLAIN_TEXT_ROOT, 0, rope.len_chars())),
        };

        self.cache = Some(CachedParse {
            source,
            tree,
            snapshot: snapshot.clone(),
        });
        snapshot
    }

    fn parse_tree(&mut self, source: &str) -> Option<Tree> {
        let parser = self.parser.as_mut()?;

        let old_tree = match self.cache.as_mut() {
            Some(CachedParse {
                source: old_source,
                tree: Some(old_tree),
                ..
            }) => compute_incremental_edit(old_source, source).map(|edit| {
                tracing::trace!(
                    "Incremental parse: edit at byte {}..{} -> {}..{}",
                    edit.start_byte,
                    edit.old_end_byte,
                    edit.start_byte,
                    edit.new_end_byte
                );
                old_tree.edit(&edit);
                old_tree.clone()
            }),
            _ => None,
        };

        match parser.parse(source, old_tree.as_ref()) {
            Some(tree) => Some(tree),
            None if old_tree.is_some() => {
                tracing::warn!(
                    "Incremental parse failed for {:?}, falling back to full parse",
                    self.language
                );
                parser.parse(source, None)
            }
            None => {
                tracing::error!("Parse failed for {:?}", self.language);
                None
            }
        }
    }
}

/// Convert a tree-sitter tree into a snapshot with character offsets
fn convert_tree(tree: &Tree, rope: &Rope) -> SyntaxNode {
    let mut cursor = tree.walk();
    convert_node(&mut cursor, rope)
}

fn convert_node(cursor: &mut TreeCursor, rope: &Rope) -> SyntaxNode {
    let node = cursor.node();
    let from = rope.byte_to_char(node.start_byte());
    let to = rope.byte_to_char(node.end_byte());

    let mut children = Vec::new();
    if cursor.goto_first_child() {
        loop {
            children.push(convert_node(cursor, rope));
            if !cursor.goto_next_sibling() {
                break;
            }
        }
        cursor.goto_parent();
    }

    let converted = if node.is_named() {
        SyntaxNode::new(node.kind(), from, to)
    } else {
        SyntaxNode::anonymous(node.kind(), from, to)
    };
    converted.with_children(children)
}
