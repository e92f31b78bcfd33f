//! Syntax module
//!
//! Produces [`ParseTree`](crate::model::ParseTree) snapshots from document text
//! with tree-sitter:
//! - Language detection from file extensions
//! - Incremental reparsing of edited text
//! - Snapshot reuse when the text did not change, so tree identity stays
//!   stable across no-op updates

mod languages;
mod parser;

pub use languages::LanguageId;
pub use parser::{SyntaxParser, PLAIN_TEXT_ROOT};
