//! Syntax Inspector - live parse tree panel for a text editor
//!
//! The panel lists every node of the editor's current parse tree as an
//! indented outline and keeps it in sync with the editor's selection:
//!
//! - rows are classified against the selection (covered, partial, cursor)
//! - hovering a row highlights its span in the editor
//! - clicking a row selects its span, without the panel scrolling itself
//! - a footer shows `line, col, pos` for every selection range
//!
//! The editor is reached through [`EditorHost`]; [`HeadlessEditor`] is a
//! complete in-process host backed by a rope and tree-sitter.
//!
//! State changes follow the Elm Architecture: [`Msg`] → [`update::update`] →
//! [`Cmd`], with [`InspectorPanel::handle`] performing the commands.

pub mod classify;
pub mod commands;
pub mod config;
pub mod config_paths;
pub mod footer;
pub mod highlight;
pub mod host;
pub mod messages;
pub mod model;
pub mod outline;
pub mod panel;
pub mod scheduler;
pub mod syntax;
pub mod tracing;
pub mod update;

// Re-export commonly used types
pub use classify::{classify, RowFlags};
pub use commands::Cmd;
pub use config::InspectorConfig;
pub use host::{EditorHost, EditorUpdate, HeadlessEditor, HighlightEffect, OriginTag, Transaction};
pub use messages::{Msg, PanelMsg};
pub use model::{ParseTree, Selection, SelectionRange, Span, SyntaxNode};
pub use outline::{render, OutlineRow, OutlineView};
pub use panel::{DockPosition, InspectorPanel};
pub use syntax::{LanguageId, SyntaxParser};
