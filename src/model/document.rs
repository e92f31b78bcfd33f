//! Document model - the text buffer and line lookup

use ropey::Rope;
use std::path::PathBuf;

use crate::syntax::LanguageId;

/// A resolved document line (1-based number, character offset of its start)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineInfo {
    pub number: usize,
    pub start: usize,
}

/// Resolve the line containing a character offset
///
/// Offsets must be within `0..=len_chars`; anything else is a caller bug.
pub trait LineLookup {
    fn line_at(&self, offset: usize) -> LineInfo;
}

impl LineLookup for Rope {
    fn line_at(&self, offset: usize) -> LineInfo {
        let line_idx = self.char_to_line(offset);
        LineInfo {
            number: line_idx + 1,
            start: self.line_to_char(line_idx),
        }
    }
}

/// Document state - text buffer plus the bits the parser needs
#[derive(Debug, Clone)]
pub struct Document {
    /// The text buffer
    pub buffer: Rope,
    /// Path to the file on disk (None for scratch buffers)
    pub file_path: Option<PathBuf>,
    /// Detected language for parsing
    pub language: LanguageId,
    /// Incremented on every text replacement
    pub revision: u64,
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::with_text("")
    }

    /// Create a document with initial text
    pub fn with_text(text: &str) -> Self {
        Self {
            buffer: Rope::from(text),
            file_path: None,
            language: LanguageId::PlainText,
            revision: 0,
        }
    }

    /// Create a document with text and an explicit language
    pub fn with_language(text: &str, language: LanguageId) -> Self {
        Self {
            language,
            ..Self::with_text(text)
        }
    }

    /// Load a document from a file path
    pub fn from_file(path: PathBuf) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(&path)?;
        let language = LanguageId::from_path(&path);
        Ok(Self {
            buffer: Rope::from(content),
            file_path: Some(path),
            language,
            revision: 0,
        })
    }

    /// Length in characters
    pub fn len_chars(&self) -> usize {
        self.buffer.len_chars()
    }

    /// Number of lines (an empty document has one line)
    pub fn line_count(&self) -> usize {
        self.buffer.len_lines()
    }

    /// Replace the characters in `[from, to)` with `text`, bumping the revision
    pub fn replace(&mut self, from: usize, to: usize, text: &str) {
        debug_assert!(from <= to && to <= self.buffer.len_chars());
        self.buffer.remove(from..to);
        self.buffer.insert(from, text);
        self.revision += 1;
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl LineLookup for Document {
    fn line_at(&self, offset: usize) -> LineInfo {
        self.buffer.line_at(offset)
    }
}
