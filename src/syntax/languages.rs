//! Language identification and detection
//!
//! Maps file extensions to language IDs and tree-sitter grammars.

use std::path::Path;

/// Supported language identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LanguageId {
    #[default]
    PlainText,
    Rust,
    JavaScript,
    Json,
    Toml,
    Python,
}

impl LanguageId {
    /// Detect language from file extension
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "rs" => LanguageId::Rust,
            "js" | "mjs" | "cjs" | "jsx" => LanguageId::JavaScript,
            "json" => LanguageId::Json,
            "toml" => LanguageId::Toml,
            "py" | "pyi" => LanguageId::Python,
            _ => LanguageId::PlainText,
        }
    }

    /// Detect language from file path
    pub fn from_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .map(Self::from_extension)
            .unwrap_or(LanguageId::PlainText)
    }

    /// Get display name for the language
    pub fn display_name(&self) -> &'static str {
        match self {
            LanguageId::PlainText => "Plain Text",
            LanguageId::Rust => "Rust",
            LanguageId::JavaScript => "JavaScript",
            LanguageId::Json => "JSON",
            LanguageId::Toml => "TOML",
            LanguageId::Python => "Python",
        }
    }

    /// Tree-sitter grammar for this language (None for plain text)
    pub fn grammar(&self) -> Option<tree_sitter::Language> {
        let lang = match self {
            LanguageId::PlainText => return None,
            LanguageId::Rust => tree_sitter_rust::LANGUAGE.into(),
            LanguageId::JavaScript => tree_sitter_javascript::LANGUAGE.into(),
            LanguageId::Json => tree_sitter_json::LANGUAGE.into(),
            LanguageId::Toml => tree_sitter_toml_ng::LANGUAGE.into(),
            LanguageId::Python => tree_sitter_python::LANGUAGE.into(),
        };
        Some(lang)
    }

    /// Check if this language produces a real parse tree
    pub fn has_grammar(&self) -> bool {
        !matches!(self, LanguageId::PlainText)
    }
}
