//! Parser errors.

use std::path::PathBuf;

use super::error_code::{self, CohesionErrorCode};

/// Errors that can occur while building a syntax tree for a source file.
///
/// Syntax errors inside the source are not represented here: the provider
/// returns whatever partial tree tree-sitter recovers.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("Failed to load grammar for {language}: {message}")]
    GrammarLoad { language: String, message: String },

    #[error("Cannot read {path}: {message}")]
    Io { path: PathBuf, message: String },

    #[error("Tree-sitter error parsing {path}: {message}")]
    TreeSitter { path: PathBuf, message: String },
}

impl CohesionErrorCode for ParseError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::GrammarLoad { .. } => error_code::GRAMMAR_ERROR,
            Self::Io { .. } => error_code::IO_ERROR,
            Self::TreeSitter { .. } => error_code::PARSE_ERROR,
        }
    }
}
