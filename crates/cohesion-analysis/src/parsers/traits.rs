//! AstProvider trait: the seam between parsing and analysis.

use std::path::Path;

use cohesion_core::errors::ParseError;

use crate::ast::AstTree;

/// Builds the node arena the engine walks.
///
/// Syntax errors in the source are not failures: providers return whatever
/// tree they could recover.
pub trait AstProvider {
    /// Language name used in logs.
    fn language(&self) -> &'static str;

    /// Build a tree for `source`, recording `path` as every node's file.
    fn parse(&mut self, source: &[u8], path: &Path) -> Result<AstTree, ParseError>;

    /// Read `path` and build its tree.
    fn parse_file(&mut self, path: &Path) -> Result<AstTree, ParseError> {
        let source = std::fs::read(path).map_err(|e| ParseError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        self.parse(&source, path)
    }
}
