//! Parse one file and report on the classes declared in it.

use std::path::Path;
use std::time::Instant;

use cohesion_core::errors::AnalysisError;
use tracing::info;

use crate::engine::{analyze_tree, ClassReport};
use crate::parsers::{AstProvider, CppAstProvider};

/// Analyze a C++ file with the tree-sitter provider.
pub fn analyze_file(path: &Path) -> Result<Vec<ClassReport>, AnalysisError> {
    let mut provider = CppAstProvider::new()?;
    analyze_file_with(&mut provider, path)
}

/// Analyze `path` with any provider. Only classes whose location is `path`
/// itself are reported; classes pulled in from other files are skipped.
pub fn analyze_file_with<P>(provider: &mut P, path: &Path) -> Result<Vec<ClassReport>, AnalysisError>
where
    P: AstProvider + ?Sized,
{
    let start = Instant::now();
    let tree = provider.parse_file(path)?;
    let reports = analyze_tree(&tree, path);
    info!(
        path = %path.display(),
        language = provider.language(),
        classes = reports.len(),
        duration_ms = start.elapsed().as_millis() as u64,
        "analysis complete"
    );
    Ok(reports)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::{AstTree, NodeKind};
    use cohesion_core::errors::{CohesionErrorCode, ParseError};

    struct Canned;

    impl AstProvider for Canned {
        fn language(&self) -> &'static str {
            "canned"
        }

        fn parse(&mut self, _source: &[u8], path: &Path) -> Result<AstTree, ParseError> {
            let mut tree = AstTree::new(path);
            let root = tree.root();
            let class = tree.add_child(root, NodeKind::StructDecl, "Pair", 1);
            tree.add_child(class, NodeKind::Field, "a", 2);
            Ok(tree)
        }
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = analyze_file_with(&mut Canned, Path::new("/nonexistent/input.cpp")).unwrap_err();
        assert!(matches!(err, AnalysisError::Parse(ParseError::Io { .. })));
        assert_eq!(err.error_code(), "IO_ERROR");
    }

    #[test]
    fn custom_provider_feeds_the_engine() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pair.cpp");
        std::fs::write(&path, "").unwrap();

        let reports = analyze_file_with(&mut Canned, &path).unwrap();
        assert_eq!(reports.len(), 1);
        assert_eq!(reports[0].qualified_name, "Pair");
        assert!(reports[0].matrix.is_empty());
    }
}
