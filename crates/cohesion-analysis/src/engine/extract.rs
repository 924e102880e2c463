//! Class enumeration: one co-occurrence report per class or struct.

use std::path::Path;

use tracing::debug;

use crate::ast::{AstTree, NodeId, NodeKind};

use super::cooccurrence::{aggregate, CooccurrenceMatrix};
use super::naming::qualified_name;
use super::scope::{ChildScope, SameFile};
use super::search::find_all;
use super::tally::tally_members;

/// Co-occurrence result for one class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassReport {
    pub qualified_name: String,
    pub kind: NodeKind,
    pub line: u32,
    /// Distinct method spellings found in the class body.
    pub method_count: usize,
    /// Distinct field spellings found in the class body.
    pub field_count: usize,
    pub matrix: CooccurrenceMatrix,
}

/// Every class/struct under `root` reachable through `scope`, in pre-order
/// (an outer class precedes the classes nested in it).
pub fn enumerate_classes<S>(tree: &AstTree, root: NodeId, scope: &S) -> Vec<ClassReport>
where
    S: ChildScope + ?Sized,
{
    find_all(tree, root, |n| n.kind.is_class(), scope)
        .into_iter()
        .map(|class| {
            let node = tree.node(class);
            let name = qualified_name(tree, class);
            let tally = tally_members(tree, class, scope);
            debug!(
                class = %name,
                line = node.location.line,
                methods = tally.methods.len(),
                fields = tally.field_names.len(),
                "tallied class"
            );
            ClassReport {
                qualified_name: name,
                kind: node.kind,
                line: node.location.line,
                method_count: tally.methods.len(),
                field_count: tally.field_names.len(),
                matrix: aggregate(&tally),
            }
        })
        .collect()
}

/// Reports for the classes physically declared in `path`.
pub fn analyze_tree(tree: &AstTree, path: &Path) -> Vec<ClassReport> {
    enumerate_classes(tree, tree.root(), &SameFile::new(path))
}
