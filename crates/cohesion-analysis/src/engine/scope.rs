//! Child-selection policies for tree search.

use std::path::{Path, PathBuf};

use crate::ast::{AstTree, NodeId};

/// Decides which children of a node a search descends into.
pub trait ChildScope {
    /// Ordered children of `node` that remain in scope.
    fn children(&self, tree: &AstTree, node: NodeId) -> Vec<NodeId>;
}

impl<F> ChildScope for F
where
    F: Fn(&AstTree, NodeId) -> Vec<NodeId>,
{
    fn children(&self, tree: &AstTree, node: NodeId) -> Vec<NodeId> {
        self(tree, node)
    }
}

/// Every child, unfiltered.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllChildren;

impl ChildScope for AllChildren {
    fn children(&self, tree: &AstTree, node: NodeId) -> Vec<NodeId> {
        tree.children(node).to_vec()
    }
}

/// Children physically located in one file. Keeps declarations pulled in
/// from headers out of the analysis.
#[derive(Debug, Clone)]
pub struct SameFile {
    target: PathBuf,
    canonical: Option<PathBuf>,
}

impl SameFile {
    pub fn new(target: impl Into<PathBuf>) -> Self {
        let target = target.into();
        let canonical = std::fs::canonicalize(&target).ok();
        Self { target, canonical }
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    fn matches(&self, file: &Path) -> bool {
        if file == self.target {
            return true;
        }
        match &self.canonical {
            Some(canonical) => std::fs::canonicalize(file).is_ok_and(|f| &f == canonical),
            None => false,
        }
    }
}

impl ChildScope for SameFile {
    fn children(&self, tree: &AstTree, node: NodeId) -> Vec<NodeId> {
        tree.children(node)
            .iter()
            .copied()
            .filter(|&child| self.matches(&tree.node(child).location.file))
            .collect()
    }
}

/// Wraps another scope and hides nested `class`/`struct` declarations, so a
/// search started at a class never reaches a nested class's members.
#[derive(Debug, Clone, Copy)]
pub struct ExcludeNestedTypes<'a, S: ?Sized> {
    inner: &'a S,
}

impl<'a, S: ChildScope + ?Sized> ExcludeNestedTypes<'a, S> {
    pub fn new(inner: &'a S) -> Self {
        Self { inner }
    }
}

impl<S: ChildScope + ?Sized> ChildScope for ExcludeNestedTypes<'_, S> {
    fn children(&self, tree: &AstTree, node: NodeId) -> Vec<NodeId> {
        let mut children = self.inner.children(tree, node);
        children.retain(|&child| !tree.node(child).kind.is_class());
        children
    }
}
