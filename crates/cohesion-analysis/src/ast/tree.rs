//! The node arena.

use std::path::PathBuf;

use cohesion_core::types::collections::SmallVec8;

use super::node::{NodeId, NodeKind, SourceLocation, SourceNode};

/// Immutable-after-build arena of [`SourceNode`]s. Index 0 is the
/// translation-unit root.
#[derive(Debug, Clone)]
pub struct AstTree {
    nodes: Vec<SourceNode>,
}

impl AstTree {
    /// Create a tree holding only a translation-unit root for `file`.
    /// The root's spelling is the file path, as with clang cursors.
    pub fn new(file: impl Into<PathBuf>) -> Self {
        let file = file.into();
        let root = SourceNode {
            kind: NodeKind::TranslationUnit,
            spelling: file.display().to_string(),
            location: SourceLocation::new(file, 0),
            lexical_parent: None,
            children: SmallVec8::new(),
        };
        Self { nodes: vec![root] }
    }

    #[inline]
    pub const fn root(&self) -> NodeId {
        NodeId(0)
    }

    #[inline]
    pub fn contains(&self, id: NodeId) -> bool {
        id.index() < self.nodes.len()
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A tree always holds its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn get(&self, id: NodeId) -> Option<&SourceNode> {
        self.nodes.get(id.index())
    }

    /// Borrow a node. Panics if `id` belongs to another tree.
    #[inline]
    pub fn node(&self, id: NodeId) -> &SourceNode {
        &self.nodes[id.index()]
    }

    #[inline]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.node(id).children
    }

    #[inline]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.node(id).lexical_parent
    }

    /// Append a node as the last child of `parent`.
    pub fn add_node(
        &mut self,
        parent: NodeId,
        kind: NodeKind,
        spelling: impl Into<String>,
        location: SourceLocation,
    ) -> NodeId {
        assert!(self.contains(parent), "parent {parent:?} is not a node of this tree");
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(SourceNode {
            kind,
            spelling: spelling.into(),
            location,
            lexical_parent: Some(parent),
            children: SmallVec8::new(),
        });
        self.nodes[parent.index()].children.push(id);
        id
    }

    /// Append a node located in the same file as `parent`.
    pub fn add_child(
        &mut self,
        parent: NodeId,
        kind: NodeKind,
        spelling: impl Into<String>,
        line: u32,
    ) -> NodeId {
        let file = self.node(parent).location.file.clone();
        self.add_node(parent, kind, spelling, SourceLocation::new(file, line))
    }

    /// Walk the lexical-parent chain upward, starting at `id`'s parent.
    pub fn ancestors(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        std::iter::successors(self.parent(id), move |&current| self.parent(current))
    }
}
