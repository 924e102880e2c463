//! Qualified names from the lexical-parent chain.

use crate::ast::{AstTree, NodeId};

/// `Outer::Inner`-style name of `node`.
///
/// Joins the spellings from just below the translation unit down to `node`.
/// Anonymous scopes contribute empty segments (`ns::::Inner`).
pub fn qualified_name(tree: &AstTree, node: NodeId) -> String {
    let mut names: Vec<&str> = Vec::new();
    names.push(&tree.node(node).spelling);
    names.extend(tree.ancestors(node).map(|id| tree.node(id).spelling.as_str()));
    names.reverse();
    names[1..].join("::")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::NodeKind;

    #[test]
    fn nested_class_is_prefixed_by_outer() {
        let mut tree = AstTree::new("a.cpp");
        let root = tree.root();
        let outer = tree.add_child(root, NodeKind::ClassDecl, "Outer", 1);
        let inner = tree.add_child(outer, NodeKind::StructDecl, "Inner", 2);
        assert_eq!(qualified_name(&tree, inner), "Outer::Inner");
        assert_eq!(qualified_name(&tree, outer), "Outer");
    }

    #[test]
    fn namespaces_are_part_of_the_name() {
        let mut tree = AstTree::new("a.cpp");
        let root = tree.root();
        let ns = tree.add_child(root, NodeKind::Namespace, "gfx", 1);
        let class = tree.add_child(ns, NodeKind::ClassDecl, "Mesh", 2);
        assert_eq!(qualified_name(&tree, class), "gfx::Mesh");
    }

    #[test]
    fn anonymous_scopes_leave_empty_segments() {
        let mut tree = AstTree::new("a.cpp");
        let root = tree.root();
        let ns = tree.add_child(root, NodeKind::Namespace, "", 1);
        let outer = tree.add_child(ns, NodeKind::ClassDecl, "Outer", 2);
        let anon = tree.add_child(outer, NodeKind::StructDecl, "", 3);
        let inner = tree.add_child(anon, NodeKind::StructDecl, "Inner", 4);
        assert_eq!(qualified_name(&tree, inner), "::Outer::::Inner");
    }

    #[test]
    fn root_has_empty_name() {
        let tree = AstTree::new("a.cpp");
        assert_eq!(qualified_name(&tree, tree.root()), "");
    }
}
