//! Pre-order tree search with pluggable child selection.
//!
//! Both searches run on an explicit heap stack, so input nesting depth never
//! translates into call-stack depth.

use crate::ast::{AstTree, NodeId, SourceNode};

use super::scope::ChildScope;

/// Every node under `root` (inclusive) matching `predicate`, in pre-order.
///
/// A match does not stop descent: a class nested in a matching class is
/// reported right after its outer class.
///
/// Panics if `root` is not a node of `tree`.
pub fn find_all<S, P>(tree: &AstTree, root: NodeId, predicate: P, scope: &S) -> Vec<NodeId>
where
    S: ChildScope + ?Sized,
    P: Fn(&SourceNode) -> bool,
{
    assert!(tree.contains(root), "find_all: root {root:?} is not a node of this tree");

    let mut found = Vec::new();
    let mut stack = vec![root];
    while let Some(id) = stack.pop() {
        if predicate(tree.node(id)) {
            found.push(id);
        }
        stack.extend(scope.children(tree, id).into_iter().rev());
    }
    found
}

/// First node under `root` (inclusive) matching `predicate`, in pre-order.
///
/// Panics if `root` is not a node of `tree`.
pub fn find_first<S, P>(tree: &AstTree, root: NodeId, predicate: P, scope: &S) -> Option<NodeId>
where
    S: ChildScope + ?Sized,
    P: Fn(&SourceNode) -> bool,
{
    assert!(tree.contains(root), "find_first: root {root:?} is not a node of this tree");

    let mut stack = vec![root];
    while let Some(id) = stack.pop() {
        if predicate(tree.node(id)) {
            return Some(id);
        }
        stack.extend(scope.children(tree, id).into_iter().rev());
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::NodeKind;
    use crate::engine::scope::AllChildren;

    /// TU { A { B { f }, g }, C }
    fn sample() -> (AstTree, [NodeId; 5]) {
        let mut tree = AstTree::new("t.cpp");
        let root = tree.root();
        let a = tree.add_child(root, NodeKind::ClassDecl, "A", 1);
        let b = tree.add_child(a, NodeKind::StructDecl, "B", 2);
        let f = tree.add_child(b, NodeKind::Method, "f", 3);
        let g = tree.add_child(a, NodeKind::Method, "g", 5);
        let c = tree.add_child(root, NodeKind::ClassDecl, "C", 8);
        (tree, [a, b, f, g, c])
    }

    #[test]
    fn nested_matches_follow_their_outer_match() {
        let (tree, [a, b, _, _, c]) = sample();
        let classes = find_all(&tree, tree.root(), |n| n.kind.is_class(), &AllChildren);
        assert_eq!(classes, vec![a, b, c]);
    }

    #[test]
    fn pre_order_visits_subtree_before_next_sibling() {
        let (tree, [_, _, f, g, _]) = sample();
        let methods = find_all(&tree, tree.root(), |n| n.kind == NodeKind::Method, &AllChildren);
        assert_eq!(methods, vec![f, g]);
    }

    #[test]
    fn root_itself_can_match() {
        let (tree, [a, ..]) = sample();
        let hits = find_all(&tree, a, |n| n.spelling == "A", &AllChildren);
        assert_eq!(hits, vec![a]);
    }

    #[test]
    fn find_first_short_circuits_in_pre_order() {
        let (tree, [_, _, f, ..]) = sample();
        let first = find_first(&tree, tree.root(), |n| n.kind == NodeKind::Method, &AllChildren);
        assert_eq!(first, Some(f));
        assert_eq!(find_first(&tree, tree.root(), |n| n.spelling == "zzz", &AllChildren), None);
    }

    #[test]
    #[should_panic(expected = "is not a node of this tree")]
    fn absent_root_is_a_contract_violation() {
        let (tree, _) = sample();
        let _ = find_all(&tree, NodeId(999), |_| true, &AllChildren);
    }

    #[test]
    fn deep_nesting_does_not_overflow() {
        let mut tree = AstTree::new("deep.cpp");
        let mut current = tree.root();
        for depth in 0..200_000u32 {
            current = tree.add_child(current, NodeKind::Other, "", depth);
        }
        tree.add_child(current, NodeKind::Field, "leaf", 0);
        let hits = find_all(&tree, tree.root(), |n| n.kind == NodeKind::Field, &AllChildren);
        assert_eq!(hits.len(), 1);
    }
}
